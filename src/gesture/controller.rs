//! Gesture state machine
//!
//! The host drives this with explicit events: `on_press_start`, a per-frame
//! `tick`, `on_press_end`. No ambient clocks, no input polling; timestamps
//! and pointer positions arrive as arguments.

use glam::{Vec2, Vec3};

use crate::config::SwipeConfig;
use crate::consts;
use crate::gesture::bend::stroke_bend;
use crate::gesture::fit::{FitResult, fit_stroke};
use crate::gesture::record::{GestureRecord, Sample, SampleOutcome};
use crate::screen::Viewport;
use crate::world::launch::{LaunchBody, LaunchParameters, LaunchScene, synthesize_launch};

/// Where the controller is in one gesture's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer down, samples accumulating
    Recording,
    /// Window elapsed; drag continues but sampling has stopped
    RecordComplete,
}

/// Swipe state machine, one per launchable body
#[derive(Debug, Clone)]
pub struct SwipeController {
    config: SwipeConfig,
    record: Option<GestureRecord>,
    fit: Option<FitResult>,
    phase: GesturePhase,
}

impl SwipeController {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            record: None,
            fit: None,
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Samples of the open or just-closed gesture, for read-only viz
    pub fn samples(&self) -> &[Sample] {
        self.record.as_ref().map_or(&[], |r| r.samples())
    }

    /// Latest fit; live while dragging, final after release
    pub fn fit(&self) -> Option<&FitResult> {
        self.fit.as_ref()
    }

    /// Open a gesture at the pressed pointer position
    ///
    /// Rejected while the body is still moving. An already-open gesture is
    /// abandoned and replaced.
    pub fn on_press_start(
        &mut self,
        pointer_px: Vec2,
        viewport: Viewport,
        now: f64,
        body: &impl LaunchBody,
    ) -> bool {
        if body.linear_velocity() != Vec3::ZERO {
            log::debug!("press ignored, body still moving");
            return false;
        }
        let position = viewport.to_reference(pointer_px, &self.config);
        self.record = Some(GestureRecord::begin(position, now));
        self.fit = None;
        self.phase = GesturePhase::Recording;
        log::debug!("gesture start at {position} t={now:.3}");
        true
    }

    /// Per-frame pointer update while a gesture is open
    pub fn tick(&mut self, pointer_px: Vec2, viewport: Viewport, now: f64) {
        if self.phase != GesturePhase::Recording {
            return;
        }
        let Some(record) = self.record.as_mut() else {
            return;
        };
        let position = viewport.to_reference(pointer_px, &self.config);
        match record.try_sample(position, now, &self.config) {
            SampleOutcome::Appended => {
                // Live fit for host-side stroke feedback
                self.fit = fit_stroke(record.samples());
            }
            SampleOutcome::WindowClosed => {
                self.phase = GesturePhase::RecordComplete;
                log::debug!("record complete, samples={}", record.len());
            }
            SampleOutcome::TooSoon => {}
        }
    }

    /// Close the gesture; when it resolves, launch the body
    ///
    /// Returns the parameters that were applied, or `None` when the gesture
    /// was too short or degenerate. Either way the controller is `Idle`
    /// afterwards and the record stays readable until the next press.
    pub fn on_press_end(
        &mut self,
        scene: &LaunchScene,
        now: f64,
        body: &mut impl LaunchBody,
    ) -> Option<LaunchParameters> {
        if self.phase == GesturePhase::Idle {
            return None;
        }
        self.phase = GesturePhase::Idle;

        let record = self.record.as_ref()?;
        if record.len() < consts::FIT_MIN_SAMPLES {
            log::debug!("gesture too short, samples={}", record.len());
            return None;
        }

        let fit = fit_stroke(record.samples())?;
        self.fit = Some(fit);
        let bend = stroke_bend(record.samples(), &fit, &self.config);
        let duration = (now - record.start_time()) as f32;

        let Some(launch) = synthesize_launch(&fit, bend, duration, scene, &self.config) else {
            log::debug!("launch aborted, degenerate direction");
            return None;
        };
        body.apply_launch(&launch);
        log::info!(
            "launch dir={} speed={:.2} bend={:.3} spin={}",
            launch.direction,
            launch.speed,
            bend,
            launch.spin
        );
        Some(launch)
    }

    /// Abandon the open gesture without launching
    pub fn cancel(&mut self) {
        if self.phase != GesturePhase::Idle {
            log::debug!("gesture cancelled");
            self.phase = GesturePhase::Idle;
        }
    }
}
