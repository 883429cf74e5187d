//! Stroke capture
//!
//! Buffers timestamped pointer samples for the duration of one gesture.
//! Positions are already normalized into reference space by the caller.

use glam::Vec2;

use crate::config::SwipeConfig;

/// One accepted pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position in reference pixels, y-up
    pub position: Vec2,
    /// Capture time in seconds
    pub time: f64,
}

/// Why a candidate sample was or was not stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    Appended,
    /// Rejected by the rate limiter
    TooSoon,
    /// Recording window elapsed; gesture stays open until release
    WindowClosed,
}

/// Sample buffer for a single press-to-release gesture
#[derive(Debug, Clone)]
pub struct GestureRecord {
    samples: Vec<Sample>,
    start_time: f64,
    last_sample_time: f64,
    window_closed: bool,
}

impl GestureRecord {
    /// Start a gesture; the press position is always stored as the first sample
    pub fn begin(position: Vec2, now: f64) -> Self {
        Self {
            samples: vec![Sample {
                position,
                time: now,
            }],
            start_time: now,
            last_sample_time: now,
            window_closed: false,
        }
    }

    /// Offer a pointer position for this frame
    pub fn try_sample(&mut self, position: Vec2, now: f64, config: &SwipeConfig) -> SampleOutcome {
        if self.window_closed
            || now - self.start_time >= f64::from(config.effective_max_record_seconds())
        {
            self.window_closed = true;
            return SampleOutcome::WindowClosed;
        }
        if now - self.last_sample_time < config.effective_sample_interval() {
            return SampleOutcome::TooSoon;
        }
        self.samples.push(Sample {
            position,
            time: now,
        });
        self.last_sample_time = now;

        // Bounded buffer: oldest samples fall off first
        let cap = config.effective_max_samples();
        if self.samples.len() > cap {
            let excess = self.samples.len() - cap;
            self.samples.drain(..excess);
        }
        SampleOutcome::Appended
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Press time of this gesture
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// True once the recording window has elapsed
    pub fn window_closed(&self) -> bool {
        self.window_closed
    }
}
