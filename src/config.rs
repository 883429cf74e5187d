//! Gesture and launch tuning parameters
//!
//! All thresholds that shape how a swipe becomes a launch live here, so a
//! game can tune feel without touching the estimators.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Swipe capture and launch synthesis parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeConfig {
    // === Sampling ===
    /// Recording window after press start (seconds)
    pub max_record_seconds: f32,
    /// Minimum time between accepted samples (seconds)
    pub sample_interval: f64,
    /// Hard cap on stored samples per gesture
    pub max_samples: usize,

    // === Reference space ===
    /// Reference viewport width (px) that gesture positions are scaled into
    pub ref_width: f32,
    /// Reference viewport height (px) that gesture positions are scaled into
    pub ref_height: f32,

    // === Screen-to-world mapping ===
    /// World units per reference pixel
    pub pixels_to_world: f32,
    /// Flip the camera-forward component of mapped vectors
    pub invert_forward: bool,
    /// Height of the ground plane the projected path is drawn on
    pub lane_y: f32,

    // === Launch speed ===
    /// Multiplier on reference-px-per-second swipe velocity
    pub speed_scale: f32,
    /// Lower speed clamp (world units/s)
    pub min_speed: f32,
    /// Upper speed clamp (world units/s)
    pub max_speed: f32,

    // === Bend / spin ===
    /// Angular velocity magnitude at full bend (radians/s)
    pub max_spin_rad: f32,
    /// Bend angle (degrees) that maps to a normalized bend of +/-1
    pub bend_max_angle_deg: f32,
    /// Normalized bend magnitude below which the gesture counts as straight
    pub bend_deadzone: f32,
    /// Response exponent applied after the deadzone remap
    pub bend_exponent: f32,
    /// Keep the bend sign; when false the spin always curls the same way
    pub use_signed_bend: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            // Sampling - 120 Hz capture over a short flick window
            max_record_seconds: 0.35,
            sample_interval: 1.0 / 120.0,
            max_samples: 128,

            // Reference space
            ref_width: 666.0,
            ref_height: 441.0,

            // Mapping
            pixels_to_world: 0.0025,
            invert_forward: false,
            lane_y: 0.0,

            // Launch speed
            speed_scale: 0.02,
            min_speed: 4.0,
            max_speed: 14.0,

            // Bend / spin
            max_spin_rad: 30.0,
            bend_max_angle_deg: 35.0,
            bend_deadzone: 0.10,
            bend_exponent: 2.2,
            use_signed_bend: true,
        }
    }
}

impl SwipeConfig {
    /// Recording window with the duration floor applied
    pub fn effective_max_record_seconds(&self) -> f32 {
        self.max_record_seconds.max(consts::MIN_LAUNCH_DURATION)
    }

    /// Sample interval, never negative
    pub fn effective_sample_interval(&self) -> f64 {
        self.sample_interval.max(0.0)
    }

    /// Sample cap, never below the two points a fit needs
    pub fn effective_max_samples(&self) -> usize {
        self.max_samples.max(consts::FIT_MIN_SAMPLES)
    }

    /// Speed clamp range with `max` raised to at least `min`
    pub fn effective_speed_range(&self) -> (f32, f32) {
        (self.min_speed, self.max_speed.max(self.min_speed))
    }

    /// Full-scale bend angle in radians, floored away from zero
    pub fn effective_bend_max_rad(&self) -> f32 {
        self.bend_max_angle_deg.to_radians().max(0.001)
    }

    /// Deadzone constrained to [0, 1]
    pub fn effective_bend_deadzone(&self) -> f32 {
        self.bend_deadzone.clamp(0.0, 1.0)
    }

    /// Response exponent, floored so powf stays well behaved
    pub fn effective_bend_exponent(&self) -> f32 {
        self.bend_exponent.max(0.01)
    }

    /// Parse a config from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Bad swipe config JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Serialize for storage alongside game settings
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }
}
