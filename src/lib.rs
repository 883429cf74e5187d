//! Flick Roll - swipe-to-launch gesture synthesis
//!
//! Converts a press-drag-release pointer stroke into a launch velocity and
//! spin for a rolling physics body.
//!
//! Core modules:
//! - `gesture`: stroke capture and geometric estimation (recorder, principal-axis fit, bend)
//! - `world`: screen-to-world mapping, launch synthesis, path projection
//! - `screen`: reference-space normalization across viewport resolutions
//! - `config`: tunable gesture/launch parameters

pub mod config;
pub mod gesture;
pub mod screen;
pub mod world;

pub use config::SwipeConfig;
pub use gesture::{GesturePhase, SwipeController};
pub use screen::Viewport;
pub use world::{CameraFrame, LaunchBody, LaunchParameters, LaunchScene};

/// Numeric stability floors
///
/// Every degenerate gesture resolves to a safe default rather than an error;
/// these are the thresholds below which inputs count as degenerate.
pub mod consts {
    /// Squared length below which a direction vector is treated as zero
    pub const DIR_EPS_SQ: f32 = 1e-6;
    /// Minimum vertical travel (reference px) for the travel-based half split
    pub const TRAVEL_SPLIT_EPS: f32 = 1e-3;
    /// Minimum along-axis spread for the bend regression denominator
    pub const BEND_VARIANCE_EPS: f32 = 1e-4;
    /// Samples required before a directional fit is attempted
    pub const FIT_MIN_SAMPLES: usize = 2;
    /// Samples required in the whole record before a bend estimate is attempted
    pub const BEND_MIN_SAMPLES: usize = 6;
    /// Samples required in the second-half subset for the bend regression
    pub const BEND_MIN_SUBSET: usize = 3;
    /// Gesture duration floor (seconds) for the speed computation
    pub const MIN_LAUNCH_DURATION: f32 = 0.001;
    /// Minimum world distance between consecutive projected path points
    pub const PATH_MIN_POINT_DIST: f32 = 0.01;
}

/// Normalized position of `v` between `a` and `b`, clamped to [0, 1]
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        return 0.0;
    }
    ((v - a) / (b - a)).clamp(0.0, 1.0)
}

/// Cubic Hermite ease of `t` in [0, 1]
#[inline]
pub fn smoothstep01(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
