//! Bend estimation for the stroke's late portion
//!
//! Measures how far the second half of the stroke drifts sideways from the
//! fitted axis, as a signed scalar in [-1, 1]. The drift is a mean-centered
//! regression of lateral offset on along-axis distance, so jitter that does
//! not trend sideways cancels out.

use glam::Vec2;

use crate::config::SwipeConfig;
use crate::consts;
use crate::gesture::fit::{FitResult, StrokeSplit, in_first_half, split_boundary};
use crate::gesture::record::Sample;
use crate::{inverse_lerp, smoothstep01};

/// Signed normalized bend of the stroke's second half
///
/// Zero whenever the record is too short, the second-half subset is too
/// small, or the along-axis spread is too thin to regress against.
pub fn stroke_bend(samples: &[Sample], fit: &FitResult, config: &SwipeConfig) -> f32 {
    if samples.len() < consts::BEND_MIN_SAMPLES {
        return 0.0;
    }
    let dir = fit.axis.normalize_or_zero();
    if dir.length_squared() < consts::DIR_EPS_SQ {
        return 0.0;
    }
    let perp = dir.perp();

    let pts: Vec<Vec2> = match split_boundary(samples) {
        StrokeSplit::Travel { mid_y, going_up } => samples
            .iter()
            .map(|s| s.position)
            .filter(|p| !in_first_half(p.y, mid_y, going_up))
            .collect(),
        StrokeSplit::Count => samples[samples.len() / 2..]
            .iter()
            .map(|s| s.position)
            .collect(),
    };
    if pts.len() < consts::BEND_MIN_SUBSET {
        return 0.0;
    }

    // Local frame: u along the axis, v lateral, both measured from the fit origin
    let inv_n = 1.0 / pts.len() as f32;
    let mut mean_u = 0.0;
    let mut mean_v = 0.0;
    for p in &pts {
        let d = *p - fit.origin;
        mean_u += d.dot(dir);
        mean_v += d.dot(perp);
    }
    mean_u *= inv_n;
    mean_v *= inv_n;

    let mut suu = 0.0;
    let mut suv = 0.0;
    for p in &pts {
        let d = *p - fit.origin;
        let u = d.dot(dir) - mean_u;
        let v = d.dot(perp) - mean_v;
        suu += u * u;
        suv += u * v;
    }
    if suu < consts::BEND_VARIANCE_EPS {
        return 0.0;
    }

    let slope = suv / suu;
    let bend_rad = slope.atan();
    let norm = (bend_rad / config.effective_bend_max_rad()).clamp(-1.0, 1.0);

    shape(
        norm,
        config.effective_bend_deadzone(),
        config.effective_bend_exponent(),
    )
}

/// Deadzone, smoothstep ease and response exponent, sign preserved
fn shape(norm: f32, deadzone: f32, exponent: f32) -> f32 {
    let a = norm.abs();
    if a <= deadzone {
        return 0.0;
    }
    let x = inverse_lerp(deadzone, 1.0, a);
    let x = smoothstep01(x);
    let x = x.powf(exponent);
    norm.signum() * x
}
