//! Principal-axis fit of the stroke's early portion
//!
//! The launch direction comes from the first half of the stroke, split by
//! vertical travel rather than sample count so irregular sampling rates do
//! not skew the estimate. The late portion feeds the bend estimator instead.

use glam::Vec2;

use crate::consts;
use crate::gesture::record::Sample;

/// Fitted dominant line of the stroke's first half
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// Mean of the fitted subset
    pub origin: Vec2,
    /// Unit direction, oriented along the stroke's travel
    pub axis: Vec2,
    /// Projection of the subset's rear extreme onto the axis
    pub segment_start: Vec2,
    /// Projection of the subset's front extreme onto the axis
    pub segment_end: Vec2,
}

impl FitResult {
    /// Length of the fitted segment in reference pixels
    #[inline]
    pub fn segment_length(&self) -> f32 {
        (self.segment_end - self.segment_start).length()
    }
}

/// How the stroke divides into an early and a late portion
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StrokeSplit {
    /// Split at the vertical midpoint of the stroke's travel
    Travel { mid_y: f32, going_up: bool },
    /// Near-horizontal stroke, fall back to splitting by sample count
    Count,
}

/// Pick the first/second-half boundary for a record
pub(crate) fn split_boundary(samples: &[Sample]) -> StrokeSplit {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return StrokeSplit::Count;
    };
    let dy = last.position.y - first.position.y;
    if dy.abs() < consts::TRAVEL_SPLIT_EPS {
        return StrokeSplit::Count;
    }
    StrokeSplit::Travel {
        mid_y: first.position.y + dy * 0.5,
        going_up: dy > 0.0,
    }
}

/// Fit the dominant direction of a stroke's first half
///
/// Needs at least two samples. Degenerate subsets (all points coincident)
/// still produce a unit axis, with a zero-length segment.
pub fn fit_stroke(samples: &[Sample]) -> Option<FitResult> {
    if samples.len() < consts::FIT_MIN_SAMPLES {
        return None;
    }

    match split_boundary(samples) {
        StrokeSplit::Travel { mid_y, going_up } => {
            let mut pts: Vec<Vec2> = samples
                .iter()
                .map(|s| s.position)
                .filter(|p| in_first_half(p.y, mid_y, going_up))
                .collect();
            if pts.len() < 2 {
                pts.clear();
                pts.push(samples[0].position);
                pts.push(samples[1].position);
            }
            // Orient along the overall travel of the whole stroke
            let overall = samples[samples.len() - 1].position - samples[0].position;
            Some(principal_axis(&pts, overall))
        }
        StrokeSplit::Count => {
            let n = (samples.len() / 2).max(2);
            let pts: Vec<Vec2> = samples[..n].iter().map(|s| s.position).collect();
            let overall = pts[n - 1] - pts[0];
            Some(principal_axis(&pts, overall))
        }
    }
}

#[inline]
pub(crate) fn in_first_half(y: f32, mid_y: f32, going_up: bool) -> bool {
    if going_up { y <= mid_y } else { y >= mid_y }
}

/// Closed-form 2D PCA over `pts`, oriented so the axis agrees with `travel`
fn principal_axis(pts: &[Vec2], travel: Vec2) -> FitResult {
    let inv_n = 1.0 / pts.len() as f32;
    let mean = pts.iter().copied().sum::<Vec2>() * inv_n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for p in pts {
        let d = *p - mean;
        sxx += d.x * d.x;
        syy += d.y * d.y;
        sxy += d.x * d.y;
    }

    let angle = 0.5 * (2.0 * sxy).atan2(sxx - syy);
    let mut axis = Vec2::new(angle.cos(), angle.sin());
    if axis.dot(travel) < 0.0 {
        axis = -axis;
    }

    let mut min_t = f32::INFINITY;
    let mut max_t = f32::NEG_INFINITY;
    for p in pts {
        let t = (*p - mean).dot(axis);
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }

    FitResult {
        origin: mean,
        axis,
        segment_start: mean + axis * min_t,
        segment_end: mean + axis * max_t,
    }
}
