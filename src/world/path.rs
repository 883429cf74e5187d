//! Ground-plane projection of the stroke for visualization
//!
//! Hosts that draw the swipe (a line renderer, a debug overlay) read these
//! instead of reprojecting samples themselves. Both builders anchor the
//! stroke at the body's position on the lane plane.

use glam::{Vec2, Vec3};

use crate::config::SwipeConfig;
use crate::consts;
use crate::gesture::fit::FitResult;
use crate::gesture::record::Sample;
use crate::world::launch::LaunchScene;
use crate::world::mapper;

/// Project every sample onto the lane plane, relative to the first sample
///
/// Returns an empty path when there is nothing drawable: fewer than two
/// samples, no camera, or everything collapsed by deduplication.
pub fn world_path_from_samples(
    samples: &[Sample],
    scene: &LaunchScene,
    config: &SwipeConfig,
) -> Vec<Vec3> {
    if samples.len() < 2 || scene.camera.is_none() {
        return Vec::new();
    }
    let screen_origin = samples[0].position;
    let mut base = scene.body_position;
    base.y = config.lane_y;

    let mut path: Vec<Vec3> = samples
        .iter()
        .map(|s| {
            let delta = s.position - screen_origin;
            let mut w = base + mapper::delta_to_world(delta, scene.camera.as_ref(), config);
            w.y = config.lane_y;
            w
        })
        .collect();

    dedupe_near_points(&mut path, consts::PATH_MIN_POINT_DIST);
    if path.len() < 2 {
        return Vec::new();
    }
    path
}

/// Project the fitted segment's endpoints onto the lane plane
pub fn world_fit_segment(
    samples: &[Sample],
    fit: &FitResult,
    scene: &LaunchScene,
    config: &SwipeConfig,
) -> Option<(Vec3, Vec3)> {
    scene.camera.as_ref()?;
    let screen_origin = samples.first().map_or(fit.segment_start, |s| s.position);
    let mut base = scene.body_position;
    base.y = config.lane_y;

    let mut a = base
        + mapper::delta_to_world(fit.segment_start - screen_origin, scene.camera.as_ref(), config);
    let mut b = base
        + mapper::delta_to_world(fit.segment_end - screen_origin, scene.camera.as_ref(), config);
    a.y = config.lane_y;
    b.y = config.lane_y;
    Some((a, b))
}

/// Drop points closer than `min_dist` to the last kept point
fn dedupe_near_points(pts: &mut Vec<Vec3>, min_dist: f32) {
    if pts.len() < 2 {
        return;
    }
    let min_sq = min_dist * min_dist;
    let mut write = 1;
    let mut last = pts[0];
    for i in 1..pts.len() {
        if (pts[i] - last).length_squared() >= min_sq {
            last = pts[i];
            pts[write] = last;
            write += 1;
        }
    }
    pts.truncate(write);
}
