//! Launch synthesis
//!
//! Folds the fitted direction, stroke length, gesture duration and bend into
//! the final velocity and spin handed to the physics body.

use glam::Vec3;

use crate::config::SwipeConfig;
use crate::consts;
use crate::gesture::fit::FitResult;
use crate::world::mapper::{self, CameraFrame, flatten_to_ground};

/// World references a launch needs, captured by the host at release time
#[derive(Debug, Clone, Copy)]
pub struct LaunchScene {
    /// Camera axes for screen-to-world mapping; absent means no launch
    pub camera: Option<CameraFrame>,
    /// Forward vector of an aim transform, when one exists
    pub face_forward: Option<Vec3>,
    /// The body's own forward, used when no aim transform is set
    pub body_forward: Vec3,
    /// Body position, anchor for the projected stroke path
    pub body_position: Vec3,
}

/// One completed gesture's launch output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    /// Unit ground-plane direction of travel
    pub direction: Vec3,
    /// Launch speed in world units per second
    pub speed: f32,
    /// Angular velocity vector (radians/s)
    pub spin: Vec3,
}

impl LaunchParameters {
    /// Linear velocity to hand to the physics body
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.direction * self.speed
    }
}

/// Physics-side boundary for the launcher
pub trait LaunchBody {
    /// Current linear velocity, read by the already-moving gesture guard
    fn linear_velocity(&self) -> Vec3;
    /// Zero any prior motion, then apply the launch velocity and spin
    fn apply_launch(&mut self, launch: &LaunchParameters);
}

/// Build launch parameters from a completed gesture
///
/// `duration` is the raw press-to-release time; it is clamped into
/// `[MIN_LAUNCH_DURATION, max_record_seconds]` so neither instant taps nor
/// long hesitations distort the speed. Returns `None` when the mapped
/// direction degenerates, in which case nothing should be applied.
pub fn synthesize_launch(
    fit: &FitResult,
    bend: f32,
    duration: f32,
    scene: &LaunchScene,
    config: &SwipeConfig,
) -> Option<LaunchParameters> {
    let mapped = mapper::dir_to_world(fit.axis, scene.camera.as_ref(), config);
    let flat = flatten_to_ground(mapped);
    if flat.length_squared() < consts::DIR_EPS_SQ {
        return None;
    }
    let direction = flat.normalize();

    let duration = duration.clamp(
        consts::MIN_LAUNCH_DURATION,
        config.effective_max_record_seconds(),
    );
    let raw_speed = fit.segment_length() * config.pixels_to_world / duration * config.speed_scale;
    let (lo, hi) = config.effective_speed_range();
    let speed = raw_speed.clamp(lo, hi);

    let bend = if config.use_signed_bend { bend } else { bend.abs() };

    let facing = scene.face_forward.unwrap_or(scene.body_forward);
    let mut spin_axis = flatten_to_ground(facing);
    if spin_axis.length_squared() < consts::DIR_EPS_SQ {
        spin_axis = scene.body_forward;
    }
    let spin_axis = spin_axis.normalize_or_zero();

    Some(LaunchParameters {
        direction,
        speed,
        spin: spin_axis * (bend * config.max_spin_rad),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn vertical_fit(length: f32) -> FitResult {
        FitResult {
            origin: Vec2::new(0.0, length * 0.5),
            axis: Vec2::Y,
            segment_start: Vec2::ZERO,
            segment_end: Vec2::new(0.0, length),
        }
    }

    fn level_scene() -> LaunchScene {
        LaunchScene {
            camera: Some(CameraFrame::new(Vec3::X, Vec3::Z)),
            face_forward: Some(Vec3::Z),
            body_forward: Vec3::Z,
            body_position: Vec3::ZERO,
        }
    }

    #[test]
    fn test_straight_swipe_clamps_to_min_speed() {
        let config = SwipeConfig::default();
        let launch =
            synthesize_launch(&vertical_fit(300.0), 0.0, 0.2, &level_scene(), &config).unwrap();
        // 300 px * 0.0025 / 0.2 s * 0.02 = 0.075, well under the floor
        assert!(launch.direction.abs_diff_eq(Vec3::Z, 1e-5));
        assert_eq!(launch.speed, 4.0);
        assert_eq!(launch.spin, Vec3::ZERO);
        assert!(launch.velocity().abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-4));
    }

    #[test]
    fn test_fast_long_swipe_clamps_to_max_speed() {
        let config = SwipeConfig::default();
        let launch =
            synthesize_launch(&vertical_fit(3000.0), 0.0, 0.005, &level_scene(), &config).unwrap();
        assert_eq!(launch.speed, config.max_speed);
    }

    #[test]
    fn test_duration_clamps_into_record_window() {
        let config = SwipeConfig {
            speed_scale: 2.0,
            ..SwipeConfig::default()
        };
        // Held for five seconds, but speed is computed as if released at the
        // window edge
        let slow = synthesize_launch(&vertical_fit(300.0), 0.0, 5.0, &level_scene(), &config)
            .unwrap();
        let edge = synthesize_launch(&vertical_fit(300.0), 0.0, 0.35, &level_scene(), &config)
            .unwrap();
        assert_eq!(slow.speed, edge.speed);
        assert!((edge.speed - 300.0 * 0.0025 / 0.35 * 2.0).abs() < 1e-4);

        // Instant release is floored, not divided by zero
        let instant =
            synthesize_launch(&vertical_fit(300.0), 0.0, 0.0, &level_scene(), &config).unwrap();
        assert!(instant.speed.is_finite());
    }

    #[test]
    fn test_missing_camera_aborts() {
        let config = SwipeConfig::default();
        let scene = LaunchScene {
            camera: None,
            ..level_scene()
        };
        assert!(synthesize_launch(&vertical_fit(300.0), 0.0, 0.2, &scene, &config).is_none());
    }

    #[test]
    fn test_reversed_axis_flips_direction_not_speed() {
        let config = SwipeConfig::default();
        let mut fit = vertical_fit(300.0);
        let fwd = synthesize_launch(&fit, 0.0, 0.2, &level_scene(), &config).unwrap();
        fit.axis = -fit.axis;
        let back = synthesize_launch(&fit, 0.0, 0.2, &level_scene(), &config).unwrap();
        assert!(fwd.direction.abs_diff_eq(-back.direction, 1e-5));
        assert_eq!(fwd.speed, back.speed);
    }

    #[test]
    fn test_bend_drives_spin_about_facing() {
        let config = SwipeConfig::default();
        let launch =
            synthesize_launch(&vertical_fit(300.0), 0.5, 0.2, &level_scene(), &config).unwrap();
        assert!(launch.spin.abs_diff_eq(Vec3::new(0.0, 0.0, 15.0), 1e-4));

        let launch =
            synthesize_launch(&vertical_fit(300.0), -0.5, 0.2, &level_scene(), &config).unwrap();
        assert!(launch.spin.abs_diff_eq(Vec3::new(0.0, 0.0, -15.0), 1e-4));
    }

    #[test]
    fn test_unsigned_bend_mode_drops_sign() {
        let config = SwipeConfig {
            use_signed_bend: false,
            ..SwipeConfig::default()
        };
        let launch =
            synthesize_launch(&vertical_fit(300.0), -0.5, 0.2, &level_scene(), &config).unwrap();
        assert!(launch.spin.z > 0.0);
    }

    #[test]
    fn test_spin_axis_falls_back_to_body_forward() {
        let config = SwipeConfig::default();
        // Aim transform pointing straight up flattens to nothing
        let scene = LaunchScene {
            face_forward: Some(Vec3::Y),
            body_forward: Vec3::new(0.0, 0.0, -1.0),
            ..level_scene()
        };
        let launch = synthesize_launch(&vertical_fit(300.0), 1.0, 0.2, &scene, &config).unwrap();
        assert!(launch.spin.abs_diff_eq(Vec3::new(0.0, 0.0, -config.max_spin_rad), 1e-4));
    }

    #[test]
    fn test_everything_degenerate_still_launches_without_spin() {
        let config = SwipeConfig::default();
        let scene = LaunchScene {
            face_forward: None,
            body_forward: Vec3::ZERO,
            ..level_scene()
        };
        let launch = synthesize_launch(&vertical_fit(300.0), 1.0, 0.2, &scene, &config).unwrap();
        assert_eq!(launch.spin, Vec3::ZERO);
        assert!(launch.speed >= config.min_speed);
    }
}
