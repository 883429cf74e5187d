//! Ground-plane coordinate mapping
//!
//! Screen space is a 2D y-up reference plane; world space is 3D with y as
//! the vertical axis and the lane lying in the XZ plane. Screen x maps along
//! the camera's flattened right axis, screen y along its flattened forward.

use glam::{Vec2, Vec3};

use crate::config::SwipeConfig;
use crate::consts;

/// World-space camera axes, as supplied by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub right: Vec3,
    pub forward: Vec3,
}

impl CameraFrame {
    pub fn new(right: Vec3, forward: Vec3) -> Self {
        Self { right, forward }
    }

    /// Camera axes flattened onto the ground plane and renormalized
    ///
    /// A degenerate flattened axis (camera looking straight down, say)
    /// falls back to the world axis.
    pub fn ground_basis(&self) -> (Vec3, Vec3) {
        let mut right = flatten_to_ground(self.right);
        if right.length_squared() < consts::DIR_EPS_SQ {
            right = Vec3::X;
        }
        let mut forward = flatten_to_ground(self.forward);
        if forward.length_squared() < consts::DIR_EPS_SQ {
            forward = Vec3::Z;
        }
        (right.normalize(), forward.normalize())
    }
}

/// Zero out the vertical component
#[inline]
pub(crate) fn flatten_to_ground(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Map a reference-space pixel delta onto the ground plane
///
/// Returns zero when no camera frame is resolvable, which downstream
/// treats as a configuration fault and aborts the launch.
pub fn delta_to_world(delta: Vec2, camera: Option<&CameraFrame>, config: &SwipeConfig) -> Vec3 {
    let Some(frame) = camera else {
        return Vec3::ZERO;
    };
    let (right, forward) = frame.ground_basis();
    let sign = if config.invert_forward { -1.0 } else { 1.0 };
    let dx = delta.x * config.pixels_to_world;
    let dz = delta.y * config.pixels_to_world * sign;
    right * dx + forward * dz
}

/// Map a reference-space direction to a unit ground-plane direction
///
/// The input is normalized first so the result ignores stroke length, and
/// the output is renormalized because the flattened basis need not be
/// orthogonal. Zero in, zero out.
pub fn dir_to_world(dir: Vec2, camera: Option<&CameraFrame>, config: &SwipeConfig) -> Vec3 {
    if dir.length_squared() < consts::DIR_EPS_SQ {
        return Vec3::ZERO;
    }
    delta_to_world(dir.normalize_or_zero(), camera, config).normalize_or_zero()
}
