//! Reference-space normalization
//!
//! Gesture math runs in a fixed reference resolution so tuning survives
//! window resizes and device DPI differences. Raw pointer positions are
//! y-up, in physical pixels of the current viewport.

use glam::Vec2;

use crate::config::SwipeConfig;

/// Current viewport size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis scale from this viewport into the reference resolution
    ///
    /// Dimensions are floored at one pixel so a zero-size window never
    /// produces infinities downstream.
    #[inline]
    pub fn reference_scale(&self, config: &SwipeConfig) -> Vec2 {
        Vec2::new(
            config.ref_width / self.width.max(1.0),
            config.ref_height / self.height.max(1.0),
        )
    }

    /// Map a raw pointer position into reference space
    #[inline]
    pub fn to_reference(&self, raw: Vec2, config: &SwipeConfig) -> Vec2 {
        raw * self.reference_scale(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_identity_at_native_size() {
        let config = SwipeConfig::default();
        let vp = Viewport::new(config.ref_width, config.ref_height);
        let p = Vec2::new(123.0, 45.0);
        assert!(vp.to_reference(p, &config).abs_diff_eq(p, 1e-5));
    }

    #[test]
    fn test_reference_space_is_resolution_invariant() {
        let config = SwipeConfig::default();
        let small = Viewport::new(800.0, 600.0);
        let large = Viewport::new(2400.0, 1800.0);
        // Same normalized screen position on both displays
        let on_small = Vec2::new(200.0, 150.0);
        let on_large = on_small * 3.0;
        let a = small.to_reference(on_small, &config);
        let b = large.to_reference(on_large, &config);
        assert!(a.abs_diff_eq(b, 1e-3));
    }

    #[test]
    fn test_zero_size_viewport_stays_finite() {
        let config = SwipeConfig::default();
        let vp = Viewport::new(0.0, 0.0);
        let p = vp.to_reference(Vec2::new(50.0, 50.0), &config);
        assert!(p.is_finite());
    }
}
