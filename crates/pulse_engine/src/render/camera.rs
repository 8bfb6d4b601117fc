//! # 2D Camera
//!
//! A camera is a world-space position and a zoom factor, optionally confined
//! to rectangular world bounds and optionally trailing a follow target. It
//! knows nothing about screens; pairing it with a [`Viewport`] produces the
//! actual world↔screen transform.
//!
//! [`Viewport`]: crate::render::Viewport

use crate::foundation::math::Vec2;

/// Default lower zoom limit
pub const DEFAULT_MIN_ZOOM: f32 = 1.0;

/// Default upper zoom limit
pub const DEFAULT_MAX_ZOOM: f32 = 2.0;

/// 2D camera with clamped zoom, optional world bounds and target following
#[derive(Debug, Clone)]
pub struct Camera2D {
    position: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    bounds: Option<(Vec2, Vec2)>,
    follow_offset: Vec2,
}

impl Camera2D {
    /// Create a camera at the given world position and zoom
    ///
    /// Zoom is clamped into the default `[1.0, 2.0]` range; use
    /// [`Camera2D::with_zoom_limits`] to configure a different range.
    pub fn new(position: Vec2, zoom: f32) -> Self {
        Self::with_zoom_limits(position, zoom, DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }

    /// Create a camera with explicit zoom limits
    pub fn with_zoom_limits(position: Vec2, zoom: f32, min_zoom: f32, max_zoom: f32) -> Self {
        debug_assert!(min_zoom > 0.0 && min_zoom <= max_zoom);
        Self {
            position,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            bounds: None,
            follow_offset: Vec2::zeros(),
        }
    }

    /// Current world-space position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the world-space position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move the camera by a world-space offset
    pub fn move_position(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom, clamped into the configured limits
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Adjust the zoom by an additive offset
    ///
    /// Small positive/negative values like `0.2` / `-0.2` zoom in/out. Funnels
    /// through [`Camera2D::set_zoom`], so the result respects the limits.
    pub fn zoom_by(&mut self, offset: f32) {
        self.set_zoom(self.zoom + offset);
    }

    /// Adjust the zoom by a multiplicative factor
    ///
    /// Funnels through [`Camera2D::set_zoom`], so the result respects the
    /// limits.
    pub fn zoom_scale(&mut self, factor: f32) {
        self.set_zoom(self.zoom * factor);
    }

    /// The configured `(min, max)` zoom limits
    pub fn zoom_limits(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Confine the camera to a rectangular world region
    pub fn set_bounds(&mut self, min: Vec2, max: Vec2) {
        self.bounds = Some((min, max));
    }

    /// Remove the world bounds
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// The world bounds, if set
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        self.bounds
    }

    /// Offset applied between a follow target and the camera position
    pub fn set_follow_offset(&mut self, offset: Vec2) {
        self.follow_offset = offset;
    }

    /// Move toward `target + follow_offset`
    ///
    /// A `lerp_speed >= 1` snaps directly to the target; smaller values blend
    /// the current position toward it by that fraction. The blend factor is
    /// applied as-is, not scaled by elapsed time — callers invoking this from
    /// a variable-rate frame callback should pre-multiply by their frame
    /// delta if they need frame-rate independent smoothing.
    pub fn follow_target(&mut self, target: Vec2, lerp_speed: f32) {
        let desired = target + self.follow_offset;
        if lerp_speed >= 1.0 {
            self.position = desired;
        } else {
            self.position = self.position.lerp(&desired, lerp_speed);
        }
    }

    /// Clamp the position so the visible rectangle stays inside the bounds
    ///
    /// `half_visible` is the half-extent of the visible world rectangle,
    /// supplied by the viewport from its pixel size and the current zoom.
    /// An axis on which the visible span exceeds the bounds span is left
    /// unclamped. No-op when no bounds are set.
    pub fn clamp_to_bounds(&mut self, half_visible: Vec2) {
        let Some((min, max)) = self.bounds else {
            return;
        };

        let min_x = min.x + half_visible.x;
        let max_x = max.x - half_visible.x;
        let min_y = min.y + half_visible.y;
        let max_y = max.y - half_visible.y;

        if min_x <= max_x {
            self.position.x = self.position.x.clamp(min_x, max_x);
        }
        if min_y <= max_y {
            self.position.y = self.position.y.clamp(min_y, max_y);
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::zeros(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_is_clamped_on_creation() {
        let camera = Camera2D::new(Vec2::zeros(), 10.0);
        assert_relative_eq!(camera.zoom(), DEFAULT_MAX_ZOOM, epsilon = 1e-6);

        let camera = Camera2D::new(Vec2::zeros(), 0.1);
        assert_relative_eq!(camera.zoom(), DEFAULT_MIN_ZOOM, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_setters_share_clamping() {
        let mut camera = Camera2D::with_zoom_limits(Vec2::zeros(), 1.0, 0.5, 4.0);

        camera.zoom_by(10.0);
        assert_relative_eq!(camera.zoom(), 4.0, epsilon = 1e-6);

        camera.zoom_scale(0.01);
        assert_relative_eq!(camera.zoom(), 0.5, epsilon = 1e-6);

        camera.zoom_scale(2.0);
        assert_relative_eq!(camera.zoom(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_follow_target_snaps_at_full_speed() {
        let mut camera = Camera2D::default();
        camera.set_follow_offset(Vec2::new(0.0, 5.0));
        camera.follow_target(Vec2::new(10.0, 0.0), 1.0);

        assert_relative_eq!(camera.position().x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(camera.position().y, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_follow_target_lerps_below_full_speed() {
        let mut camera = Camera2D::default();
        camera.follow_target(Vec2::new(10.0, 0.0), 0.25);
        assert_relative_eq!(camera.position().x, 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_to_bounds_confines_camera() {
        let mut camera = Camera2D::default();
        camera.set_bounds(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        camera.set_position(Vec2::new(-50.0, 150.0));

        camera.clamp_to_bounds(Vec2::new(10.0, 10.0));

        assert_relative_eq!(camera.position().x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(camera.position().y, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_skips_axis_when_view_exceeds_bounds() {
        let mut camera = Camera2D::default();
        camera.set_bounds(Vec2::new(0.0, 0.0), Vec2::new(10.0, 100.0));
        camera.set_position(Vec2::new(-50.0, 150.0));

        // Visible half-extent wider than the 10-unit bounds span on X
        camera.clamp_to_bounds(Vec2::new(20.0, 10.0));

        // X untouched, Y clamped
        assert_relative_eq!(camera.position().x, -50.0, epsilon = 1e-6);
        assert_relative_eq!(camera.position().y, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_without_bounds_is_noop() {
        let mut camera = Camera2D::default();
        camera.set_position(Vec2::new(123.0, -456.0));
        camera.clamp_to_bounds(Vec2::new(10.0, 10.0));
        assert_relative_eq!(camera.position().x, 123.0, epsilon = 1e-6);
    }
}
