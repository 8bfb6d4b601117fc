//! # Viewport
//!
//! A rectangular region of the output surface, in pixels. Together with a
//! [`Camera2D`] it defines the world↔screen mapping used by the sprite
//! draw pass: the camera's world position lands on the viewport center and
//! world units are scaled by the camera zoom.
//!
//! A viewport is either absolute (fixed pixel rectangle) or normalized
//! (fractions of the output size, re-resolved on resize through
//! [`Viewport::set_output_size`]).

use crate::foundation::math::{Mat3, Vec2};
use crate::render::Camera2D;

/// Pixel-space rectangle that world coordinates are projected into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Vec2,
    size: Vec2,
    /// Fractional (origin, size) kept for normalized viewports
    normalized: Option<(Vec2, Vec2)>,
}

impl Viewport {
    /// Create an absolute viewport from its top-left corner and pixel size
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size,
            normalized: None,
        }
    }

    /// Create a viewport as fractions of the output surface
    ///
    /// `frac_origin` and `frac_size` are in `[0,1]`; the pixel rectangle is
    /// resolved against `output_size` now and re-resolved on every
    /// [`Viewport::set_output_size`].
    pub fn normalized(frac_origin: Vec2, frac_size: Vec2, output_size: Vec2) -> Self {
        Self {
            origin: frac_origin.component_mul(&output_size),
            size: frac_size.component_mul(&output_size),
            normalized: Some((frac_origin, frac_size)),
        }
    }

    /// A normalized viewport covering the whole output surface
    pub fn fullscreen(width: f32, height: f32) -> Self {
        Self::normalized(Vec2::zeros(), Vec2::new(1.0, 1.0), Vec2::new(width, height))
    }

    /// Re-resolve the pixel rectangle against a new output size
    ///
    /// Absolute viewports keep their fixed rectangle.
    pub fn set_output_size(&mut self, output_size: Vec2) {
        if let Some((frac_origin, frac_size)) = self.normalized {
            self.origin = frac_origin.component_mul(&output_size);
            self.size = frac_size.component_mul(&output_size);
        }
    }

    /// Top-left corner in surface pixels
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Width and height in surface pixels
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Pixel-space center of the viewport
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Map a world position to surface pixels
    ///
    /// The camera position projects onto the viewport center; one world unit
    /// spans `camera.zoom()` pixels.
    pub fn world_to_screen(&self, camera: &Camera2D, world: Vec2) -> Vec2 {
        (world - camera.position()) * camera.zoom() + self.center()
    }

    /// Map a surface pixel position back to world coordinates
    ///
    /// Exact inverse of [`Viewport::world_to_screen`] up to floating point
    /// rounding.
    pub fn screen_to_world(&self, camera: &Camera2D, screen: Vec2) -> Vec2 {
        (screen - self.center()) / camera.zoom() + camera.position()
    }

    /// Homogeneous world-to-screen transform as a 3x3 matrix
    ///
    /// Applying this to a column vector `[x, y, 1]` matches
    /// [`Viewport::world_to_screen`].
    pub fn view_matrix(&self, camera: &Camera2D) -> Mat3 {
        let zoom = camera.zoom();
        let translation = self.center() - camera.position() * zoom;
        Mat3::new(
            zoom, 0.0, translation.x, //
            0.0, zoom, translation.y, //
            0.0, 0.0, 1.0,
        )
    }

    /// World-space rectangle currently visible, as `(min, max)` corners
    pub fn visible_area_world(&self, camera: &Camera2D) -> (Vec2, Vec2) {
        let half = self.half_visible_world(camera);
        (camera.position() - half, camera.position() + half)
    }

    /// Half-extent of the visible world rectangle at the camera's zoom
    ///
    /// This is the value [`Camera2D::clamp_to_bounds`] expects.
    pub fn half_visible_world(&self, camera: &Camera2D) -> Vec2 {
        self.size * 0.5 / camera.zoom()
    }

    /// Clamp the camera so this viewport stays inside the camera's bounds
    pub fn clamp_camera_to_bounds(&self, camera: &mut Camera2D) {
        let half_visible = self.half_visible_world(camera);
        camera.clamp_to_bounds(half_visible);
    }

    /// Whether a world-space rectangle overlaps the visible region
    ///
    /// `half_extent` is the rectangle's half width/height in world units.
    /// Used by the draw pass to cull off-screen sprites.
    pub fn is_in_view(&self, camera: &Camera2D, world: Vec2, half_extent: Vec2) -> bool {
        let half_visible = self.half_visible_world(camera);
        let offset = world - camera.position();

        offset.x + half_extent.x >= -half_visible.x
            && offset.x - half_extent.x <= half_visible.x
            && offset.y + half_extent.y >= -half_visible.y
            && offset.y - half_extent.y <= half_visible.y
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fullscreen(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera_at(x: f32, y: f32, zoom: f32) -> Camera2D {
        Camera2D::with_zoom_limits(Vec2::new(x, y), zoom, 0.25, 8.0)
    }

    #[test]
    fn test_camera_position_maps_to_viewport_center() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let camera = camera_at(42.0, -17.0, 1.5);

        let screen = viewport.world_to_screen(&camera, camera.position());
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-4);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zoom_scales_world_offsets() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let camera = camera_at(0.0, 0.0, 2.0);

        let screen = viewport.world_to_screen(&camera, Vec2::new(10.0, 5.0));
        assert_relative_eq!(screen.x, 420.0, epsilon = 1e-4);
        assert_relative_eq!(screen.y, 310.0, epsilon = 1e-4);
    }

    #[test]
    fn test_offset_viewport_shifts_center() {
        let viewport = Viewport::new(Vec2::new(100.0, 50.0), Vec2::new(200.0, 200.0));
        let camera = camera_at(0.0, 0.0, 1.0);

        let screen = viewport.world_to_screen(&camera, Vec2::zeros());
        assert_relative_eq!(screen.x, 200.0, epsilon = 1e-4);
        assert_relative_eq!(screen.y, 150.0, epsilon = 1e-4);
    }

    #[test]
    fn test_screen_to_world_inverts_world_to_screen() {
        let viewport = Viewport::new(Vec2::new(32.0, 64.0), Vec2::new(640.0, 360.0));
        let camera = camera_at(-3.5, 12.25, 1.75);
        let world = Vec2::new(17.0, -93.5);

        let round_trip = viewport.screen_to_world(&camera, viewport.world_to_screen(&camera, world));
        assert_relative_eq!(round_trip.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(round_trip.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_view_matrix_matches_world_to_screen() {
        let viewport = Viewport::new(Vec2::new(10.0, 20.0), Vec2::new(400.0, 300.0));
        let camera = camera_at(5.0, -2.0, 2.0);
        let world = Vec2::new(-8.0, 3.0);

        let matrix = viewport.view_matrix(&camera);
        let projected = matrix * nalgebra::Vector3::new(world.x, world.y, 1.0);
        let direct = viewport.world_to_screen(&camera, world);

        assert_relative_eq!(projected.x, direct.x, epsilon = 1e-4);
        assert_relative_eq!(projected.y, direct.y, epsilon = 1e-4);
    }

    #[test]
    fn test_normalized_viewport_tracks_output_size() {
        let mut viewport =
            Viewport::normalized(Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0), Vec2::new(800.0, 600.0));
        assert_relative_eq!(viewport.origin().x, 400.0, epsilon = 1e-4);
        assert_relative_eq!(viewport.size().y, 600.0, epsilon = 1e-4);

        viewport.set_output_size(Vec2::new(1600.0, 900.0));
        assert_relative_eq!(viewport.origin().x, 800.0, epsilon = 1e-4);
        assert_relative_eq!(viewport.size().x, 800.0, epsilon = 1e-4);
        assert_relative_eq!(viewport.size().y, 900.0, epsilon = 1e-4);
    }

    #[test]
    fn test_absolute_viewport_ignores_output_resize() {
        let mut viewport = Viewport::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0));
        viewport.set_output_size(Vec2::new(1600.0, 900.0));
        assert_relative_eq!(viewport.size().x, 100.0, epsilon = 1e-4);
    }

    #[test]
    fn test_visible_area_reflects_zoom() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let camera = camera_at(100.0, 100.0, 2.0);

        let (min, max) = viewport.visible_area_world(&camera);
        assert_relative_eq!(min.x, 100.0 - 200.0, epsilon = 1e-4);
        assert_relative_eq!(max.y, 100.0 + 150.0, epsilon = 1e-4);
    }

    #[test]
    fn test_culling_accepts_visible_and_rejects_distant() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let camera = camera_at(0.0, 0.0, 1.0);
        let half = Vec2::new(16.0, 16.0);

        assert!(viewport.is_in_view(&camera, Vec2::zeros(), half));
        assert!(!viewport.is_in_view(&camera, Vec2::new(5000.0, 0.0), half));
    }

    #[test]
    fn test_culling_keeps_partially_visible_edge_sprite() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let camera = camera_at(0.0, 0.0, 1.0);

        // Center just past the right edge but extent overlaps it
        let world = Vec2::new(410.0, 0.0);
        assert!(viewport.is_in_view(&camera, world, Vec2::new(16.0, 16.0)));
        assert!(!viewport.is_in_view(&camera, world, Vec2::new(4.0, 4.0)));
    }

    #[test]
    fn test_zoom_shrinks_visible_region() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let wide = camera_at(0.0, 0.0, 1.0);
        let tight = camera_at(0.0, 0.0, 4.0);
        let world = Vec2::new(300.0, 0.0);
        let half = Vec2::new(1.0, 1.0);

        assert!(viewport.is_in_view(&wide, world, half));
        assert!(!viewport.is_in_view(&tight, world, half));
    }

    #[test]
    fn test_clamp_camera_through_viewport() {
        let viewport = Viewport::fullscreen(800.0, 600.0);
        let mut camera = camera_at(0.0, 0.0, 2.0);
        camera.set_bounds(Vec2::new(-1000.0, -1000.0), Vec2::new(1000.0, 1000.0));
        camera.set_position(Vec2::new(-5000.0, 0.0));

        viewport.clamp_camera_to_bounds(&mut camera);

        // Half-visible at zoom 2 is 200 on x
        assert_relative_eq!(camera.position().x, -800.0, epsilon = 1e-3);
    }
}
