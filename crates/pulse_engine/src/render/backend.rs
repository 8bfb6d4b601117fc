//! Render backend abstraction
//!
//! The engine core computes what to draw and where; an implementation of
//! [`RenderBackend`] owns the actual surface and turns those submissions
//! into pixels. Tests use a recording backend, real applications wrap a
//! windowing/graphics library.

use crate::assets::{FontId, TextureId};
use crate::foundation::math::Vec2;

/// Surface the engine submits draw calls to
pub trait RenderBackend {
    /// Begin a frame, clearing the surface
    fn begin_frame(&mut self);

    /// Draw a textured sprite
    ///
    /// `position` is the sprite center in surface pixels, `rotation_degrees`
    /// the clockwise rotation about that center, and `scale` the world-space
    /// scale already multiplied by the camera zoom.
    fn draw_sprite(&mut self, texture: TextureId, position: Vec2, rotation_degrees: f32, scale: Vec2);

    /// Draw a text string at a pixel position
    fn draw_text(&mut self, font: FontId, text: &str, position: Vec2, scale: Vec2);

    /// Present the completed frame
    fn end_frame(&mut self);

    /// Pixel size of the sprite's texture, used for culling extents
    fn texture_size(&self, texture: TextureId) -> Vec2;

    /// Current size of the output surface in pixels
    fn output_size(&self) -> Vec2;
}
