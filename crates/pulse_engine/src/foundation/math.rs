//! Math utilities and types
//!
//! Provides the 2D math types used across the engine plus the angle helpers
//! needed for rotation integration and interpolated rendering. Rotations are
//! stored in degrees and kept normalized to `[0, 360)`.

pub use nalgebra::{Matrix3, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 matrix type, used for 2D homogeneous transforms
pub type Mat3 = Matrix3<f32>;

/// Linear interpolation between two scalars
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalize an angle in degrees into `[0, 360)`
///
/// Handles arbitrarily large positive or negative inputs, so it is safe to
/// call after integrating any angular velocity over any time step.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Interpolate between two angles in degrees along the shortest arc
///
/// The naive `lerp(350, 10, 0.5)` yields 180; this takes the short way
/// around the 0/360 seam and yields 0. The result is normalized back into
/// `[0, 360)`.
pub fn lerp_degrees(from: f32, to: f32, t: f32) -> f32 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    wrap_degrees(from + delta * t)
}

/// Unit vector pointing along the given angle in degrees
///
/// Zero degrees points along +X; angles increase counter-clockwise.
pub fn vector_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
