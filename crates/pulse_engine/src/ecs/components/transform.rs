//! 2D transform component

use crate::foundation::math::{self, Vec2};

/// Spatial state of an entity: position, rotation and scale in world space
///
/// Rotation is stored in degrees and normalized to `[0, 360)` by the motion
/// integrator; code that writes rotation directly should go through
/// [`Transform::set_rotation_degrees`] to keep that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// World space position
    pub position: Vec2,

    /// Rotation in degrees, normalized to `[0, 360)`
    pub rotation_degrees: f32,

    /// Per-axis scale factors
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation_degrees: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform at the given position with no rotation and unit scale
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the rotation, normalizing into `[0, 360)`
    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation_degrees = math::wrap_degrees(degrees);
    }

    /// Unit vector the entity is facing
    ///
    /// Forward is +Y at zero rotation, matching sprite art that points "up".
    pub fn forward(&self) -> Vec2 {
        math::vector_from_degrees(self.rotation_degrees + 90.0)
    }

    /// Unit vector to the entity's right
    ///
    /// Right is +X at zero rotation.
    pub fn right(&self) -> Vec2 {
        math::vector_from_degrees(self.rotation_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_transform() {
        let transform = Transform::default();
        assert_eq!(transform.position, Vec2::zeros());
        assert_eq!(transform.rotation_degrees, 0.0);
        assert_eq!(transform.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_set_rotation_normalizes() {
        let mut transform = Transform::default();
        transform.set_rotation_degrees(450.0);
        assert_relative_eq!(transform.rotation_degrees, 90.0, epsilon = 1e-5);
        transform.set_rotation_degrees(-45.0);
        assert_relative_eq!(transform.rotation_degrees, 315.0, epsilon = 1e-5);
    }

    #[test]
    fn test_facing_vectors() {
        let transform = Transform::default();
        let forward = transform.forward();
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(forward.y, 1.0, epsilon = 1e-5);

        let right = transform.right();
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-5);
    }
}
