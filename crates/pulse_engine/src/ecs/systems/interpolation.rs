//! Interpolation capture system
//!
//! Runs at the start of every fixed tick, before motion integration, copying
//! the current pose of each interpolated entity into its "previous" slot.
//! The renderer then blends previous→current with the loop driver's
//! fraction-to-next-tick.

use crate::ecs::EntityStore;

/// Snapshot the current pose of every interpolated entity
pub fn capture(store: &mut EntityStore) {
    for (entity, interp) in &mut store.interpolations {
        let Some(transform) = store.transforms.get(entity) else {
            continue;
        };
        interp.previous_position = transform.position;
        interp.previous_rotation_degrees = transform.rotation_degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::systems::physics;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    #[test]
    fn test_capture_reflects_start_of_tick_pose() {
        let mut store = EntityStore::new();
        let entity = store.spawn_sprite_interpolated("ship");
        store.transform_mut(entity).unwrap().position = Vec2::new(1.0, 2.0);
        store.linear_velocity_mut(entity).unwrap().value = Vec2::new(32.0, 0.0);

        // One tick: capture first, then integrate
        capture(&mut store);
        physics::integrate(&mut store, 1.0 / 32.0);

        let interp = store.interpolation(entity).unwrap();
        assert_relative_eq!(interp.previous_position.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(interp.previous_position.y, 2.0, epsilon = 1e-5);

        // Current pose moved on past the snapshot
        let transform = store.transform(entity).unwrap();
        assert_relative_eq!(transform.position.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_blend_across_wrap_boundary() {
        let mut store = EntityStore::new();
        let entity = store.spawn_sprite_interpolated("ship");
        store.interpolation_mut(entity).unwrap().previous_rotation_degrees = 350.0;
        store.transform_mut(entity).unwrap().rotation_degrees = 10.0;

        let blended = store.interpolated_rotation(entity, 0.5).unwrap();
        assert_relative_eq!(blended, 0.0, epsilon = 1e-4);
    }
}
