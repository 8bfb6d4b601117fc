//! Motion integration system
//!
//! Advances every entity that has both a transform and a velocity component.
//! Drag and the speed cap are applied to the stored velocity before the
//! position update, so after a tick both the velocity component and the
//! transform reflect the decayed, clamped value.
//!
//! Must run exactly once per fixed tick with the fixed tick interval as
//! `dt`: drag is a linear per-step decay, so feeding variable frame deltas
//! here would make damping frame-rate dependent.

use crate::ecs::EntityStore;
use crate::foundation::math;

/// Integrate linear and angular motion for one fixed tick
pub fn integrate(store: &mut EntityStore, dt: f32) {
    // Linear motion
    for (entity, velocity) in &mut store.linear_velocities {
        let Some(transform) = store.transforms.get_mut(entity) else {
            continue;
        };

        if velocity.drag > 0.0 {
            velocity.value *= (1.0 - velocity.drag * dt).max(0.0);
        }

        if velocity.max_speed > 0.0 {
            let speed = velocity.value.magnitude();
            if speed > velocity.max_speed {
                velocity.value *= velocity.max_speed / speed;
            }
        }

        transform.position += velocity.value * dt;
    }

    // Angular motion
    for (entity, velocity) in &mut store.angular_velocities {
        let Some(transform) = store.transforms.get_mut(entity) else {
            continue;
        };

        if velocity.drag > 0.0 {
            velocity.value *= (1.0 - velocity.drag * dt).max(0.0);
        }

        if velocity.max_speed > 0.0 && velocity.value.abs() > velocity.max_speed {
            velocity.value = velocity.max_speed.copysign(velocity.value);
        }

        transform.rotation_degrees =
            math::wrap_degrees(transform.rotation_degrees + velocity.value * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{AngularVelocity, LinearVelocity, Transform};
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 32.0;

    fn spawn_mover(store: &mut EntityStore, velocity: LinearVelocity) -> crate::ecs::Entity {
        let entity = store.spawn();
        store.add_transform(entity, Transform::default());
        store.add_linear_velocity(entity, velocity);
        entity
    }

    #[test]
    fn test_position_advances_by_velocity() {
        let mut store = EntityStore::new();
        let entity = spawn_mover(&mut store, LinearVelocity::new(Vec2::new(4.0, -2.0)));

        integrate(&mut store, DT);

        let transform = store.transform(entity).unwrap();
        assert_relative_eq!(transform.position.x, 4.0 * DT, epsilon = 1e-6);
        assert_relative_eq!(transform.position.y, -2.0 * DT, epsilon = 1e-6);
    }

    #[test]
    fn test_drag_decays_before_integration() {
        let mut store = EntityStore::new();
        let mut velocity = LinearVelocity::new(Vec2::new(10.0, 0.0));
        velocity.drag = 2.0;
        let entity = spawn_mover(&mut store, velocity);

        integrate(&mut store, DT);

        let expected_speed = 10.0 * (1.0 - 2.0 * DT);
        let velocity = store.linear_velocity(entity).unwrap();
        assert_relative_eq!(velocity.value.x, expected_speed, epsilon = 1e-5);

        // Position must reflect the decayed velocity, not the original
        let transform = store.transform(entity).unwrap();
        assert_relative_eq!(transform.position.x, expected_speed * DT, epsilon = 1e-5);
    }

    #[test]
    fn test_heavy_drag_stops_at_zero() {
        let mut store = EntityStore::new();
        let mut velocity = LinearVelocity::new(Vec2::new(10.0, 0.0));
        velocity.drag = 100.0;
        let entity = spawn_mover(&mut store, velocity);

        integrate(&mut store, 1.0);

        let velocity = store.linear_velocity(entity).unwrap();
        assert_relative_eq!(velocity.value.magnitude(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_max_speed_clamps_stored_velocity() {
        let mut store = EntityStore::new();
        let mut velocity = LinearVelocity::new(Vec2::new(30.0, 40.0));
        velocity.max_speed = 5.0;
        let entity = spawn_mover(&mut store, velocity);

        integrate(&mut store, DT);

        let velocity = store.linear_velocity(entity).unwrap();
        assert_relative_eq!(velocity.value.magnitude(), 5.0, epsilon = 1e-4);
        // Direction preserved
        assert_relative_eq!(velocity.value.x / velocity.value.y, 0.75, epsilon = 1e-4);

        let transform = store.transform(entity).unwrap();
        assert_relative_eq!(transform.position.magnitude(), 5.0 * DT, epsilon = 1e-5);
    }

    #[test]
    fn test_disabled_cap_does_not_clamp() {
        let mut store = EntityStore::new();
        let entity = spawn_mover(&mut store, LinearVelocity::new(Vec2::new(1000.0, 0.0)));

        integrate(&mut store, DT);

        let velocity = store.linear_velocity(entity).unwrap();
        assert_relative_eq!(velocity.value.x, 1000.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rotation_stays_normalized() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.add_transform(entity, Transform::default());
        store.add_angular_velocity(entity, AngularVelocity::new(100_000.0));

        integrate(&mut store, 1.0);

        let rotation = store.transform(entity).unwrap().rotation_degrees;
        assert!((0.0..360.0).contains(&rotation), "rotation = {rotation}");
    }

    #[test]
    fn test_negative_angular_velocity_wraps_up() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.add_transform(entity, Transform::default());
        store.add_angular_velocity(entity, AngularVelocity::new(-90.0));

        integrate(&mut store, 1.0);

        let rotation = store.transform(entity).unwrap().rotation_degrees;
        assert_relative_eq!(rotation, 270.0, epsilon = 1e-4);
    }

    #[test]
    fn test_angular_cap_preserves_sign() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.add_transform(entity, Transform::default());
        let mut velocity = AngularVelocity::new(-720.0);
        velocity.max_speed = 90.0;
        store.add_angular_velocity(entity, velocity);

        integrate(&mut store, DT);

        let velocity = store.angular_velocity(entity).unwrap();
        assert_relative_eq!(velocity.value, -90.0, epsilon = 1e-5);
    }

    #[test]
    fn test_entities_without_transform_are_untouched() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.add_linear_velocity(entity, LinearVelocity::new(Vec2::new(1.0, 0.0)));

        // Must not panic or create a transform
        integrate(&mut store, DT);
        assert!(store.transform(entity).is_none());
    }
}
