//! Entity store backing a single scene
//!
//! Components live in dense secondary maps keyed by generation-checked
//! entity handles, so a destroyed-and-recycled slot can never be reached
//! through a stale handle. Each scene owns exactly one store; there is no
//! global registry.

use slotmap::{SecondaryMap, SlotMap};

use super::components::{
    AngularVelocity, Interpolation, Lifetime, LinearVelocity, Sprite, Text, Transform,
};
use super::entity::Entity;
use crate::foundation::math::{self, Vec2};

/// Generates the get/get-mut/add/remove accessor set for one component map.
macro_rules! component_accessors {
    ($component:ty, $map:ident, $get:ident, $get_mut:ident, $add:ident, $remove:ident) => {
        #[doc = concat!("Get the `", stringify!($component), "` of an entity, if present")]
        pub fn $get(&self, entity: Entity) -> Option<&$component> {
            self.$map.get(entity)
        }

        #[doc = concat!("Get the `", stringify!($component), "` of an entity mutably, if present")]
        pub fn $get_mut(&mut self, entity: Entity) -> Option<&mut $component> {
            self.$map.get_mut(entity)
        }

        #[doc = concat!("Attach a `", stringify!($component), "` to a live entity, replacing any existing one")]
        ///
        /// Ignored (with a warning) if the handle is stale.
        pub fn $add(&mut self, entity: Entity, component: $component) {
            if self.entities.contains_key(entity) {
                self.$map.insert(entity, component);
            } else {
                log::warn!(
                    "Ignoring component attach to invalid entity {:?}",
                    entity
                );
            }
        }

        #[doc = concat!("Detach the `", stringify!($component), "` from an entity, returning it if present")]
        pub fn $remove(&mut self, entity: Entity) -> Option<$component> {
            self.$map.remove(entity)
        }
    };
}

/// Per-scene container for entities and their components
#[derive(Default)]
pub struct EntityStore {
    entities: SlotMap<Entity, ()>,
    pub(crate) transforms: SecondaryMap<Entity, Transform>,
    pub(crate) interpolations: SecondaryMap<Entity, Interpolation>,
    pub(crate) linear_velocities: SecondaryMap<Entity, LinearVelocity>,
    pub(crate) angular_velocities: SecondaryMap<Entity, AngularVelocity>,
    pub(crate) lifetimes: SecondaryMap<Entity, Lifetime>,
    pub(crate) sprites: SecondaryMap<Entity, Sprite>,
    pub(crate) texts: SecondaryMap<Entity, Text>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with no components
    pub fn spawn(&mut self) -> Entity {
        self.entities.insert(())
    }

    /// Destroy an entity and all of its components
    ///
    /// Destroying an already-dead handle is a no-op.
    pub fn despawn(&mut self, entity: Entity) {
        if self.entities.remove(entity).is_none() {
            return;
        }
        self.transforms.remove(entity);
        self.interpolations.remove(entity);
        self.linear_velocities.remove(entity);
        self.angular_velocities.remove(entity);
        self.lifetimes.remove(entity);
        self.sprites.remove(entity);
        self.texts.remove(entity);
    }

    /// Whether the handle refers to a live entity
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Destroy every entity in the store
    pub fn clear(&mut self) {
        self.entities.clear();
        self.transforms.clear();
        self.interpolations.clear();
        self.linear_velocities.clear();
        self.angular_velocities.clear();
        self.lifetimes.clear();
        self.sprites.clear();
        self.texts.clear();
    }

    /// Iterate over all live entity handles
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    component_accessors!(Transform, transforms, transform, transform_mut, add_transform, remove_transform);
    component_accessors!(Interpolation, interpolations, interpolation, interpolation_mut, add_interpolation, remove_interpolation);
    component_accessors!(LinearVelocity, linear_velocities, linear_velocity, linear_velocity_mut, add_linear_velocity, remove_linear_velocity);
    component_accessors!(AngularVelocity, angular_velocities, angular_velocity, angular_velocity_mut, add_angular_velocity, remove_angular_velocity);
    component_accessors!(Lifetime, lifetimes, lifetime, lifetime_mut, add_lifetime, remove_lifetime);
    component_accessors!(Sprite, sprites, sprite, sprite_mut, add_sprite, remove_sprite);
    component_accessors!(Text, texts, text, text_mut, add_text, remove_text);

    /// Spawn an entity with a default transform and a sprite
    pub fn spawn_sprite(&mut self, resource_key: impl Into<String>) -> Entity {
        let entity = self.spawn();
        self.add_transform(entity, Transform::default());
        self.add_sprite(entity, Sprite::new(resource_key));
        entity
    }

    /// Spawn a moving sprite entity set up for interpolated rendering
    ///
    /// Attaches linear and angular velocity components (zeroed, no drag or
    /// cap) and an interpolation component in addition to the transform and
    /// sprite.
    pub fn spawn_sprite_interpolated(&mut self, resource_key: impl Into<String>) -> Entity {
        let entity = self.spawn_sprite(resource_key);
        self.add_linear_velocity(entity, LinearVelocity::default());
        self.add_angular_velocity(entity, AngularVelocity::default());
        self.add_interpolation(entity, Interpolation::default());
        entity
    }

    /// Spawn an entity with a default transform and a text component
    pub fn spawn_text(
        &mut self,
        resource_key: impl Into<String>,
        content: impl Into<String>,
    ) -> Entity {
        let entity = self.spawn();
        self.add_transform(entity, Transform::default());
        self.add_text(entity, Text::new(resource_key, content));
        entity
    }

    /// Position blended between the previous and current tick
    ///
    /// Falls back to the raw current position for entities without an
    /// interpolation component; `None` if the entity has no transform.
    pub fn interpolated_position(&self, entity: Entity, alpha: f32) -> Option<Vec2> {
        let transform = self.transforms.get(entity)?;
        match self.interpolations.get(entity) {
            Some(interp) => {
                Some(interp.previous_position.lerp(&transform.position, alpha))
            }
            None => Some(transform.position),
        }
    }

    /// Rotation in degrees blended between the previous and current tick
    ///
    /// Blends along the shortest arc so a rotation crossing the 0/360 seam
    /// does not swing through the far side. Falls back to the raw rotation
    /// for entities without an interpolation component.
    pub fn interpolated_rotation(&self, entity: Entity, alpha: f32) -> Option<f32> {
        let transform = self.transforms.get(entity)?;
        match self.interpolations.get(entity) {
            Some(interp) => Some(math::lerp_degrees(
                interp.previous_rotation_degrees,
                transform.rotation_degrees,
                alpha,
            )),
            None => Some(transform.rotation_degrees),
        }
    }

    /// Add a linear impulse along the entity's facing direction
    pub fn impulse_forward(&mut self, entity: Entity, magnitude: f32) {
        let Some(direction) = self.transforms.get(entity).map(Transform::forward) else {
            return;
        };
        self.impulse(entity, direction * magnitude);
    }

    /// Add a linear impulse opposite to the entity's facing direction
    pub fn impulse_backward(&mut self, entity: Entity, magnitude: f32) {
        self.impulse_forward(entity, -magnitude);
    }

    /// Add a linear impulse along the entity's right-hand direction
    pub fn impulse_right(&mut self, entity: Entity, magnitude: f32) {
        let Some(direction) = self.transforms.get(entity).map(Transform::right) else {
            return;
        };
        self.impulse(entity, direction * magnitude);
    }

    /// Add a linear impulse opposite to the entity's right-hand direction
    pub fn impulse_left(&mut self, entity: Entity, magnitude: f32) {
        self.impulse_right(entity, -magnitude);
    }

    /// Add a linear impulse along an absolute world-space angle in degrees
    pub fn impulse_toward_degrees(&mut self, entity: Entity, angle_degrees: f32, magnitude: f32) {
        self.impulse(entity, math::vector_from_degrees(angle_degrees) * magnitude);
    }

    /// Add a raw linear impulse to the entity's velocity
    ///
    /// No-op for entities without a linear velocity component.
    pub fn impulse(&mut self, entity: Entity, impulse: Vec2) {
        if let Some(velocity) = self.linear_velocities.get_mut(entity) {
            velocity.add_impulse(impulse);
        }
    }

    /// Add an angular impulse in degrees per second
    ///
    /// No-op for entities without an angular velocity component.
    pub fn impulse_angular(&mut self, entity: Entity, impulse: f32) {
        if let Some(velocity) = self.angular_velocities.get_mut(entity) {
            velocity.add_impulse(impulse);
        }
    }
}
