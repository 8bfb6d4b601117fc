//! Expiry sweep system
//!
//! Decrements every lifetime countdown once per fixed tick and removes (or
//! marks) entities whose time has run out. Destruction is deferred to a
//! second pass so the component iteration is never invalidated mid-sweep.
//! Runs before the motion integrator, so an entity expiring this tick does
//! not get one last integration step.

use crate::ecs::{Entity, EntityStore};

/// Advance all lifetime countdowns by one tick and destroy expired entities
pub fn sweep(store: &mut EntityStore, dt: f32) {
    let mut expired: Vec<Entity> = Vec::new();

    for (entity, lifetime) in &mut store.lifetimes {
        lifetime.remaining_seconds -= dt;
        if lifetime.remaining_seconds <= 0.0 && !lifetime.expired {
            lifetime.expired = true;
            if lifetime.destroy_on_expiry {
                expired.push(entity);
            }
        }
    }

    for entity in expired {
        store.despawn(entity);
    }
}
