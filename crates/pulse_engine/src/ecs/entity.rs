//! Entity handle type

slotmap::new_key_type! {
    /// Opaque, generation-checked entity handle
    ///
    /// Handles are reusable: after an entity is destroyed, its slot may be
    /// handed out again with a bumped generation. A stale handle held across
    /// a destroy therefore fails validity checks instead of aliasing the new
    /// occupant. Always check with [`EntityStore::contains`] (or use the
    /// `Option`-returning component accessors) before acting on a handle that
    /// may have outlived its entity.
    ///
    /// [`EntityStore::contains`]: crate::ecs::EntityStore::contains
    pub struct Entity;
}
