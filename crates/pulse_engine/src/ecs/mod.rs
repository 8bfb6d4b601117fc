//! Entity-Component-System implementation
//!
//! A scene-scoped store of generation-checked entities with plain-data
//! components, plus the fixed-tick systems that mutate them.

pub mod components;
pub mod entity;
pub mod store;
pub mod systems;

pub use entity::Entity;
pub use store::EntityStore;
