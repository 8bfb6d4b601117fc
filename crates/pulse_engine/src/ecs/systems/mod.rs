//! ECS Systems module
//!
//! Free functions over the entity store, invoked by the scene manager in a
//! fixed order each tick: lifetime sweep, interpolation capture, motion
//! integration. Sprite drawing runs during the draw pass with the loop
//! driver's interpolation alpha.

pub mod interpolation;
pub mod lifetime;
pub mod physics;
pub mod sprites;
