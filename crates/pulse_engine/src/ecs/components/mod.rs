//! ECS Components module
//!
//! Pure data components; all mutation logic lives in the systems and the
//! entity store helpers.

pub mod interpolation;
pub mod lifetime;
pub mod sprite;
pub mod transform;
pub mod velocity;

pub use interpolation::Interpolation;
pub use lifetime::Lifetime;
pub use sprite::{Sprite, Text, TextSpace};
pub use transform::Transform;
pub use velocity::{AngularVelocity, LinearVelocity};
