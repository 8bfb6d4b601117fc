//! Rendering module
//!
//! Owns the camera/viewport math that maps world coordinates to screen
//! pixels, and the backend trait behind which all actual pixel submission
//! happens. Nothing in this module touches a GPU or a window; a platform
//! layer implements [`RenderBackend`] and the engine core drives it.

pub mod backend;
pub mod camera;
pub mod viewport;

pub use backend::RenderBackend;
pub use camera::Camera2D;
pub use viewport::Viewport;
