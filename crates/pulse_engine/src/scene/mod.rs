//! # Scene lifecycle
//!
//! A scene bundles everything one screen of a game needs: its own entity
//! store, resource cache, cameras and viewports, and an opaque game-state
//! payload. Scenes register with the [`SceneManager`] under a string id and
//! move through a fixed lifecycle:
//!
//! ```text
//! Unloaded -> Loading -> Paused <-> Active -> Unloading -> Unloaded
//! ```
//!
//! At most one scene is `Active` at a time; the active scene receives the
//! per-frame input/tick/frame/draw dispatch. Misuse of the lifecycle (an
//! unknown id, an illegal transition) is an error; conditions a caller may
//! harmlessly race, like loading an already-loaded scene, log a warning and
//! succeed.

mod context;
mod manager;

pub use context::{SceneContext, MAIN_VIEW};
pub use manager::SceneManager;

use crate::assets::AssetError;
use crate::engine::EngineServices;

/// Lifecycle state of a registered scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// Registered but holding no entities or resources
    Unloaded,
    /// Inside `on_load`
    Loading,
    /// Loaded, not receiving dispatch
    Paused,
    /// Loaded and receiving dispatch
    Active,
    /// Inside `on_unload`
    Unloading,
}

/// Scene lifecycle and lookup errors
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Operation on a scene id that was never registered
    #[error("scene '{0}' is not registered")]
    NotRegistered(String),

    /// Operation not allowed in the scene's current state
    #[error("cannot {operation} scene '{scene}' while {state:?}")]
    InvalidState {
        /// Scene id the operation targeted
        scene: String,
        /// State the scene was in
        state: SceneState,
        /// What was attempted
        operation: &'static str,
    },

    /// Lookup of a camera name that does not exist in the scene
    #[error("scene has no camera named '{0}'")]
    UnknownCamera(String),

    /// Lookup of a viewport name that does not exist in the scene
    #[error("scene has no viewport named '{0}'")]
    UnknownViewport(String),

    /// Resource acquisition failed during scene load
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Callback surface implemented by game scenes
///
/// Every method has a no-op default; scenes override only what they need.
/// All callbacks receive the scene's own [`SceneContext`] plus the engine
/// services (input snapshot, render/asset backends, control requests).
#[allow(unused_variables)]
pub trait Scene {
    /// Called once when the scene loads; build entities and acquire assets
    ///
    /// Returning an error aborts the load and releases anything acquired so
    /// far, leaving the scene `Unloaded`.
    fn on_load(
        &mut self,
        ctx: &mut SceneContext,
        services: &mut EngineServices<'_>,
    ) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called when the scene unloads, before its store and cache are released
    fn on_unload(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>) {}

    /// Called when the scene becomes the active scene
    fn on_activate(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>) {}

    /// Called when the scene stops being the active scene
    fn on_deactivate(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>) {}

    /// Called once per frame with the fresh input snapshot, before any ticks
    fn on_input(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>) {}

    /// Called once per fixed tick, after the built-in simulation systems
    fn on_tick(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>, dt: f32) {}

    /// Called once per rendered frame with the variable frame delta
    fn on_frame(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>, dt: f32) {}

    /// Called during the draw pass, after the built-in sprite pass
    ///
    /// `alpha` is the fraction-to-next-tick used for pose interpolation.
    fn on_draw(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>, alpha: f32) {}
}
