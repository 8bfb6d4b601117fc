//! Per-scene context passed to every scene callback

use std::any::Any;
use std::collections::HashMap;

use crate::assets::ResourceCache;
use crate::ecs::EntityStore;
use crate::foundation::math::Vec2;
use crate::render::{Camera2D, Viewport};
use crate::scene::SceneError;

/// Name of the camera/viewport pair created for every loaded scene
pub const MAIN_VIEW: &str = "main";

/// Everything a loaded scene owns
///
/// Allocated when the scene loads and dropped when it unloads, so entities,
/// cached resources, cameras and game state never leak across scene
/// lifetimes. Cameras and viewports are name-keyed; a [`MAIN_VIEW`] pair is
/// created on load and is what the built-in draw pass renders through.
pub struct SceneContext {
    /// Entities and components belonging to this scene
    pub entities: EntityStore,
    /// Textures and fonts loaded by this scene
    pub resources: ResourceCache,
    cameras: HashMap<String, Camera2D>,
    viewports: HashMap<String, Viewport>,
    state: Option<Box<dyn Any>>,
}

impl SceneContext {
    /// Create a context with a `MAIN_VIEW` camera and fullscreen viewport
    pub(crate) fn new(output_size: Vec2, zoom_limits: (f32, f32)) -> Self {
        let mut cameras = HashMap::new();
        cameras.insert(
            MAIN_VIEW.to_owned(),
            Camera2D::with_zoom_limits(Vec2::zeros(), 1.0, zoom_limits.0, zoom_limits.1),
        );

        let mut viewports = HashMap::new();
        viewports.insert(
            MAIN_VIEW.to_owned(),
            Viewport::fullscreen(output_size.x, output_size.y),
        );

        Self {
            entities: EntityStore::new(),
            resources: ResourceCache::new(),
            cameras,
            viewports,
            state: None,
        }
    }

    /// Look up a camera by name
    pub fn camera(&self, name: &str) -> Result<&Camera2D, SceneError> {
        self.cameras
            .get(name)
            .ok_or_else(|| SceneError::UnknownCamera(name.to_owned()))
    }

    /// Look up a camera by name, mutably
    pub fn camera_mut(&mut self, name: &str) -> Result<&mut Camera2D, SceneError> {
        self.cameras
            .get_mut(name)
            .ok_or_else(|| SceneError::UnknownCamera(name.to_owned()))
    }

    /// The scene's main camera
    ///
    /// Always present; removing the `MAIN_VIEW` entries is not possible
    /// through this API.
    pub fn main_camera(&self) -> &Camera2D {
        &self.cameras[MAIN_VIEW]
    }

    /// The scene's main camera, mutably
    pub fn main_camera_mut(&mut self) -> &mut Camera2D {
        self.cameras.get_mut(MAIN_VIEW).unwrap_or_else(|| unreachable!())
    }

    /// Add or replace a named camera
    pub fn add_camera(&mut self, name: impl Into<String>, camera: Camera2D) {
        self.cameras.insert(name.into(), camera);
    }

    /// Remove a named camera
    ///
    /// The `MAIN_VIEW` camera cannot be removed.
    pub fn remove_camera(&mut self, name: &str) -> Result<Camera2D, SceneError> {
        if name == MAIN_VIEW {
            return Err(SceneError::UnknownCamera(name.to_owned()));
        }
        self.cameras
            .remove(name)
            .ok_or_else(|| SceneError::UnknownCamera(name.to_owned()))
    }

    /// Look up a viewport by name
    pub fn viewport(&self, name: &str) -> Result<&Viewport, SceneError> {
        self.viewports
            .get(name)
            .ok_or_else(|| SceneError::UnknownViewport(name.to_owned()))
    }

    /// Look up a viewport by name, mutably
    pub fn viewport_mut(&mut self, name: &str) -> Result<&mut Viewport, SceneError> {
        self.viewports
            .get_mut(name)
            .ok_or_else(|| SceneError::UnknownViewport(name.to_owned()))
    }

    /// The scene's main viewport
    pub fn main_viewport(&self) -> &Viewport {
        &self.viewports[MAIN_VIEW]
    }

    /// Add or replace a named viewport
    pub fn add_viewport(&mut self, name: impl Into<String>, viewport: Viewport) {
        self.viewports.insert(name.into(), viewport);
    }

    /// Remove a named viewport
    ///
    /// The `MAIN_VIEW` viewport cannot be removed.
    pub fn remove_viewport(&mut self, name: &str) -> Result<Viewport, SceneError> {
        if name == MAIN_VIEW {
            return Err(SceneError::UnknownViewport(name.to_owned()));
        }
        self.viewports
            .remove(name)
            .ok_or_else(|| SceneError::UnknownViewport(name.to_owned()))
    }

    /// Re-resolve every normalized viewport against a new output size
    pub(crate) fn set_output_size(&mut self, output_size: Vec2) {
        for viewport in self.viewports.values_mut() {
            viewport.set_output_size(output_size);
        }
    }

    /// Borrow the game-state payload downcast to `T`
    ///
    /// `None` when no payload is set or it is not a `T`.
    pub fn state<T: 'static>(&self) -> Option<&T> {
        self.state.as_deref().and_then(<dyn Any>::downcast_ref)
    }

    /// Borrow the game-state payload mutably, downcast to `T`
    pub fn state_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.state.as_deref_mut().and_then(<dyn Any>::downcast_mut)
    }

    /// Replace the game-state payload
    pub fn set_state<T: 'static>(&mut self, state: T) {
        self.state = Some(Box::new(state));
    }

    /// Take the game-state payload out, downcast to `T`
    ///
    /// Leaves the payload in place (and returns `None`) when it is not a `T`.
    pub fn take_state<T: 'static>(&mut self) -> Option<T> {
        if self.state::<T>().is_none() {
            return None;
        }
        self.state
            .take()
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub(crate) fn set_raw_state(&mut self, state: Option<Box<dyn Any>>) {
        self.state = state;
    }
}
