//! Scene registry, lifecycle transitions and per-frame dispatch

use std::any::Any;
use std::collections::HashMap;

use crate::ecs::systems::{interpolation, lifetime, physics, sprites};
use crate::engine::EngineServices;
use crate::foundation::math::Vec2;
use crate::scene::{Scene, SceneContext, SceneError, SceneState, MAIN_VIEW};

struct SceneRecord {
    scene: Box<dyn Scene>,
    state: SceneState,
    /// Present only while the scene is loaded
    context: Option<SceneContext>,
}

/// Registry of scenes and driver of their lifecycle
///
/// Holds every registered scene with its lifecycle state and, for loaded
/// scenes, the owned [`SceneContext`]. Enforces the transition rules and the
/// single-active invariant, and routes per-frame dispatch to the active
/// scene.
pub struct SceneManager {
    scenes: HashMap<String, SceneRecord>,
    active: Option<String>,
    zoom_limits: (f32, f32),
}

impl SceneManager {
    /// Create an empty manager
    ///
    /// `zoom_limits` seed the main camera of every scene loaded through this
    /// manager.
    pub fn new(zoom_limits: (f32, f32)) -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
            zoom_limits,
        }
    }

    /// Register a scene under an id, in the `Unloaded` state
    ///
    /// Re-registering an id replaces the previous scene; a previously loaded
    /// scene is unloaded first so its resources are released.
    pub fn register(
        &mut self,
        services: &mut EngineServices<'_>,
        id: impl Into<String>,
        scene: Box<dyn Scene>,
    ) -> Result<(), SceneError> {
        let id = id.into();
        if self.scenes.contains_key(&id) {
            log::warn!("re-registering scene '{id}', replacing the previous one");
            self.unload_if_loaded(services, &id)?;
        }
        log::info!("registered scene '{id}'");
        self.scenes.insert(
            id,
            SceneRecord {
                scene,
                state: SceneState::Unloaded,
                context: None,
            },
        );
        Ok(())
    }

    /// Remove a scene from the registry, unloading it first if needed
    pub fn unregister(
        &mut self,
        services: &mut EngineServices<'_>,
        id: &str,
    ) -> Result<(), SceneError> {
        if !self.scenes.contains_key(id) {
            return Err(SceneError::NotRegistered(id.to_owned()));
        }
        self.unload_if_loaded(services, id)?;
        self.scenes.remove(id);
        log::info!("unregistered scene '{id}'");
        Ok(())
    }

    /// Whether an id is registered
    pub fn has_scene(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// State of a registered scene
    pub fn scene_state(&self, id: &str) -> Result<SceneState, SceneError> {
        self.scenes
            .get(id)
            .map(|record| record.state)
            .ok_or_else(|| SceneError::NotRegistered(id.to_owned()))
    }

    /// Id of the active scene, if any
    pub fn active_scene_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Borrow the context of a loaded scene
    pub fn context(&self, id: &str) -> Result<&SceneContext, SceneError> {
        let record = self
            .scenes
            .get(id)
            .ok_or_else(|| SceneError::NotRegistered(id.to_owned()))?;
        record.context.as_ref().ok_or(SceneError::InvalidState {
            scene: id.to_owned(),
            state: record.state,
            operation: "access context of",
        })
    }

    /// Borrow the context of a loaded scene, mutably
    pub fn context_mut(&mut self, id: &str) -> Result<&mut SceneContext, SceneError> {
        let record = self
            .scenes
            .get_mut(id)
            .ok_or_else(|| SceneError::NotRegistered(id.to_owned()))?;
        let state = record.state;
        record.context.as_mut().ok_or(SceneError::InvalidState {
            scene: id.to_owned(),
            state,
            operation: "access context of",
        })
    }

    /// Load a scene, taking it from `Unloaded` to `Paused`
    ///
    /// Allocates the scene's store, cache and main camera/viewport, installs
    /// the game-state payload and runs `on_load`. A load failure releases
    /// everything and leaves the scene `Unloaded`. Loading an already-loaded
    /// scene logs a warning and succeeds without reloading.
    pub fn load(
        &mut self,
        services: &mut EngineServices<'_>,
        id: &str,
        state: Option<Box<dyn Any>>,
    ) -> Result<(), SceneError> {
        let zoom_limits = self.zoom_limits;
        let output_size = services.render.output_size();
        let record = self
            .scenes
            .get_mut(id)
            .ok_or_else(|| SceneError::NotRegistered(id.to_owned()))?;

        match record.state {
            SceneState::Unloaded => {}
            SceneState::Paused | SceneState::Active => {
                log::warn!("scene '{id}' is already loaded, skipping load");
                return Ok(());
            }
            other => {
                return Err(SceneError::InvalidState {
                    scene: id.to_owned(),
                    state: other,
                    operation: "load",
                });
            }
        }

        log::info!("loading scene '{id}'");
        record.state = SceneState::Loading;
        let mut context = SceneContext::new(output_size, zoom_limits);
        context.set_raw_state(state);

        if let Err(error) = record.scene.on_load(&mut context, services) {
            log::warn!("scene '{id}' failed to load: {error}");
            context.resources.release_all(services.assets);
            record.state = SceneState::Unloaded;
            return Err(error);
        }

        record.context = Some(context);
        record.state = SceneState::Paused;
        Ok(())
    }

    /// Activate a loaded scene, deactivating any currently active one
    pub fn activate(
        &mut self,
        services: &mut EngineServices<'_>,
        id: &str,
    ) -> Result<(), SceneError> {
        match self.scene_state(id)? {
            SceneState::Paused => {}
            SceneState::Active => {
                log::warn!("scene '{id}' is already active");
                return Ok(());
            }
            other => {
                return Err(SceneError::InvalidState {
                    scene: id.to_owned(),
                    state: other,
                    operation: "activate",
                });
            }
        }

        self.deactivate_current(services)?;

        let record = self
            .scenes
            .get_mut(id)
            .ok_or_else(|| SceneError::NotRegistered(id.to_owned()))?;
        record.state = SceneState::Active;
        if let Some(context) = record.context.as_mut() {
            record.scene.on_activate(context, services);
        }
        self.active = Some(id.to_owned());
        log::info!("scene '{id}' is now active");
        Ok(())
    }

    /// Pause the active scene
    ///
    /// Logs a warning and succeeds when no scene is active.
    pub fn deactivate_current(
        &mut self,
        services: &mut EngineServices<'_>,
    ) -> Result<(), SceneError> {
        let Some(id) = self.active.take() else {
            log::warn!("deactivate requested with no active scene");
            return Ok(());
        };

        let record = self
            .scenes
            .get_mut(&id)
            .ok_or_else(|| SceneError::NotRegistered(id.clone()))?;
        if let Some(context) = record.context.as_mut() {
            record.scene.on_deactivate(context, services);
        }
        record.state = SceneState::Paused;
        log::info!("scene '{id}' deactivated");
        Ok(())
    }

    /// Unload a scene, releasing its entities, resources and views
    ///
    /// An active scene is deactivated first. Unloading an `Unloaded` scene
    /// logs a warning and succeeds.
    pub fn unload(
        &mut self,
        services: &mut EngineServices<'_>,
        id: &str,
    ) -> Result<(), SceneError> {
        match self.scene_state(id)? {
            SceneState::Unloaded => {
                log::warn!("scene '{id}' is already unloaded");
                return Ok(());
            }
            SceneState::Active => {
                self.deactivate_current(services)?;
            }
            SceneState::Paused => {}
            other => {
                return Err(SceneError::InvalidState {
                    scene: id.to_owned(),
                    state: other,
                    operation: "unload",
                });
            }
        }

        let record = self
            .scenes
            .get_mut(id)
            .ok_or_else(|| SceneError::NotRegistered(id.to_owned()))?;
        record.state = SceneState::Unloading;
        if let Some(mut context) = record.context.take() {
            record.scene.on_unload(&mut context, services);
            context.resources.release_all(services.assets);
            context.entities.clear();
        }
        record.state = SceneState::Unloaded;
        log::info!("scene '{id}' unloaded");
        Ok(())
    }

    /// Load (if needed) and activate a scene in one step
    pub fn switch_to(
        &mut self,
        services: &mut EngineServices<'_>,
        id: &str,
        state: Option<Box<dyn Any>>,
    ) -> Result<(), SceneError> {
        self.load(services, id, state)?;
        self.activate(services, id)
    }

    /// Re-resolve normalized viewports of every loaded scene after a resize
    pub fn set_output_size(&mut self, output_size: Vec2) {
        for record in self.scenes.values_mut() {
            if let Some(context) = record.context.as_mut() {
                context.set_output_size(output_size);
            }
        }
    }

    /// Forward the frame's input snapshot to the active scene
    pub fn dispatch_input(&mut self, services: &mut EngineServices<'_>) {
        if let Some((scene, context)) = self.active_record() {
            scene.on_input(context, services);
        }
    }

    /// Run one fixed tick on the active scene
    ///
    /// Order within the tick: lifetime sweep, interpolation capture, motion
    /// integration, then the scene's own `on_tick`. The capture runs before
    /// integration so the previous pose is the start-of-tick pose.
    pub fn dispatch_tick(&mut self, services: &mut EngineServices<'_>, dt: f32) {
        if let Some((scene, context)) = self.active_record() {
            lifetime::sweep(&mut context.entities, dt);
            interpolation::capture(&mut context.entities);
            physics::integrate(&mut context.entities, dt);
            scene.on_tick(context, services, dt);
        }
    }

    /// Run the variable-rate frame callback on the active scene
    pub fn dispatch_frame(&mut self, services: &mut EngineServices<'_>, dt: f32) {
        if let Some((scene, context)) = self.active_record() {
            scene.on_frame(context, services, dt);
        }
    }

    /// Draw the active scene
    ///
    /// Runs the built-in sprite/text pass through the scene's main
    /// camera/viewport pair, then the scene's `on_draw`.
    pub fn dispatch_draw(
        &mut self,
        services: &mut EngineServices<'_>,
        alpha: f32,
    ) -> Result<(), SceneError> {
        let Some((scene, context)) = self.active_record() else {
            return Ok(());
        };

        let camera = context.camera(MAIN_VIEW)?.clone();
        let viewport = *context.viewport(MAIN_VIEW)?;
        sprites::draw(
            &context.entities,
            &context.resources,
            &camera,
            &viewport,
            services.render,
            alpha,
        );
        scene.on_draw(context, services, alpha);
        Ok(())
    }

    fn unload_if_loaded(
        &mut self,
        services: &mut EngineServices<'_>,
        id: &str,
    ) -> Result<(), SceneError> {
        match self.scene_state(id)? {
            SceneState::Unloaded => Ok(()),
            _ => self.unload(services, id),
        }
    }

    /// Split borrow of the active scene and its context
    fn active_record(&mut self) -> Option<(&mut Box<dyn Scene>, &mut SceneContext)> {
        let id = self.active.as_deref()?;
        let SceneRecord { scene, context, .. } = self.scenes.get_mut(id)?;
        Some((scene, context.as_mut()?))
    }
}
