//! # Engine core
//!
//! The fixed-timestep loop driver. Each outer iteration measures the frame
//! delta, drains platform events into the input snapshot, runs zero or more
//! fixed simulation ticks, then the variable-rate frame callback, then the
//! draw pass with the interpolation fraction. Scene control requests made
//! during callbacks (quit, scene switch) are queued and applied after the
//! frame completes, so lifecycle transitions never happen re-entrantly.

use std::any::Any;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::{AssetBackend, AssetError};
use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec2;
use crate::foundation::time::{FixedTimestep, Timer};
use crate::input::{EventPump, InputEvent, InputState};
use crate::render::RenderBackend;
use crate::scene::{SceneError, SceneManager};

/// Engine configuration, loadable from TOML or RON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window title forwarded to the platform layer
    pub window_title: String,
    /// Initial window width in pixels
    pub window_width: u32,
    /// Initial window height in pixels
    pub window_height: u32,
    /// Fixed simulation ticks per second
    pub tick_rate: f32,
    /// Upper bound on ticks drained in a single frame
    pub max_ticks_per_frame: u32,
    /// Lower zoom limit for scene main cameras
    pub min_zoom: f32,
    /// Upper zoom limit for scene main cameras
    pub max_zoom: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "pulse".to_owned(),
            window_width: 1280,
            window_height: 720,
            tick_rate: 32.0,
            max_ticks_per_frame: 8,
            min_zoom: 1.0,
            max_zoom: 2.0,
        }
    }
}

impl Config for EngineConfig {}

/// Top-level engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scene lifecycle operation failed
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// A resource failed to load
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// The engine configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A deferred control request made from inside a scene callback
pub enum EngineRequest {
    /// Stop the run loop after the current frame
    Quit,
    /// Switch the active scene after the current frame
    SwitchTo {
        /// Target scene id
        id: String,
        /// Game-state payload handed to the scene's load
        state: Option<Box<dyn Any>>,
    },
}

/// Queue of control requests, drained once per frame
#[derive(Default)]
pub struct RequestQueue {
    pending: Vec<EngineRequest>,
}

impl RequestQueue {
    /// Request that the run loop stop after this frame
    pub fn quit(&mut self) {
        self.pending.push(EngineRequest::Quit);
    }

    /// Request a switch to another scene after this frame
    pub fn switch_to(&mut self, id: impl Into<String>) {
        self.pending.push(EngineRequest::SwitchTo {
            id: id.into(),
            state: None,
        });
    }

    /// Request a scene switch carrying a game-state payload
    pub fn switch_to_with(&mut self, id: impl Into<String>, state: Box<dyn Any>) {
        self.pending.push(EngineRequest::SwitchTo {
            id: id.into(),
            state: Some(state),
        });
    }

    fn drain(&mut self) -> Vec<EngineRequest> {
        std::mem::take(&mut self.pending)
    }
}

/// Engine-level collaborators handed to scene callbacks and the manager
///
/// Bundles the external backends with the frame's input snapshot and the
/// control request queue.
pub struct EngineServices<'a> {
    /// Draw submission target
    pub render: &'a mut dyn RenderBackend,
    /// Resource loader
    pub assets: &'a mut dyn AssetBackend,
    /// Input snapshot for the current frame
    pub input: &'a InputState,
    /// Deferred control requests
    pub requests: &'a mut RequestQueue,
}

/// Fixed-timestep engine driving scenes against external backends
pub struct Engine {
    config: EngineConfig,
    scenes: SceneManager,
    input: InputState,
    timestep: FixedTimestep,
    timer: Timer,
    requests: RequestQueue,
    running: bool,
}

impl Engine {
    /// Create an engine from a configuration
    pub fn new(config: EngineConfig) -> Self {
        let timestep = FixedTimestep::new(config.tick_rate, config.max_ticks_per_frame);
        let scenes = SceneManager::new((config.min_zoom, config.max_zoom));
        log::info!(
            "engine created: {} ticks/sec, catch-up bound {} ticks/frame",
            config.tick_rate,
            config.max_ticks_per_frame
        );
        Self {
            config,
            scenes,
            input: InputState::new(),
            timestep,
            timer: Timer::new(),
            requests: RequestQueue::default(),
            running: false,
        }
    }

    /// Create an engine from a `.toml` or `.ron` config file
    ///
    /// Missing file falls back to defaults.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let config = EngineConfig::load_or_default(path)?;
        Ok(Self::new(config))
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The scene registry
    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    /// Current fraction-to-next-tick, in `[0,1)`
    pub fn alpha(&self) -> f32 {
        self.timestep.alpha()
    }

    /// Borrow the scene manager together with a services bundle
    ///
    /// This is how callers reach lifecycle operations that need the
    /// backends, e.g. registering and switching to the initial scene before
    /// [`Engine::run`].
    pub fn split_services<'a>(
        &'a mut self,
        render: &'a mut dyn RenderBackend,
        assets: &'a mut dyn AssetBackend,
    ) -> (&'a mut SceneManager, EngineServices<'a>) {
        (
            &mut self.scenes,
            EngineServices {
                render,
                assets,
                input: &self.input,
                requests: &mut self.requests,
            },
        )
    }

    /// Advance the engine by one frame of wall-clock time
    ///
    /// Order: input dispatch, bounded fixed ticks, frame callback, then
    /// begin/draw/end with the interpolation fraction. Queued control
    /// requests are applied last.
    pub fn step(
        &mut self,
        frame_delta: f32,
        render: &mut dyn RenderBackend,
        assets: &mut dyn AssetBackend,
    ) -> Result<(), EngineError> {
        let tick_interval = self.timestep.tick_interval();
        let ticks = self.timestep.advance(frame_delta);
        let alpha = self.timestep.alpha();

        let (scenes, mut services) = (
            &mut self.scenes,
            EngineServices {
                render,
                assets,
                input: &self.input,
                requests: &mut self.requests,
            },
        );

        scenes.dispatch_input(&mut services);
        for _ in 0..ticks {
            scenes.dispatch_tick(&mut services, tick_interval);
        }
        scenes.dispatch_frame(&mut services, frame_delta);

        services.render.begin_frame();
        scenes.dispatch_draw(&mut services, alpha)?;
        services.render.end_frame();

        self.apply_requests(render, assets)
    }

    /// Run the loop until a quit request
    ///
    /// Measures wall-clock deltas, drains the event pump into the input
    /// snapshot, and calls [`Engine::step`] once per iteration. The frame in
    /// flight always completes before the loop exits.
    pub fn run(
        &mut self,
        pump: &mut dyn EventPump,
        render: &mut dyn RenderBackend,
        assets: &mut dyn AssetBackend,
    ) -> Result<(), EngineError> {
        self.running = true;
        self.timer.reset();
        log::info!("engine loop started");

        while self.running {
            self.timer.update();
            let frame_delta = self.timer.delta_time();

            self.input.begin_frame();
            while let Some(event) = pump.poll() {
                if let InputEvent::Resized(width, height) = event {
                    self.scenes.set_output_size(Vec2::new(width, height));
                }
                self.input.apply(event);
            }
            if self.input.quit_requested() {
                self.requests.quit();
            }

            self.step(frame_delta, render, assets)?;
        }

        log::info!("engine loop stopped");
        Ok(())
    }

    fn apply_requests(
        &mut self,
        render: &mut dyn RenderBackend,
        assets: &mut dyn AssetBackend,
    ) -> Result<(), EngineError> {
        for request in self.requests.drain() {
            match request {
                EngineRequest::Quit => {
                    log::info!("quit requested");
                    self.running = false;
                }
                EngineRequest::SwitchTo { id, state } => {
                    let (scenes, mut services) = self.split_services(render, assets);
                    scenes.switch_to(&mut services, &id, state)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{FontId, TextureId};
    use crate::scene::{Scene, SceneContext, SceneState};

    #[derive(Default)]
    struct NullRender {
        frames: u32,
    }

    impl RenderBackend for NullRender {
        fn begin_frame(&mut self) {}

        fn draw_sprite(&mut self, _: TextureId, _: Vec2, _: f32, _: Vec2) {}

        fn draw_text(&mut self, _: FontId, _: &str, _: Vec2, _: Vec2) {}

        fn end_frame(&mut self) {
            self.frames += 1;
        }

        fn texture_size(&self, _: TextureId) -> Vec2 {
            Vec2::new(32.0, 32.0)
        }

        fn output_size(&self) -> Vec2 {
            Vec2::new(800.0, 600.0)
        }
    }

    #[derive(Default)]
    struct NullAssets;

    impl AssetBackend for NullAssets {
        fn load_texture(&mut self, _: &Path) -> Result<TextureId, AssetError> {
            Ok(TextureId(0))
        }

        fn load_font(&mut self, _: &Path, _: f32) -> Result<FontId, AssetError> {
            Ok(FontId(0))
        }

        fn unload_texture(&mut self, _: TextureId) {}
        fn unload_font(&mut self, _: FontId) {}
    }

    struct TickLog {
        ticks: u32,
        frames: u32,
    }

    struct CountingScene;

    impl Scene for CountingScene {
        fn on_load(
            &mut self,
            ctx: &mut SceneContext,
            _services: &mut EngineServices<'_>,
        ) -> Result<(), SceneError> {
            ctx.set_state(TickLog { ticks: 0, frames: 0 });
            Ok(())
        }

        fn on_tick(&mut self, ctx: &mut SceneContext, _: &mut EngineServices<'_>, _dt: f32) {
            if let Some(counts) = ctx.state_mut::<TickLog>() {
                counts.ticks += 1;
            }
        }

        fn on_frame(&mut self, ctx: &mut SceneContext, _: &mut EngineServices<'_>, _dt: f32) {
            if let Some(counts) = ctx.state_mut::<TickLog>() {
                counts.frames += 1;
            }
        }
    }

    fn engine_with_counting_scene() -> (Engine, NullRender, NullAssets) {
        let mut engine = Engine::new(EngineConfig::default());
        let mut render = NullRender::default();
        let mut assets = NullAssets;

        let (scenes, mut services) = engine.split_services(&mut render, &mut assets);
        scenes
            .register(&mut services, "game", Box::new(CountingScene))
            .unwrap();
        scenes.switch_to(&mut services, "game", None).unwrap();

        (engine, render, assets)
    }

    #[test]
    fn test_three_intervals_of_deltas_yield_three_ticks() {
        let (mut engine, mut render, mut assets) = engine_with_counting_scene();
        let interval = 1.0 / engine.config().tick_rate;

        // Uneven deltas summing to exactly three tick intervals
        for delta in [interval * 0.5, interval * 1.25, interval * 1.25] {
            engine.step(delta, &mut render, &mut assets).unwrap();
        }

        let log = engine
            .scenes()
            .context("game")
            .unwrap()
            .state::<TickLog>()
            .unwrap();
        assert_eq!(log.ticks, 3);
        assert_eq!(log.frames, 3);
        assert_eq!(render.frames, 3);
    }

    #[test]
    fn test_small_deltas_run_zero_ticks_but_still_draw() {
        let (mut engine, mut render, mut assets) = engine_with_counting_scene();
        let interval = 1.0 / engine.config().tick_rate;

        engine.step(interval * 0.25, &mut render, &mut assets).unwrap();

        let log = engine
            .scenes()
            .context("game")
            .unwrap()
            .state::<TickLog>()
            .unwrap();
        assert_eq!(log.ticks, 0);
        assert_eq!(log.frames, 1);
        assert_eq!(render.frames, 1);
        assert!(engine.alpha() >= 0.0 && engine.alpha() < 1.0);
    }

    #[test]
    fn test_catch_up_is_bounded() {
        let (mut engine, mut render, mut assets) = engine_with_counting_scene();
        let interval = 1.0 / engine.config().tick_rate;
        let bound = engine.config().max_ticks_per_frame;

        // A huge stall may not stall the next frame too
        engine
            .step(interval * 100.0, &mut render, &mut assets)
            .unwrap();

        let log = engine
            .scenes()
            .context("game")
            .unwrap()
            .state::<TickLog>()
            .unwrap();
        assert_eq!(log.ticks, bound);
    }

    struct SwitchingScene;

    impl Scene for SwitchingScene {
        fn on_tick(&mut self, _: &mut SceneContext, services: &mut EngineServices<'_>, _dt: f32) {
            services.requests.switch_to("second");
        }
    }

    #[test]
    fn test_scene_switch_request_applies_after_frame() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut render = NullRender::default();
        let mut assets = NullAssets;

        let (scenes, mut services) = engine.split_services(&mut render, &mut assets);
        scenes
            .register(&mut services, "first", Box::new(SwitchingScene))
            .unwrap();
        scenes
            .register(&mut services, "second", Box::new(CountingScene))
            .unwrap();
        scenes.switch_to(&mut services, "first", None).unwrap();

        let interval = 1.0 / engine.config().tick_rate;
        engine.step(interval, &mut render, &mut assets).unwrap();

        assert_eq!(engine.scenes().active_scene_id(), Some("second"));
        assert_eq!(
            engine.scenes().scene_state("first").unwrap(),
            SceneState::Paused
        );
    }

    struct QuitPump {
        sent: bool,
    }

    impl EventPump for QuitPump {
        fn poll(&mut self) -> Option<InputEvent> {
            if self.sent {
                None
            } else {
                self.sent = true;
                Some(InputEvent::Quit)
            }
        }
    }

    #[test]
    fn test_run_stops_on_quit_event_after_finishing_the_frame() {
        let (mut engine, mut render, mut assets) = engine_with_counting_scene();
        let mut pump = QuitPump { sent: false };

        engine.run(&mut pump, &mut render, &mut assets).unwrap();

        // The quitting frame still rendered
        assert!(render.frames >= 1);
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert!((config.tick_rate - 32.0).abs() < f32::EPSILON);
        assert_eq!(config.max_ticks_per_frame, 8);
    }
}
