//! # Pulse Engine
//!
//! A fixed-timestep 2D game engine core. The engine owns simulation timing,
//! entity storage, scene lifecycles and the camera math; windowing, draw
//! submission, asset decoding and input polling live behind collaborator
//! traits implemented by a platform layer.
//!
//! ## Features
//!
//! - **Fixed-timestep loop**: simulation runs at a constant tick rate with
//!   bounded catch-up, rendering interpolates between ticks
//! - **Generation-checked entities**: slotmap-backed handles that can never
//!   reach a recycled slot
//! - **Scene lifecycle**: registered scenes move through load/activate/
//!   pause/unload with their own entities, resources and cameras
//! - **Camera/viewport transforms**: zoom, bounds clamping, target
//!   following, world↔screen mapping and culling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulse_engine::prelude::*;
//!
//! struct MyScene;
//!
//! impl Scene for MyScene {
//!     fn on_load(
//!         &mut self,
//!         ctx: &mut SceneContext,
//!         _services: &mut EngineServices<'_>,
//!     ) -> Result<(), SceneError> {
//!         let player = ctx.entities.spawn_sprite_interpolated("player");
//!         ctx.entities.impulse_forward(player, 10.0);
//!         Ok(())
//!     }
//!
//!     fn on_tick(&mut self, ctx: &mut SceneContext, services: &mut EngineServices<'_>, _dt: f32) {
//!         if services.input.was_pressed(Key::Escape) {
//!             services.requests.quit();
//!         }
//!     }
//! }
//!
//! # struct Pump;
//! # impl EventPump for Pump {
//! #     fn poll(&mut self) -> Option<InputEvent> { Some(InputEvent::Quit) }
//! # }
//! # struct Render;
//! # impl RenderBackend for Render {
//! #     fn begin_frame(&mut self) {}
//! #     fn draw_sprite(&mut self, _: TextureId, _: Vec2, _: f32, _: Vec2) {}
//! #     fn draw_text(&mut self, _: FontId, _: &str, _: Vec2, _: Vec2) {}
//! #     fn end_frame(&mut self) {}
//! #     fn texture_size(&self, _: TextureId) -> Vec2 { Vec2::new(1.0, 1.0) }
//! #     fn output_size(&self) -> Vec2 { Vec2::new(800.0, 600.0) }
//! # }
//! # struct Assets;
//! # impl AssetBackend for Assets {
//! #     fn load_texture(&mut self, _: &std::path::Path) -> Result<TextureId, AssetError> { Ok(TextureId(0)) }
//! #     fn load_font(&mut self, _: &std::path::Path, _: f32) -> Result<FontId, AssetError> { Ok(FontId(0)) }
//! #     fn unload_texture(&mut self, _: TextureId) {}
//! #     fn unload_font(&mut self, _: FontId) {}
//! # }
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default());
//!     // Platform layer supplies pump, render and assets implementations.
//!     let (mut pump, mut render, mut assets) = (Pump, Render, Assets);
//!     let (scenes, mut services) = engine.split_services(&mut render, &mut assets);
//!     scenes.register(&mut services, "game", Box::new(MyScene))?;
//!     scenes.switch_to(&mut services, "game", None)?;
//!     engine.run(&mut pump, &mut render, &mut assets)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

mod engine;

pub use engine::{Engine, EngineConfig, EngineError, EngineRequest, EngineServices, RequestQueue};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetBackend, AssetError, FontId, ResourceCache, TextureId},
        config::{Config, ConfigError},
        ecs::{
            components::{
                AngularVelocity, Interpolation, Lifetime, LinearVelocity, Sprite, Text, TextSpace,
                Transform,
            },
            Entity, EntityStore,
        },
        foundation::{
            math::Vec2,
            time::{FixedTimestep, Timer},
        },
        input::{EventPump, InputEvent, InputState, Key},
        render::{Camera2D, RenderBackend, Viewport},
        scene::{Scene, SceneContext, SceneError, SceneManager, SceneState, MAIN_VIEW},
        Engine, EngineConfig, EngineError, EngineServices,
    };
}
