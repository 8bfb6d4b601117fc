//! Sprite and text draw pass
//!
//! Runs once per rendered frame, not per tick. Entities carrying an
//! interpolation component are drawn at their blended pose using the loop
//! driver's fraction-to-next-tick; everything else is drawn at its current
//! pose. Draw order is back-to-front by layer, off-screen sprites are
//! culled against the viewport.

use crate::assets::ResourceCache;
use crate::ecs::EntityStore;
use crate::render::{Camera2D, RenderBackend, Viewport};

/// Draw every visible sprite and text entity
pub fn draw(
    store: &EntityStore,
    resources: &ResourceCache,
    camera: &Camera2D,
    viewport: &Viewport,
    backend: &mut dyn RenderBackend,
    alpha: f32,
) {
    draw_sprites(store, resources, camera, viewport, backend, alpha);
    draw_texts(store, resources, camera, viewport, backend, alpha);
}

fn draw_sprites(
    store: &EntityStore,
    resources: &ResourceCache,
    camera: &Camera2D,
    viewport: &Viewport,
    backend: &mut dyn RenderBackend,
    alpha: f32,
) {
    let mut ordered: Vec<_> = store
        .sprites
        .iter()
        .filter(|(_, sprite)| sprite.visible)
        .collect();
    ordered.sort_by_key(|(_, sprite)| sprite.layer);

    for (entity, sprite) in ordered {
        let Some(transform) = store.transforms.get(entity) else {
            continue;
        };
        let Some(texture) = resources.texture(&sprite.resource_key) else {
            log::warn!("sprite references unloaded texture '{}'", sprite.resource_key);
            continue;
        };

        let position = store
            .interpolated_position(entity, alpha)
            .unwrap_or(transform.position);
        let rotation = store
            .interpolated_rotation(entity, alpha)
            .unwrap_or(transform.rotation_degrees);

        let half_extent = backend
            .texture_size(texture)
            .component_mul(&transform.scale)
            * 0.5;
        if !viewport.is_in_view(camera, position, half_extent) {
            continue;
        }

        backend.draw_sprite(
            texture,
            viewport.world_to_screen(camera, position),
            rotation,
            transform.scale * camera.zoom(),
        );
    }
}

fn draw_texts(
    store: &EntityStore,
    resources: &ResourceCache,
    camera: &Camera2D,
    viewport: &Viewport,
    backend: &mut dyn RenderBackend,
    alpha: f32,
) {
    use crate::ecs::components::TextSpace;

    let mut ordered: Vec<_> = store
        .texts
        .iter()
        .filter(|(_, text)| text.visible)
        .collect();
    ordered.sort_by_key(|(_, text)| text.layer);

    for (entity, text) in ordered {
        let Some(transform) = store.transforms.get(entity) else {
            continue;
        };
        let Some(font) = resources.font(&text.resource_key) else {
            log::warn!("text references unloaded font '{}'", text.resource_key);
            continue;
        };

        let (position, scale) = match text.space {
            TextSpace::World => {
                let world = store
                    .interpolated_position(entity, alpha)
                    .unwrap_or(transform.position);
                (
                    viewport.world_to_screen(camera, world),
                    transform.scale * camera.zoom(),
                )
            }
            // Screen text ignores the camera, positions are viewport pixels
            TextSpace::Screen => (viewport.origin() + transform.position, transform.scale),
        };

        backend.draw_text(font, &text.content, position, scale);
    }
}
