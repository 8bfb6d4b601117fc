//! Sprite and text components for renderable entities

/// A drawable sprite referencing a texture in the scene's resource cache
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Cache key of the texture to draw
    pub resource_key: String,

    /// Draw order; lower layers are drawn first
    pub layer: i32,

    /// Whether the sprite is currently drawn
    pub visible: bool,
}

impl Sprite {
    /// Create a visible sprite on layer 0
    pub fn new(resource_key: impl Into<String>) -> Self {
        Self {
            resource_key: resource_key.into(),
            layer: 0,
            visible: true,
        }
    }
}

/// Coordinate space a text entity is positioned in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpace {
    /// Positioned in world coordinates, transformed by the camera
    World,
    /// Positioned directly in screen pixels (HUD text)
    Screen,
}

/// A drawable text string referencing a font in the scene's resource cache
#[derive(Debug, Clone)]
pub struct Text {
    /// Cache key of the font to render with
    pub resource_key: String,

    /// The string to draw
    pub content: String,

    /// Whether the position is in world or screen space
    pub space: TextSpace,

    /// Draw order; lower layers are drawn first
    pub layer: i32,

    /// Whether the text is currently drawn
    pub visible: bool,
}

impl Text {
    /// Create visible world-space text on layer 0
    pub fn new(resource_key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            resource_key: resource_key.into(),
            content: content.into(),
            space: TextSpace::World,
            layer: 0,
            visible: true,
        }
    }

    /// Create visible screen-space (HUD) text on layer 0
    pub fn screen(resource_key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            space: TextSpace::Screen,
            ..Self::new(resource_key, content)
        }
    }
}
