//! # Asset management
//!
//! Name-keyed cache over opaque texture and font handles. Loading and
//! decoding live behind [`AssetBackend`]; the cache only remembers which
//! handle a key resolved to, so repeated lookups by sprite components are
//! plain `HashMap` hits.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque handle to a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Asset loading errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// The backing file could not be read
    #[error("asset io error for {path}: {source}")]
    Io {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },
    /// The backend rejected the file contents
    #[error("failed to decode asset {path}: {reason}")]
    Decode {
        /// Path that failed to decode
        path: PathBuf,
        /// Backend-reported reason
        reason: String,
    },
    /// Lookup of a key that was never loaded
    #[error("no asset loaded under key '{0}'")]
    UnknownKey(String),
}

/// Loader the cache delegates file decoding to
pub trait AssetBackend {
    /// Load and decode a texture from disk
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, AssetError>;

    /// Load a font at a given point size
    fn load_font(&mut self, path: &Path, point_size: f32) -> Result<FontId, AssetError>;

    /// Release a texture previously returned by [`AssetBackend::load_texture`]
    fn unload_texture(&mut self, texture: TextureId);

    /// Release a font previously returned by [`AssetBackend::load_font`]
    fn unload_font(&mut self, font: FontId);
}

/// Name-keyed cache of loaded textures and fonts
#[derive(Debug, Default)]
pub struct ResourceCache {
    textures: HashMap<String, TextureId>,
    fonts: HashMap<String, FontId>,
}

impl ResourceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture and register it under `key`
    ///
    /// Reloading an existing key replaces the entry and releases the old
    /// handle.
    pub fn load_texture(
        &mut self,
        backend: &mut dyn AssetBackend,
        key: &str,
        path: &Path,
    ) -> Result<TextureId, AssetError> {
        let texture = backend.load_texture(path)?;
        if let Some(old) = self.textures.insert(key.to_owned(), texture) {
            log::debug!("replacing texture '{key}'");
            backend.unload_texture(old);
        }
        Ok(texture)
    }

    /// Load a font and register it under `key`
    pub fn load_font(
        &mut self,
        backend: &mut dyn AssetBackend,
        key: &str,
        path: &Path,
        point_size: f32,
    ) -> Result<FontId, AssetError> {
        let font = backend.load_font(path, point_size)?;
        if let Some(old) = self.fonts.insert(key.to_owned(), font) {
            log::debug!("replacing font '{key}'");
            backend.unload_font(old);
        }
        Ok(font)
    }

    /// Look up a texture, loading it from `path` if the key is unknown
    pub fn texture_or_load(
        &mut self,
        backend: &mut dyn AssetBackend,
        key: &str,
        path: &Path,
    ) -> Result<TextureId, AssetError> {
        match self.texture(key) {
            Some(texture) => Ok(texture),
            None => self.load_texture(backend, key, path),
        }
    }

    /// Look up a font, loading it from `path` if the key is unknown
    pub fn font_or_load(
        &mut self,
        backend: &mut dyn AssetBackend,
        key: &str,
        path: &Path,
        point_size: f32,
    ) -> Result<FontId, AssetError> {
        match self.font(key) {
            Some(font) => Ok(font),
            None => self.load_font(backend, key, path, point_size),
        }
    }

    /// Look up a texture by key
    pub fn texture(&self, key: &str) -> Option<TextureId> {
        self.textures.get(key).copied()
    }

    /// Look up a font by key
    pub fn font(&self, key: &str) -> Option<FontId> {
        self.fonts.get(key).copied()
    }

    /// Drop a texture entry and release its handle
    pub fn unload_texture(&mut self, backend: &mut dyn AssetBackend, key: &str) {
        match self.textures.remove(key) {
            Some(texture) => backend.unload_texture(texture),
            None => log::warn!("unload of unknown texture '{key}'"),
        }
    }

    /// Drop a font entry and release its handle
    pub fn unload_font(&mut self, backend: &mut dyn AssetBackend, key: &str) {
        match self.fonts.remove(key) {
            Some(font) => backend.unload_font(font),
            None => log::warn!("unload of unknown font '{key}'"),
        }
    }

    /// Release everything in the cache
    ///
    /// Called on scene unload so a scene's assets never outlive it.
    pub fn release_all(&mut self, backend: &mut dyn AssetBackend) {
        for (_, texture) in self.textures.drain() {
            backend.unload_texture(texture);
        }
        for (_, font) in self.fonts.drain() {
            backend.unload_font(font);
        }
    }

    /// Number of cached textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of cached fonts
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}
