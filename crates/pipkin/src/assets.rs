//! Sprite loading and texture management.
//!
//! PNG sprites are loaded through an `assets_manager` cache and uploaded
//! once to egui textures. A missing sprite falls back to a flat placeholder
//! so a broken asset directory never takes the game down.

use std::borrow::Cow;
use std::collections::HashMap;

use anyhow::Result;
use assets_manager::{asset::FileAsset, AssetCache, BoxedError};

/// Custom asset type for PNG images (returns raw RGBA bytes)
#[derive(Debug, Clone)]
pub struct SpriteAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FileAsset for SpriteAsset {
    const EXTENSION: &'static str = "png";

    fn from_bytes(bytes: Cow<'_, [u8]>) -> std::result::Result<Self, BoxedError> {
        let img = image::load_from_memory(&bytes)
            .map_err(|e| format!("Failed to decode image: {e}"))?
            .to_rgba8();
        Ok(Self {
            width: img.width(),
            height: img.height(),
            data: img.into_raw(),
        })
    }
}

impl SpriteAsset {
    /// A flat-color stand-in used when a sprite fails to load.
    pub fn placeholder(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        SpriteAsset {
            width,
            height,
            data,
        }
    }
}

/// Asset manager for the game
pub struct Assets {
    cache: AssetCache,
}

impl Assets {
    /// Create a new asset manager loading from the sprite directory
    pub fn new() -> Result<Self> {
        // Find the assets directory - try multiple paths for different run contexts
        let paths = ["crates/pipkin/assets", "assets", "../pipkin/assets"];

        for path in paths {
            if std::path::Path::new(path).exists() {
                log::info!("Loading assets from: {}", path);
                return Ok(Self {
                    cache: AssetCache::new(path)
                        .map_err(|e| anyhow::anyhow!("Failed to create asset cache: {e}"))?,
                });
            }
        }

        anyhow::bail!("Could not find assets directory. Tried: {:?}", paths)
    }

    /// Load a sprite by cache id, e.g. `sprites.pet_mint`.
    pub fn load_sprite(&self, id: &str) -> Result<SpriteAsset> {
        let handle = self
            .cache
            .load::<SpriteAsset>(id)
            .map_err(|e| anyhow::anyhow!("Failed to load sprite {id}: {e}"))?;
        Ok(handle.read().clone())
    }
}

/// Uploaded egui textures, keyed by sprite id.
pub struct TextureStore {
    textures: HashMap<String, egui::TextureHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            textures: HashMap::new(),
        }
    }

    /// Fetch a texture, uploading it on first use. Missing sprites become
    /// gray placeholders (art quality is not this crate's problem).
    pub fn get(
        &mut self,
        egui_ctx: &egui::Context,
        assets: &Assets,
        id: &str,
    ) -> egui::TextureHandle {
        if let Some(handle) = self.textures.get(id) {
            return handle.clone();
        }

        let sprite = assets.load_sprite(id).unwrap_or_else(|e| {
            log::warn!("{e}; using placeholder");
            SpriteAsset::placeholder(32, 32, [160, 160, 160, 255])
        });

        let image = egui::ColorImage::from_rgba_unmultiplied(
            [sprite.width as usize, sprite.height as usize],
            &sprite.data,
        );
        let handle = egui_ctx.load_texture(id, image, egui::TextureOptions::NEAREST);
        self.textures.insert(id.to_string(), handle.clone());
        handle
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        let sprite = SpriteAsset::placeholder(4, 2, [1, 2, 3, 4]);
        assert_eq!(sprite.width, 4);
        assert_eq!(sprite.height, 2);
        assert_eq!(sprite.data.len(), 4 * 2 * 4);
        assert_eq!(&sprite.data[0..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_sprite_from_png_bytes() {
        // A 1x1 PNG produced by the image crate itself.
        let mut png = Vec::new();
        let buffer = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        image::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode png");

        let sprite = SpriteAsset::from_bytes(Cow::Owned(png)).expect("decode");
        assert_eq!((sprite.width, sprite.height), (1, 1));
        assert_eq!(&sprite.data, &[255, 0, 0, 255]);
    }
}
