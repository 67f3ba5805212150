//! Texture registry
//!
//! Textures are decoded once at startup and looked up by name at draw time.
//! Handles are small ids; the backend uploads the pixel data however it likes.

use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;

use crate::error::AssetError;

/// Opaque id of a registered texture (ids start at 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// A decoded texture
#[derive(Debug, Clone)]
pub struct Texture {
    pub handle: TextureHandle,
    pub name: String,
    pub image: RgbaImage,
}

/// Name to texture lookup, owned by the app for its whole lifetime
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: Vec<Texture>,
    by_name: HashMap<String, TextureHandle>,
    last_id: u32,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register already decoded pixels under `name`
    pub fn insert(&mut self, name: &str, image: RgbaImage) -> Result<TextureHandle, AssetError> {
        if self.by_name.contains_key(name) {
            return Err(AssetError::Duplicate(name.to_string()));
        }

        self.last_id += 1;
        let handle = TextureHandle(self.last_id);
        self.by_name.insert(name.to_string(), handle);
        self.textures.push(Texture {
            handle,
            name: name.to_string(),
            image,
        });
        Ok(handle)
    }

    /// Decode an image file and register it under `name`
    pub fn load(&mut self, name: &str, path: impl AsRef<Path>) -> Result<TextureHandle, AssetError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| AssetError::Image {
                name: name.to_string(),
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let handle = self.insert(name, image)?;
        log::info!("Loaded texture '{}' ({}) as {:?}", name, path.display(), handle);
        Ok(handle)
    }

    pub fn handle(&self, name: &str) -> Option<TextureHandle> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.iter().find(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_from_one() {
        let mut textures = TextureRegistry::new();
        let a = textures.insert("crate", RgbaImage::new(2, 2)).unwrap();
        let b = textures.insert("floor", RgbaImage::new(1, 1)).unwrap();
        assert_eq!(a, TextureHandle(1));
        assert_eq!(b, TextureHandle(2));
        assert_eq!(textures.handle("floor"), Some(b));
        assert_eq!(textures.get(a).map(|t| t.name.as_str()), Some("crate"));
        assert_eq!(textures.len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut textures = TextureRegistry::new();
        textures.insert("crate", RgbaImage::new(1, 1)).unwrap();
        let err = textures.insert("crate", RgbaImage::new(1, 1)).unwrap_err();
        assert!(matches!(err, AssetError::Duplicate(name) if name == "crate"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crate.png");
        RgbaImage::from_pixel(4, 4, image::Rgba([120, 80, 40, 255]))
            .save(&path)
            .unwrap();

        let mut textures = TextureRegistry::new();
        let handle = textures.load("crate", &path).unwrap();
        let texture = textures.get(handle).unwrap();
        assert_eq!(texture.image.dimensions(), (4, 4));
    }

    #[test]
    fn test_load_missing_file() {
        let mut textures = TextureRegistry::new();
        let err = textures.load("crate", "missing/crate.png").unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
        assert!(textures.is_empty());
    }
}
