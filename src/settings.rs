//! Runtime settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::{Path, PathBuf};

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DT, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::SettingsError;

/// A texture to preload at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Arena settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Map image to decode at startup
    pub map_path: PathBuf,
    /// Time step passed to the update each frame
    pub dt: f32,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,

    // === Driver ===
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
    /// Key that quits the driver loop
    pub quit_key: char,

    // === Assets ===
    pub textures: Vec<TextureEntry>,
    /// Abort startup when a texture fails to load
    pub missing_textures_fatal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("res/map1.png"),
            dt: DEFAULT_DT,

            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            max_frames: None,
            quit_key: 'q',

            textures: vec![TextureEntry {
                name: "crate".to_string(),
                path: PathBuf::from("res/crate.png"),
            }],
            missing_textures_fatal: true,
        }
    }
}

impl Settings {
    /// Top-left origin projection covering the window
    pub fn projection(&self) -> Mat4 {
        crate::renderer::screen_projection(self.window_width, self.window_height)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
