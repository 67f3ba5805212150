//! Startup error types
//!
//! Everything here is fatal: the driver aborts before the first frame.

use std::path::PathBuf;

use thiserror::Error;

/// Map image could not be turned into an arena
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("map image has no cells ({width}x{height})")]
    Empty { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected} for the given size")]
    BufferSize { expected: usize, actual: usize },
}

/// Texture registry failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture '{name}' from {path}: {source}")]
    Image {
        name: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture '{0}' is already registered")]
    Duplicate(String),
}

/// Configuration file failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
