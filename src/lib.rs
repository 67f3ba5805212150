//! Tile Arena - a top-down arena driven by a tile map image
//!
//! Core modules:
//! - `sim`: Deterministic simulation (map decoding, objects, collisions, tick)
//! - `renderer`: Turns arena state into vertex batches for a draw backend
//! - `app`: Frame driver (events, update then draw)
//! - `settings`: JSON configuration

pub mod app;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppEvent};
pub use error::{AssetError, Error, MapError, SettingsError};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// World-unit edge length of one map cell
    pub const BOX_SIZE: f32 = 10.0;
    /// Velocity multiplier applied once per tick
    pub const FRICTION: f32 = 0.9;
    /// Time step handed to the update by the driver each frame
    pub const DEFAULT_DT: f32 = 0.1;

    /// Entity masses
    pub const BOX_MASS: f32 = 10.0;
    pub const BARREL_MASS: f32 = 10.0;
    pub const PLAYER_MASS: f32 = 5.0;

    /// Collider radii (0 means axis-aligned box collider)
    pub const BOX_RADIUS: f32 = 0.0;
    pub const BARREL_RADIUS: f32 = BOX_SIZE / 2.0;
    pub const PLAYER_RADIUS: f32 = BOX_SIZE;

    /// Window defaults
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 640;

    /// Triangle fan resolution for circular entities
    pub const CIRCLE_SEGMENTS: u32 = 32;
}
