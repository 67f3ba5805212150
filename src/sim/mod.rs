//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time step handed in by the caller
//! - Stable iteration order (decode order of the map)
//! - No rendering or platform dependencies

pub mod collision;
pub mod map;
pub mod objects;
pub mod state;
pub mod tick;

pub use collision::{
    Circle, Collider, Rect, circle_circle_collision, rect_circle_collision, rect_rect_collision,
};
pub use map::{MapCell, MapData, decode_image, decode_pixels, load_map};
pub use objects::{Entity, EntityKind, MapObject, ObjectKind, SiteName, Static, StaticKind};
pub use state::Arena;
pub use tick::{is_blocked, step_all, step_entity};
