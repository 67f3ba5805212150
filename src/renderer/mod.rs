//! Rendering module
//!
//! Turns arena state into textured triangle batches. The window and GPU
//! backend live outside the crate and consume a [`DrawList`] each frame.

pub mod draw;
pub mod shapes;
pub mod textures;
pub mod vertex;

pub use draw::{DrawBatch, DrawList, draw_arena, draw_entity, draw_static, screen_projection};
pub use textures::{TextureHandle, TextureRegistry};
pub use vertex::Vertex;
