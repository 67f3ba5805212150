//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position, color and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
            uv: [0.0, 0.0],
        }
    }

    pub const fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.uv = [u, v];
        self
    }
}

/// 8-bit RGBA to normalized float color
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for map objects
pub mod colors {
    use super::rgba8;

    pub const WALL: [f32; 4] = rgba8(0, 0, 0, 255);
    pub const FORCEFIELD_CLOSED: [f32; 4] = rgba8(0, 0, 255, 255);
    pub const FORCEFIELD_OPEN: [f32; 4] = rgba8(0, 0, 125, 255);
    pub const BOMB_AREA_A: [f32; 4] = rgba8(255, 0, 0, 128);
    pub const BOMB_AREA_B: [f32; 4] = rgba8(0, 255, 0, 128);
    pub const ENTITY: [f32; 4] = rgba8(255, 0, 255, 255);
    /// Texture tint (leave texels unchanged)
    pub const WHITE: [f32; 4] = rgba8(255, 255, 255, 255);
    pub const BACKGROUND: [f32; 4] = rgba8(255, 255, 255, 255);
}
