//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
///
/// Texture coordinates span the full 0..1 range across the rectangle.
pub fn quad(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let [tl, tr, br, bl] = rect.corners();
    let tl = Vertex::new(tl.x, tl.y, color).with_uv(0.0, 0.0);
    let tr = Vertex::new(tr.x, tr.y, color).with_uv(1.0, 0.0);
    let br = Vertex::new(br.x, br.y, color).with_uv(1.0, 1.0);
    let bl = Vertex::new(bl.x, bl.y, color).with_uv(0.0, 1.0);

    vec![tl, tr, br, br, bl, tl]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
