//! Per-object draw calls
//!
//! Objects are drawn into a [`DrawList`]: consecutive triangles that share a
//! texture are merged into one batch, so a backend only has to upload the
//! vertices and bind one texture per batch.

use glam::{Mat4, Vec2};

use super::shapes;
use super::textures::{TextureHandle, TextureRegistry};
use super::vertex::{Vertex, colors};
use crate::consts::{BOX_SIZE, CIRCLE_SEGMENTS};
use crate::sim::{Arena, Entity, EntityKind, Rect, SiteName, Static, StaticKind};

/// Texture used for box entities when registered
pub const CRATE_TEXTURE: &str = "crate";

/// Triangles sharing one texture binding
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub texture: Option<TextureHandle>,
    pub vertices: Vec<Vertex>,
}

/// Everything drawn in one frame, in submission order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    /// World to clip space for every batch
    pub projection: Mat4,
    pub batches: Vec<DrawBatch>,
}

impl DrawList {
    pub fn new(clear_color: [f32; 4], projection: Mat4) -> Self {
        Self {
            clear_color,
            projection,
            batches: Vec::new(),
        }
    }

    /// Append triangles, extending the last batch when the texture matches
    pub fn push(&mut self, texture: Option<TextureHandle>, vertices: Vec<Vertex>) {
        if vertices.is_empty() {
            return;
        }
        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.vertices.extend(vertices),
            _ => self.batches.push(DrawBatch { texture, vertices }),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Fill color for a static
pub fn static_color(kind: &StaticKind) -> [f32; 4] {
    match kind {
        StaticKind::Wall => colors::WALL,
        StaticKind::Forcefield { is_open: true } => colors::FORCEFIELD_OPEN,
        StaticKind::Forcefield { is_open: false } => colors::FORCEFIELD_CLOSED,
        StaticKind::BombArea { site: SiteName::A } => colors::BOMB_AREA_A,
        StaticKind::BombArea { site: SiteName::B } => colors::BOMB_AREA_B,
    }
}

/// Draw a static as its bounding quad
pub fn draw_static(list: &mut DrawList, s: &Static) {
    list.push(None, shapes::quad(&s.bounds, static_color(&s.kind)));
}

/// Draw an entity
///
/// Box colliders draw a one-cell quad (textured with [`CRATE_TEXTURE`] for
/// boxes when available), circles a triangle fan. Players draw nothing.
pub fn draw_entity(list: &mut DrawList, entity: &Entity, textures: &TextureRegistry) {
    match entity.kind {
        EntityKind::Player { .. } => {}
        _ if entity.radius() != 0.0 => {
            let verts = shapes::circle(entity.pos, entity.radius(), colors::ENTITY, CIRCLE_SEGMENTS);
            list.push(None, verts);
        }
        kind => {
            let rect = Rect::new(entity.pos, Vec2::splat(BOX_SIZE));
            let texture = match kind {
                EntityKind::Box => textures.handle(CRATE_TEXTURE),
                _ => None,
            };
            let color = if texture.is_some() {
                colors::WHITE
            } else {
                colors::ENTITY
            };
            list.push(texture, shapes::quad(&rect, color));
        }
    }
}

/// Orthographic projection with the origin at the top-left of the window
pub fn screen_projection(width: u32, height: u32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, width as f32, height as f32, 0.0, 0.0, width as f32)
}

/// Draw the whole arena: statics first, then entities
pub fn draw_arena(arena: &Arena, textures: &TextureRegistry, projection: Mat4) -> DrawList {
    let mut list = DrawList::new(colors::BACKGROUND, projection);
    for s in &arena.statics {
        draw_static(&mut list, s);
    }
    for entity in &arena.entities {
        draw_entity(&mut list, entity, textures);
    }
    list
}
