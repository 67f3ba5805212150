//! Map objects: immovable statics and simulated entities
//!
//! The variant set is closed and known at decode time, so each side is one
//! struct carrying a kind enum rather than a trait object.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Collider, Rect};
use crate::consts::*;

/// Capability of a map object, used to route it into a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Static,
    Entity,
}

/// Bomb site identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteName {
    A,
    B,
}

impl SiteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteName::A => "A",
            SiteName::B => "B",
        }
    }
}

/// Static variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticKind {
    Wall,
    /// Open state only changes the draw color
    Forcefield { is_open: bool },
    BombArea { site: SiteName },
}

/// An immovable map object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Static {
    pub kind: StaticKind,
    /// Top-left cell on the map grid
    pub cell: IVec2,
    /// World-space bounding box (walls may span several cells)
    pub bounds: Rect,
}

impl Static {
    /// Single-cell static at the given grid position
    pub fn new(kind: StaticKind, cell: IVec2) -> Self {
        Self {
            kind,
            cell,
            bounds: Rect::new(cell_to_world(cell), Vec2::splat(BOX_SIZE)),
        }
    }

    pub fn wall(cell: IVec2) -> Self {
        Self::new(StaticKind::Wall, cell)
    }

    pub fn forcefield(cell: IVec2) -> Self {
        Self::new(StaticKind::Forcefield { is_open: false }, cell)
    }

    pub fn bomb_area(cell: IVec2, site: SiteName) -> Self {
        Self::new(StaticKind::BombArea { site }, cell)
    }

    /// Grow a wall to the right so it covers `cells` cells in total
    pub(crate) fn extend_run(&mut self, cells: u32) {
        self.bounds.size.x = cells as f32 * BOX_SIZE;
    }

    #[inline]
    pub fn collider(&self) -> Collider {
        Collider::Box(self.bounds)
    }

    /// Number of grid cells covered horizontally
    pub fn width_in_cells(&self) -> u32 {
        (self.bounds.size.x / BOX_SIZE).round() as u32
    }
}

/// Entity variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Box,
    Barrel,
    Player {
        /// Aim direction, not used by physics
        facing: Vec2,
    },
}

impl EntityKind {
    pub fn mass(&self) -> f32 {
        match self {
            EntityKind::Box => BOX_MASS,
            EntityKind::Barrel => BARREL_MASS,
            EntityKind::Player { .. } => PLAYER_MASS,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            EntityKind::Box => BOX_RADIUS,
            EntityKind::Barrel => BARREL_RADIUS,
            EntityKind::Player { .. } => PLAYER_RADIUS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Box => "box",
            EntityKind::Barrel => "barrel",
            EntityKind::Player { .. } => "player",
        }
    }
}

/// A physics-simulated map object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Spawn cell on the map grid
    pub cell: IVec2,
    /// Top-left corner for box colliders, center for circles
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    mass: f32,
    radius: f32,
    /// Skipped by the update when false; still blocks other entities
    pub simulate_physics: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, cell: IVec2) -> Self {
        let radius = kind.radius();
        let mut pos = cell_to_world(cell);
        if radius != 0.0 {
            pos += radius;
        }
        Self {
            kind,
            cell,
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass: kind.mass(),
            radius,
            simulate_physics: true,
        }
    }

    pub fn boxed(cell: IVec2) -> Self {
        Self::new(EntityKind::Box, cell)
    }

    pub fn barrel(cell: IVec2) -> Self {
        Self::new(EntityKind::Barrel, cell)
    }

    pub fn player(cell: IVec2) -> Self {
        Self::new(EntityKind::Player { facing: Vec2::ZERO }, cell)
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// 0 for box colliders
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// One-cell box at `pos`
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(BOX_SIZE))
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Collider at the current position
    #[inline]
    pub fn collider(&self) -> Collider {
        self.collider_at(self.pos)
    }

    /// Collider as if the entity stood at `pos`
    pub fn collider_at(&self, pos: Vec2) -> Collider {
        if self.radius != 0.0 {
            Collider::Circle(Circle::new(pos, self.radius))
        } else {
            Collider::Box(Rect::new(pos, Vec2::splat(BOX_SIZE)))
        }
    }

    /// Set acceleration from a force (replaces, does not accumulate)
    pub fn apply_force(&mut self, force: impl Into<Vec2>) {
        debug_assert!(
            self.mass.is_finite() && self.mass > 0.0,
            "apply_force on entity with mass {}",
            self.mass
        );
        self.acc = force.into() / self.mass;
    }
}

/// Grid cell to world coordinates
#[inline]
pub fn cell_to_world(cell: IVec2) -> Vec2 {
    cell.as_vec2() * BOX_SIZE
}

/// A decoded map object of either capability
#[derive(Debug, Clone, PartialEq)]
pub enum MapObject {
    Static(Static),
    Entity(Entity),
}

impl MapObject {
    pub fn object_kind(&self) -> ObjectKind {
        match self {
            MapObject::Static(_) => ObjectKind::Static,
            MapObject::Entity(_) => ObjectKind::Entity,
        }
    }

    pub fn collider(&self) -> Collider {
        match self {
            MapObject::Static(s) => s.collider(),
            MapObject::Entity(e) => e.collider(),
        }
    }
}
