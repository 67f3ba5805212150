//! Arena state
//!
//! Owns the two object collections produced by the map decoder. Both are
//! fixed for the lifetime of a map load: objects are mutated in place but
//! never added or removed.

use std::path::Path;

use super::map::{MapData, load_map};
use super::objects::{Entity, Static, StaticKind};
use super::tick::step_all;
use crate::error::MapError;

/// A loaded map and everything living in it
#[derive(Debug, Clone)]
pub struct Arena {
    /// Grid size in cells
    pub width: u32,
    pub height: u32,
    /// Simulated objects, in decode order
    pub entities: Vec<Entity>,
    /// Immovable objects, in decode order
    pub statics: Vec<Static>,
    /// Ticks advanced since load
    pub time_ticks: u64,
}

impl Arena {
    pub fn from_map(map: MapData) -> Self {
        Self {
            width: map.width,
            height: map.height,
            entities: map.entities,
            statics: map.statics,
            time_ticks: 0,
        }
    }

    /// Load a map image and build the arena from it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        load_map(path).map(Self::from_map)
    }

    /// Advance every entity by one tick
    pub fn step(&mut self, dt: f32) {
        step_all(dt, &mut self.entities, &self.statics);
        self.time_ticks += 1;
    }

    /// Open or close every forcefield (draw state only)
    pub fn set_forcefields_open(&mut self, open: bool) {
        for s in &mut self.statics {
            if let StaticKind::Forcefield { is_open } = &mut s.kind {
                *is_open = open;
            }
        }
    }

    /// World-space size of the map
    pub fn world_size(&self) -> glam::Vec2 {
        glam::UVec2::new(self.width, self.height).as_vec2() * crate::consts::BOX_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOX_SIZE, FRICTION};
    use crate::sim::map::{MapCell, decode_image};
    use glam::Vec2;
    use image::RgbaImage;

    /// 4x4 map: wall border, one box in the first inner cell
    fn boxed_room() -> Arena {
        let image = RgbaImage::from_fn(4, 4, |x, y| {
            let cell = if x == 0 || y == 0 || x == 3 || y == 3 {
                MapCell::Wall
            } else if (x, y) == (1, 1) {
                MapCell::Box
            } else {
                MapCell::Empty
            };
            image::Rgba(cell.to_rgba())
        });
        Arena::from_map(decode_image(&image).unwrap())
    }

    #[test]
    fn test_room_layout() {
        let arena = boxed_room();
        // Top and bottom rows merge, the side walls do not
        assert_eq!(arena.statics.len(), 6);
        assert_eq!(arena.statics[0].width_in_cells(), 4);
        assert_eq!(arena.entities.len(), 1);
        assert_eq!(arena.world_size(), Vec2::splat(4.0 * BOX_SIZE));
    }

    #[test]
    fn test_box_stays_inside_walls() {
        let mut arena = boxed_room();
        arena.entities[0].vel = Vec2::new(4.0, 0.0);

        let inner_min = BOX_SIZE;
        let inner_max = 3.0 * BOX_SIZE;
        for _ in 0..100 {
            arena.entities[0].apply_force(Vec2::new(30.0, 7.0));
            arena.step(0.1);

            let rect = arena.entities[0].rect();
            assert!(rect.min().x >= inner_min && rect.max().x <= inner_max);
            assert!(rect.min().y >= inner_min && rect.max().y <= inner_max);
            for wall in &arena.statics {
                assert!(!arena.entities[0].collider().overlaps(&wall.collider()));
            }
        }
        assert_eq!(arena.time_ticks, 100);
    }

    #[test]
    fn test_box_bounces_off_side_wall() {
        let mut arena = boxed_room();
        // One cell of free space to the right, a move of 15 hits the wall
        arena.entities[0].vel = Vec2::new(15.0, 0.0);
        arena.step(0.1);

        assert_eq!(arena.entities[0].pos.x, BOX_SIZE);
        assert_eq!(arena.entities[0].vel.x, -15.0 * FRICTION);
    }

    #[test]
    fn test_forcefield_toggle() {
        let mut arena = Arena::from_map(MapData {
            width: 2,
            height: 1,
            entities: Vec::new(),
            statics: vec![
                Static::forcefield(glam::IVec2::new(0, 0)),
                Static::wall(glam::IVec2::new(1, 0)),
            ],
        });
        arena.set_forcefields_open(true);
        assert_eq!(arena.statics[0].kind, StaticKind::Forcefield { is_open: true });
        assert_eq!(arena.statics[1].kind, StaticKind::Wall);
    }
}
