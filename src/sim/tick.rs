//! Per-frame entity update
//!
//! Entities are integrated one at a time in collection order. Each one sees
//! the already-updated state of entities processed earlier in the same tick.
//! Collision response is axis-separated: move along x, revert and reflect on
//! a hit, then do the same along y.

use glam::Vec2;

use super::collision::Collider;
use super::objects::{Entity, Static};
use crate::consts::FRICTION;

/// Axis being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// True if `collider` overlaps any entity other than `skip`, or any static
///
/// Entities are tested before statics; both stop at the first hit.
pub fn is_blocked(
    collider: &Collider,
    skip: usize,
    entities: &[Entity],
    statics: &[Static],
) -> bool {
    entities
        .iter()
        .enumerate()
        .any(|(i, other)| i != skip && collider.overlaps(&other.collider()))
        || statics.iter().any(|s| collider.overlaps(&s.collider()))
}

/// Advance the entity at `index` by one tick
pub fn step_entity(index: usize, dt: f32, entities: &mut [Entity], statics: &[Static]) {
    let entity = &entities[index];
    if !entity.simulate_physics {
        return;
    }

    let mut vel = entity.vel + entity.acc * dt;
    let last_pos = entity.pos;
    let mut pos = last_pos;

    for axis in [Axis::X, Axis::Y] {
        match axis {
            Axis::X => pos.x += vel.x,
            Axis::Y => pos.y += vel.y,
        }

        let collider = entities[index].collider_at(pos);
        if is_blocked(&collider, index, entities, statics) {
            log::trace!("Entity {} blocked on {:?}", index, axis);
            match axis {
                Axis::X => {
                    pos.x = last_pos.x;
                    vel.x = -vel.x;
                }
                Axis::Y => {
                    pos.y = last_pos.y;
                    vel.y = -vel.y;
                }
            }
        }
    }

    let entity = &mut entities[index];
    entity.pos = pos;
    entity.vel = vel * FRICTION;
    entity.acc = Vec2::ZERO;
}

/// Advance every entity once, in collection order
pub fn step_all(dt: f32, entities: &mut [Entity], statics: &[Static]) {
    for index in 0..entities.len() {
        step_entity(index, dt, entities, statics);
    }
}
