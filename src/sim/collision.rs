//! Collision shapes and overlap tests
//!
//! Everything in the arena is either an axis-aligned box or a circle. The
//! predicates here are pure; [`Collider::overlaps`] picks the right one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given as origin (top-left) plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle spanning two corners (top-left, bottom-right)
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self {
            pos: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Corners in draw order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }

    /// Closest point inside the rectangle to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// Circle given as center plus radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

/// Overlap test between two rectangles
///
/// Edges that only touch do not count.
#[inline]
pub fn rect_rect_collision(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Overlap test between a rectangle and a circle
///
/// Clamps the circle center onto the rectangle and compares the distance to
/// the radius. A circle that exactly touches the rectangle collides.
#[inline]
pub fn rect_circle_collision(rect: &Rect, circle: &Circle) -> bool {
    let closest = rect.clamp_point(circle.pos);
    circle.pos.distance(closest) <= circle.radius
}

/// Overlap test between two circles (touching counts)
#[inline]
pub fn circle_circle_collision(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.pos.distance_squared(b.pos) <= reach * reach
}

/// Collision shape of a map object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Box(Rect),
    Circle(Circle),
}

impl Collider {
    /// Dispatch to the matching predicate for the two shapes
    pub fn overlaps(&self, other: &Collider) -> bool {
        match (self, other) {
            (Collider::Circle(a), Collider::Circle(b)) => circle_circle_collision(a, b),
            (Collider::Box(r), Collider::Circle(c)) | (Collider::Circle(c), Collider::Box(r)) => {
                rect_circle_collision(r, c)
            }
            (Collider::Box(a), Collider::Box(b)) => rect_rect_collision(a, b),
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Collider::Circle(_))
    }
}
