//! Fundamental geometric types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque identity of an object known to the overlap query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef(pub u64);

/// Zone geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoneShape {
    Circle { radius: f32 },
    Box { side: f32 },
}

impl ZoneShape {
    /// Radius for circles, side length for boxes.
    pub fn size(&self) -> f32 {
        match *self {
            ZoneShape::Circle { radius } => radius,
            ZoneShape::Box { side } => side,
        }
    }

    /// Same shape with a new size, clamped to be non-negative.
    pub fn with_size(&self, size: f32) -> ZoneShape {
        let size = size.max(0.0);
        match self {
            ZoneShape::Circle { .. } => ZoneShape::Circle { radius: size },
            ZoneShape::Box { .. } => ZoneShape::Box { side: size },
        }
    }

    /// Whether a circle at `point` with radius `radius` overlaps this shape centered at `center`.
    pub fn overlaps_circle(&self, center: Vec2, point: Vec2, radius: f32) -> bool {
        match *self {
            ZoneShape::Circle { radius: r } => circle_overlaps_circle(center, r, point, radius),
            ZoneShape::Box { side } => box_overlaps_circle(center, Vec2::splat(side), point, radius),
        }
    }
}

/// World-space bounds of the tracked hand's collider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColliderBounds {
    pub center: Vec2,
    pub radius: f32,
}

impl ColliderBounds {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Leftmost x of the collider.
    pub fn left_bound(&self) -> f32 {
        self.center.x - self.radius
    }
}

/// Horizontal extent the other hand's body must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub margin: f32,
}

impl ScreenBounds {
    /// Clamp a body center with the given half width so its edges stay inside the margin.
    /// If the body does not fit, it is centered on the screen.
    pub fn clamp_center(&self, x: f32, half_width: f32) -> f32 {
        let lo = self.min_x + self.margin + half_width;
        let hi = self.max_x - self.margin - half_width;
        if lo > hi {
            return (self.min_x + self.max_x) * 0.5;
        }
        x.clamp(lo, hi)
    }
}

/// Strict circle-circle overlap (touching edges do not count).
pub fn circle_overlaps_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Axis-aligned box (given full size) against a circle.
pub fn box_overlaps_circle(center: Vec2, size: Vec2, point: Vec2, radius: f32) -> bool {
    let half = size * 0.5;
    let closest = point.clamp(center - half, center + half);
    closest.distance_squared(point) < radius * radius
}
