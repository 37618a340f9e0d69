//! Target tracker sampling.
//!
//! The tracked hand is read once per tick into a plain value so every
//! subsystem in that tick sees the same bounds.

use glam::Vec2;

use stay_core::types::{ColliderBounds, ObjectRef};

use crate::ports::TargetTracker;

/// The tracked hand as seen at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSample {
    pub object: ObjectRef,
    pub position: Vec2,
    pub bounds: ColliderBounds,
    pub velocity: Vec2,
}

impl TargetSample {
    pub fn read(tracker: &dyn TargetTracker) -> Self {
        Self {
            object: tracker.object(),
            position: tracker.position(),
            bounds: tracker.collider_bounds(),
            velocity: tracker.velocity(),
        }
    }

    /// Leftmost x of the tracked hand's collider. The other hand's trailing
    /// edge must never cross it.
    pub fn left_bound(&self) -> f32 {
        self.bounds.left_bound()
    }
}
