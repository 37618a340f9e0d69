//! Collaborator interfaces consumed by the encounter.
//!
//! The encounter never blocks on these: queries are read-only and signals are
//! fire-and-forget.

use glam::Vec2;

use stay_core::types::{ColliderBounds, ObjectRef};

/// The tracked hand.
pub trait TargetTracker {
    /// Identity of the tracked object, for reference-equality overlap tests.
    fn object(&self) -> ObjectRef;
    fn position(&self) -> Vec2;
    fn collider_bounds(&self) -> ColliderBounds;
    fn velocity(&self) -> Vec2;
    /// Gate the tracked hand's movement input.
    fn set_movement_enabled(&mut self, enabled: bool);
}

/// Spatial queries against everything in the scene.
pub trait OverlapQuery {
    /// Objects whose colliders overlap the circle, minus `exclude`.
    fn overlaps_circle(&self, center: Vec2, radius: f32, exclude: &[ObjectRef]) -> Vec<ObjectRef>;
    /// Objects whose colliders overlap the axis-aligned box of full size `size`.
    fn overlaps_box(&self, center: Vec2, size: Vec2) -> Vec<ObjectRef>;
    /// Collision layer of an object, if known.
    fn layer_of(&self, object: ObjectRef) -> Option<u8>;
}

/// Receives terminal and re-armable outcomes.
pub trait SessionController {
    fn trigger_win(&mut self);
    fn trigger_loss(&mut self, reason: &str);
}

/// Animation, audio and sprite sorting. Optional; absent means no side effects.
pub trait Presentation {
    fn play_cue(&mut self, id: &str);
    fn set_animation_state(&mut self, name: &str, normalized_time: f32);
    fn set_sort_layer(&mut self, name: &str);
    /// Whether the named animation has played to its end.
    fn animation_finished(&self, name: &str) -> bool;
}

/// Whether `object` is the tracked hand: same object, or on a layer in `layer_mask`.
pub fn is_tracked_target(
    query: &dyn OverlapQuery,
    target: ObjectRef,
    layer_mask: u32,
    object: ObjectRef,
) -> bool {
    if object == target {
        return true;
    }
    if layer_mask == 0 {
        return false;
    }
    match query.layer_of(object) {
        Some(layer) if layer < 32 => layer_mask & (1u32 << layer) != 0,
        _ => false,
    }
}
