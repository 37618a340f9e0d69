//! Encounter snapshot: the complete visible state after each frame tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::EncounterEvent;
use crate::types::ZoneShape;

/// State of the encounter after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    /// Accumulated frame time (seconds).
    pub time: f32,
    pub phase: ShrinkPhase,
    pub motion: MotionMode,
    pub position: Vec2,
    pub zones: Vec<ZoneView>,
    pub hold_time: f32,
    pub recoil_active: bool,
    pub loss_latched: bool,
    pub wins: u32,
    /// Events since the previous snapshot.
    pub events: Vec<EncounterEvent>,
}

impl EncounterSnapshot {
    pub fn zone(&self, kind: ZoneKind) -> Option<&ZoneView> {
        self.zones.iter().find(|z| z.kind == kind)
    }
}

/// A zone as seen from outside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneView {
    pub kind: ZoneKind,
    pub shape: ZoneShape,
    /// World-space center.
    pub center: Vec2,
    pub enabled: bool,
    pub occupied: bool,
}
