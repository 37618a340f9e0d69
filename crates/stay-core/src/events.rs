//! Events emitted by the encounter for hosts, logs and tests.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Everything observable the encounter did during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterEvent {
    /// A zone started reporting overlaps.
    ZoneEnabled { zone: ZoneKind, size: f32 },
    /// A zone stopped reporting overlaps; its occupancy was cleared.
    ZoneDisabled { zone: ZoneKind },
    /// The shrink engine changed phase.
    PhaseChanged { from: ShrinkPhase, to: ShrinkPhase },
    /// The Movement zone was created at the given radius.
    MovementZoneCreated { radius: f32 },
    /// The tracked hand touched the Movement zone; the hand returns to its origin.
    MovementZoneConsumed,
    /// Recoil entered; the loss latch follows after the lead time.
    RecoilTriggered,
    /// The loss latch is set. Terminal.
    LossLatched,
    /// The tracked hand's input was disabled by a cover hold.
    MovementGated,
    /// The tracked hand's input was re-enabled.
    MovementReleased,
    /// Win signalled to the session.
    Win,
    /// Loss signalled to the session.
    Loss { reason: String },
    /// A presentation cue was requested.
    CueRequested { id: String, pitch: f32 },
}

impl EncounterEvent {
    /// The outcome carried by this event, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            EncounterEvent::Win => Some(Outcome::Win),
            EncounterEvent::Loss { .. } => Some(Outcome::Loss),
            _ => None,
        }
    }
}
