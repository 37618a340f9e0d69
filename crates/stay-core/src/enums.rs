//! Enumeration types used throughout the encounter.

use serde::{Deserialize, Serialize};

/// The four proximity zones owned by the other hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Outer zone. Occupancy pushes the hand away and pauses shrinking.
    Personal,
    /// Inner zone. Entry starts the recoil sequence that ends in a loss.
    Recoil,
    /// Box at the hand's center. Holding it long enough wins.
    Cover,
    /// Created late in the encounter; drives the autonomous approach.
    Movement,
}

impl ZoneKind {
    /// Number of zone kinds (size of the zone table).
    pub const COUNT: usize = 4;

    /// All kinds in table order.
    pub const ALL: [ZoneKind; ZoneKind::COUNT] = [
        ZoneKind::Personal,
        ZoneKind::Recoil,
        ZoneKind::Cover,
        ZoneKind::Movement,
    ];

    /// Index into the fixed zone table.
    pub fn index(self) -> usize {
        match self {
            ZoneKind::Personal => 0,
            ZoneKind::Recoil => 1,
            ZoneKind::Cover => 2,
            ZoneKind::Movement => 3,
        }
    }

    /// Whether the event channel reports crossings for this zone.
    pub fn receives_events(self) -> bool {
        matches!(self, ZoneKind::Personal | ZoneKind::Recoil)
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoneKind::Personal => "Personal Space",
            ZoneKind::Recoil => "Recoil Space",
            ZoneKind::Cover => "Cover Space",
            ZoneKind::Movement => "Movement Space",
        }
    }
}

/// Shrink engine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShrinkPhase {
    /// Personal (and, once caught up, Recoil) converging on the floor.
    #[default]
    Shrinking,
    /// Personal reached the floor; counting down to the Movement zone.
    MovementPending,
    /// Movement zone exists and is converging on the floor.
    MovementShrinking,
    /// Nothing left to shrink.
    Idle,
}

/// Which rule produced the motion target on the last fixed step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionMode {
    /// Drifting back toward the origin.
    #[default]
    Returning,
    /// Pushed away by Personal occupancy.
    Pushing,
    /// Pushed away at recoil speed.
    Recoiling,
    /// Gliding toward the tracked hand.
    Approaching,
    /// Approach reached the tracked hand; holding position.
    Holding,
    /// Interpolating back to the origin after the Movement zone was consumed.
    Gliding,
    /// Motion stopped by the loss latch.
    Frozen,
}

/// Terminal or re-armable result signalled to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Reference session director phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Fading in from black.
    #[default]
    Opening,
    /// Fade-in complete; the encounter is playing.
    Playing,
    /// An outcome was requested; fading out.
    Ending,
    /// Fade-out complete; the next scene has been requested.
    SceneRequested,
}
