//! Encounter engine for STAY.
//!
//! Owns the other hand's proximity zones, overlap detection, shrink timers,
//! motion model and win/loss resolution, plus a hecs-backed reference scene
//! that hosts the encounter headlessly.

pub mod cover;
pub mod cues;
pub mod engine;
pub mod host;
pub mod kinematics;
pub mod motion;
pub mod overlap;
pub mod ports;
pub mod recoil;
pub mod scenario;
pub mod scene;
pub mod session;
pub mod shrink;
pub mod systems;
pub mod timers;
pub mod tracker;
pub mod world_setup;
pub mod zones;

pub use engine::{EncounterBuilder, EncounterEngine};
pub use host::Host;
pub use stay_core as core;
