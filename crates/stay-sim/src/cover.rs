//! Cover hold → win.
//!
//! While the tracked hand sits in the Cover box, hold time accumulates. Past the
//! stop threshold the hand's input is gated; past the win threshold the win is
//! signalled, hold time resets, the gate lifts and the encounter re-arms.
//! Personal and Recoil are suppressed for the whole streak and come back, at
//! their original sizes, when it ends.

use tracing::{debug, info};

use stay_core::config::EncounterConfig;
use stay_core::enums::ZoneKind;
use stay_core::events::EncounterEvent;

use crate::ports::{SessionController, TargetTracker};
use crate::shrink::ShrinkEngine;
use crate::zones::ZoneSet;

const SUPPRESSED_ZONES: [ZoneKind; 2] = [ZoneKind::Personal, ZoneKind::Recoil];

#[derive(Debug, Clone)]
pub struct CoverController {
    stop_threshold: f32,
    win_threshold: f32,
    hold_time: f32,
    covering: bool,
    movement_gated: bool,
    /// The gate is applied at most once per streak.
    gate_fired: bool,
    win_fired: bool,
    /// Zones this streak disabled, to re-enable when it ends.
    suppressed: [bool; 2],
    /// A win in this streak: re-enable Personal and Recoil when it ends,
    /// whatever disabled them.
    restore_pending: bool,
    wins: u32,
}

impl CoverController {
    pub fn new(config: &EncounterConfig) -> Self {
        Self {
            stop_threshold: config.cover_stop_threshold,
            win_threshold: config.cover_win_threshold,
            hold_time: 0.0,
            covering: false,
            movement_gated: false,
            gate_fired: false,
            win_fired: false,
            suppressed: [false; 2],
            restore_pending: false,
            wins: 0,
        }
    }

    pub fn hold_time(&self) -> f32 {
        self.hold_time
    }

    /// A covered streak is in progress.
    pub fn is_covering(&self) -> bool {
        self.covering
    }

    pub fn is_movement_gated(&self) -> bool {
        self.movement_gated
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Advance one frame with this frame's Cover overlap result.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        dt: f32,
        covered: bool,
        zones: &mut ZoneSet,
        shrink: &mut ShrinkEngine,
        tracker: &mut dyn TargetTracker,
        session: &mut dyn SessionController,
        events: &mut Vec<EncounterEvent>,
    ) {
        if !covered {
            if self.covering {
                self.end_streak(zones, tracker, events);
            }
            self.hold_time = 0.0;
            return;
        }

        if !self.covering {
            self.start_streak(zones, events);
        }

        self.hold_time += dt.max(0.0);

        if self.hold_time >= self.stop_threshold && !self.gate_fired {
            tracker.set_movement_enabled(false);
            self.movement_gated = true;
            self.gate_fired = true;
            events.push(EncounterEvent::MovementGated);
            info!(hold_time = self.hold_time, "tracked hand movement disabled");
        }

        if self.hold_time >= self.win_threshold && !self.win_fired {
            self.win_fired = true;
            self.wins += 1;
            session.trigger_win();
            events.push(EncounterEvent::Win);
            info!(hold_time = self.hold_time, wins = self.wins, "cover held: win");

            self.hold_time = 0.0;
            for kind in SUPPRESSED_ZONES {
                zones.restore(kind);
            }
            if zones.destroy_zone(ZoneKind::Movement) {
                events.push(EncounterEvent::ZoneDisabled {
                    zone: ZoneKind::Movement,
                });
            }
            shrink.reset(events);
            self.restore_pending = true;
            self.release_movement(tracker, events);
        }
    }

    fn start_streak(&mut self, zones: &mut ZoneSet, events: &mut Vec<EncounterEvent>) {
        self.covering = true;
        self.gate_fired = false;
        self.win_fired = false;
        for (i, kind) in SUPPRESSED_ZONES.into_iter().enumerate() {
            if zones.set_enabled(kind, false) {
                self.suppressed[i] = true;
                events.push(EncounterEvent::ZoneDisabled { zone: kind });
            }
        }
        debug!("cover streak started");
    }

    fn end_streak(
        &mut self,
        zones: &mut ZoneSet,
        tracker: &mut dyn TargetTracker,
        events: &mut Vec<EncounterEvent>,
    ) {
        self.covering = false;
        self.release_movement(tracker, events);
        for (i, kind) in SUPPRESSED_ZONES.into_iter().enumerate() {
            if (self.suppressed[i] || self.restore_pending) && zones.set_enabled(kind, true) {
                events.push(EncounterEvent::ZoneEnabled {
                    zone: kind,
                    size: zones.size(kind).unwrap_or_default(),
                });
            }
        }
        self.suppressed = [false; 2];
        self.restore_pending = false;
        debug!("cover streak ended");
    }

    fn release_movement(&mut self, tracker: &mut dyn TargetTracker, events: &mut Vec<EncounterEvent>) {
        if !self.movement_gated {
            return;
        }
        tracker.set_movement_enabled(true);
        self.movement_gated = false;
        events.push(EncounterEvent::MovementReleased);
        info!("tracked hand movement enabled");
    }
}
