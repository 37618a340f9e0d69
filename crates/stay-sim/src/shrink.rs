//! Shrink engine: Shrinking → MovementPending → MovementShrinking → Idle.
//!
//! Personal converges on the Cover floor at a rate drawn once per encounter.
//! Recoil follows at the same rate, but only after Personal has caught up to it.
//! While the tracked hand is inside Personal, Personal is held at its original
//! radius. Once Personal bottoms out, a delay runs and a Movement zone is created
//! at the original Personal radius, which then shrinks on its own.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use stay_core::config::EncounterConfig;
use stay_core::enums::{ShrinkPhase, ZoneKind};
use stay_core::events::EncounterEvent;
use stay_core::types::ZoneShape;

use crate::zones::ZoneSet;

/// Draw the per-encounter shrink rate from the configured range.
pub fn draw_rate(config: &EncounterConfig, rng: &mut ChaCha8Rng) -> f32 {
    if config.shrink_rate_max > config.shrink_rate_min {
        rng.gen_range(config.shrink_rate_min..=config.shrink_rate_max)
    } else {
        config.shrink_rate_min
    }
}

#[derive(Debug, Clone)]
pub struct ShrinkEngine {
    phase: ShrinkPhase,
    rate: f32,
    movement_rate: f32,
    floor: f32,
    movement_radius: f32,
    movement_delay: f32,
    delay_timer: f32,
}

impl ShrinkEngine {
    pub fn new(config: &EncounterConfig, rate: f32) -> Self {
        Self {
            phase: ShrinkPhase::Shrinking,
            rate,
            movement_rate: config.movement_shrink_rate.unwrap_or(rate),
            floor: config.cover_size,
            movement_radius: config.personal_radius,
            movement_delay: config.movement_delay,
            delay_timer: 0.0,
        }
    }

    pub fn phase(&self) -> ShrinkPhase {
        self.phase
    }

    /// The drawn Personal/Recoil shrink rate.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Time spent in MovementPending so far.
    pub fn delay_elapsed(&self) -> f32 {
        self.delay_timer
    }

    /// Return to Shrinking. Zone sizes are the caller's concern.
    pub fn reset(&mut self, events: &mut Vec<EncounterEvent>) {
        self.delay_timer = 0.0;
        self.set_phase(ShrinkPhase::Shrinking, events);
    }

    /// Advance by one frame.
    pub fn tick(&mut self, dt: f32, zones: &mut ZoneSet, events: &mut Vec<EncounterEvent>) {
        let dt = dt.max(0.0);
        match self.phase {
            ShrinkPhase::Shrinking => self.tick_shrinking(dt, zones, events),
            ShrinkPhase::MovementPending => self.tick_pending(dt, zones, events),
            ShrinkPhase::MovementShrinking => self.tick_movement(dt, zones, events),
            ShrinkPhase::Idle => {}
        }
    }

    fn tick_shrinking(&mut self, dt: f32, zones: &mut ZoneSet, events: &mut Vec<EncounterEvent>) {
        // Suppressed (cover) or gone: no progress.
        if !zones.is_enabled(ZoneKind::Personal) {
            return;
        }
        if zones.is_occupied(ZoneKind::Personal) {
            zones.restore(ZoneKind::Personal);
            return;
        }

        let reached = zones.shrink_towards(ZoneKind::Personal, self.floor, self.rate, dt);

        let caught_up = match (zones.size(ZoneKind::Personal), zones.size(ZoneKind::Recoil)) {
            (Some(personal), Some(recoil)) => personal <= recoil,
            _ => false,
        };
        if caught_up {
            zones.shrink_towards(ZoneKind::Recoil, self.floor, self.rate, dt);
        }

        if reached {
            for kind in [ZoneKind::Personal, ZoneKind::Recoil] {
                if zones.set_enabled(kind, false) {
                    events.push(EncounterEvent::ZoneDisabled { zone: kind });
                }
            }
            self.delay_timer = 0.0;
            self.set_phase(ShrinkPhase::MovementPending, events);
        }
    }

    fn tick_pending(&mut self, dt: f32, zones: &mut ZoneSet, events: &mut Vec<EncounterEvent>) {
        self.delay_timer += dt;
        if self.delay_timer < self.movement_delay {
            return;
        }
        zones.create_zone(
            ZoneKind::Movement,
            ZoneShape::Circle {
                radius: self.movement_radius,
            },
            Vec2::ZERO,
        );
        events.push(EncounterEvent::MovementZoneCreated {
            radius: self.movement_radius,
        });
        self.set_phase(ShrinkPhase::MovementShrinking, events);
    }

    fn tick_movement(&mut self, dt: f32, zones: &mut ZoneSet, events: &mut Vec<EncounterEvent>) {
        if !zones.is_enabled(ZoneKind::Movement) {
            return;
        }
        if zones.shrink_towards(ZoneKind::Movement, self.floor, self.movement_rate, dt) {
            if zones.set_enabled(ZoneKind::Movement, false) {
                events.push(EncounterEvent::ZoneDisabled {
                    zone: ZoneKind::Movement,
                });
            }
            self.set_phase(ShrinkPhase::Idle, events);
        }
    }

    fn set_phase(&mut self, phase: ShrinkPhase, events: &mut Vec<EncounterEvent>) {
        if self.phase == phase {
            return;
        }
        info!(from = ?self.phase, to = ?phase, "shrink phase changed");
        events.push(EncounterEvent::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }
}
