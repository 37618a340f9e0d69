//! Recoil → loss sequence.
//!
//! Recoil entry plays the recoil animation and a random recoil sound, then
//! after a short lead time sets the loss latch. The latch disables every zone
//! and, after the loss animation, signals the loss. The latch is one-way.

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use stay_core::config::EncounterConfig;
use stay_core::enums::ZoneKind;
use stay_core::events::EncounterEvent;

use crate::cues::CuePicker;
use crate::ports::{Presentation, SessionController};
use crate::timers::{TaskAction, TaskList};
use crate::zones::ZoneSet;

#[derive(Debug, Clone)]
pub struct RecoilSequence {
    active: bool,
    loss_latched: bool,
    loss_signalled: bool,
    animation_frozen: bool,
    lead_time: f32,
    loss_animation_duration: f32,
    animation: String,
    reason: String,
    sounds: CuePicker,
}

impl RecoilSequence {
    pub fn new(config: &EncounterConfig) -> Self {
        Self {
            active: false,
            loss_latched: false,
            loss_signalled: false,
            animation_frozen: false,
            lead_time: config.recoil_lead_time,
            loss_animation_duration: config.loss_animation_duration,
            animation: config.recoil_animation.clone(),
            reason: config.loss_reason.clone(),
            sounds: CuePicker::new(
                config.recoil_sounds.clone(),
                config.cue_pitch_min,
                config.cue_pitch_max,
            ),
        }
    }

    /// Recoil triggered and not yet resolved.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_latched(&self) -> bool {
        self.loss_latched
    }

    pub fn loss_signalled(&self) -> bool {
        self.loss_signalled
    }

    /// Start the sequence. Ignored while a recoil or loss is already in progress.
    /// Returns whether it started.
    pub fn trigger(
        &mut self,
        tasks: &mut TaskList,
        presentation: Option<&mut (dyn Presentation + 'static)>,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<EncounterEvent>,
    ) -> bool {
        if self.active || self.loss_latched {
            return false;
        }

        let choice = self.sounds.pick(rng);
        if let Some(presentation) = presentation {
            presentation.set_animation_state(&self.animation, 0.0);
            if let Some(choice) = &choice {
                presentation.play_cue(&choice.id);
            }
        }
        if let Some(choice) = choice {
            events.push(EncounterEvent::CueRequested {
                id: choice.id,
                pitch: choice.pitch,
            });
        }

        self.active = true;
        self.animation_frozen = false;
        tasks.start(TaskAction::LatchLoss, self.lead_time);
        events.push(EncounterEvent::RecoilTriggered);
        info!(lead_time = self.lead_time, "recoil push activated");
        true
    }

    /// Set the loss latch: disable every zone and start the loss animation timer.
    /// Returns false if already latched.
    pub fn latch_loss(
        &mut self,
        zones: &mut ZoneSet,
        tasks: &mut TaskList,
        events: &mut Vec<EncounterEvent>,
    ) -> bool {
        if self.loss_latched {
            return false;
        }
        self.loss_latched = true;
        for kind in ZoneKind::ALL {
            if zones.set_enabled(kind, false) {
                events.push(EncounterEvent::ZoneDisabled { zone: kind });
            }
        }
        zones.clear_occupancy();
        tasks.cancel(TaskAction::LatchLoss);
        tasks.start(TaskAction::SignalLoss, self.loss_animation_duration);
        events.push(EncounterEvent::LossLatched);
        warn!(
            animation_secs = self.loss_animation_duration,
            "loss latched"
        );
        true
    }

    /// Signal the loss to the session, once.
    pub fn signal_loss(
        &mut self,
        session: &mut dyn SessionController,
        events: &mut Vec<EncounterEvent>,
    ) {
        if self.loss_signalled {
            return;
        }
        self.loss_signalled = true;
        session.trigger_loss(&self.reason);
        events.push(EncounterEvent::Loss {
            reason: self.reason.clone(),
        });
        info!(reason = %self.reason, "loss signalled");
    }

    /// Hold the recoil animation on its last frame once it has played through.
    /// Visual only; no state transition depends on it.
    pub fn freeze_finished_animation(&mut self, presentation: Option<&mut (dyn Presentation + 'static)>) {
        if !self.active || self.animation_frozen {
            return;
        }
        let Some(presentation) = presentation else {
            return;
        };
        if presentation.animation_finished(&self.animation) {
            presentation.set_animation_state(&self.animation, 1.0);
            self.animation_frozen = true;
            debug!(animation = %self.animation, "animation frozen on last frame");
        }
    }
}
