//! Reference session director.
//!
//! Fades the scene in on start, and on the first win or loss fades music and
//! visuals out and then requests the matching scene. Later outcome requests are
//! ignored.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use stay_core::config::SessionConfig;
use stay_core::enums::{Outcome, SessionPhase};

use crate::kinematics::move_towards;
use crate::ports::SessionController;

#[derive(Debug, Clone)]
pub struct SessionDirector {
    config: SessionConfig,
    phase: SessionPhase,
    /// Black overlay opacity: 1 is fully black.
    visual_alpha: f32,
    music_volume: f32,
    /// Volume when the end sequence started; music fades from here to zero.
    fade_from_volume: f32,
    outcome: Option<Outcome>,
    loss_reason: Option<String>,
    requested_scene: Option<String>,
}

impl SessionDirector {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            phase: SessionPhase::Opening,
            visual_alpha: 1.0,
            music_volume: 0.0,
            fade_from_volume: 0.0,
            outcome: None,
            loss_reason: None,
            requested_scene: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn visual_alpha(&self) -> f32 {
        self.visual_alpha
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn loss_reason(&self) -> Option<&str> {
        self.loss_reason.as_deref()
    }

    /// Scene name requested once the end fade completed.
    pub fn requested_scene(&self) -> Option<&str> {
        self.requested_scene.as_deref()
    }

    /// Advance fades by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        match self.phase {
            SessionPhase::Opening => {
                self.visual_alpha =
                    move_towards(self.visual_alpha, 0.0, step(dt, self.config.fade_duration, 1.0));
                self.music_volume = move_towards(
                    self.music_volume,
                    self.config.music_max_volume,
                    step(dt, self.config.music_fade_time, self.config.music_max_volume),
                );
                if self.visual_alpha <= 0.0
                    && self.music_volume >= self.config.music_max_volume
                {
                    self.phase = SessionPhase::Playing;
                    debug!("session fade-in complete");
                }
            }
            SessionPhase::Playing | SessionPhase::SceneRequested => {}
            SessionPhase::Ending => {
                self.visual_alpha =
                    move_towards(self.visual_alpha, 1.0, step(dt, self.config.fade_duration, 1.0));
                self.music_volume = move_towards(
                    self.music_volume,
                    0.0,
                    step(dt, self.config.music_fade_time, self.fade_from_volume),
                );
                if self.visual_alpha >= 1.0 {
                    let scene = match self.outcome {
                        Some(Outcome::Win) => self.config.win_scene.clone(),
                        _ => self.config.lose_scene.clone(),
                    };
                    info!(scene = %scene, "scene requested");
                    self.requested_scene = Some(scene);
                    self.phase = SessionPhase::SceneRequested;
                }
            }
        }
    }

    fn begin_end(&mut self, outcome: Outcome) {
        if matches!(self.phase, SessionPhase::Ending | SessionPhase::SceneRequested) {
            debug!(?outcome, "end sequence already running; ignored");
            return;
        }
        info!(?outcome, "end sequence started");
        self.outcome = Some(outcome);
        self.fade_from_volume = self.music_volume;
        self.phase = SessionPhase::Ending;
    }
}

impl SessionController for SessionDirector {
    fn trigger_win(&mut self) {
        self.begin_end(Outcome::Win);
    }

    fn trigger_loss(&mut self, reason: &str) {
        if self.outcome.is_none() {
            self.loss_reason = Some(reason.to_string());
        }
        self.begin_end(Outcome::Loss);
    }
}

/// Per-frame change for a linear fade covering `span` in `duration` seconds.
/// A zero duration completes in one step.
fn step(dt: f32, duration: f32, span: f32) -> f32 {
    if duration <= 0.0 {
        f32::INFINITY
    } else {
        span.abs() * dt / duration
    }
}

/// Shared handle so the host can read the director the encounter signals.
#[derive(Debug, Clone)]
pub struct SharedSession(Rc<RefCell<SessionDirector>>);

impl SharedSession {
    pub fn new(director: SessionDirector) -> Self {
        Self(Rc::new(RefCell::new(director)))
    }

    pub fn tick(&self, dt: f32) {
        self.0.borrow_mut().tick(dt);
    }

    pub fn phase(&self) -> SessionPhase {
        self.0.borrow().phase()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.0.borrow().outcome()
    }

    pub fn requested_scene(&self) -> Option<String> {
        self.0.borrow().requested_scene().map(str::to_string)
    }

    pub fn visual_alpha(&self) -> f32 {
        self.0.borrow().visual_alpha()
    }

    pub fn music_volume(&self) -> f32 {
        self.0.borrow().music_volume()
    }
}

impl SessionController for SharedSession {
    fn trigger_win(&mut self) {
        self.0.borrow_mut().trigger_win();
    }

    fn trigger_loss(&mut self, reason: &str) {
        self.0.borrow_mut().trigger_loss(reason);
    }
}
