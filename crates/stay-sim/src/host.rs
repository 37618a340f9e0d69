//! Reference host: frame loop for the encounter in the hecs scene.
//!
//! Each frame: encounter tick, trigger events from zone geometry, then fixed
//! physics steps from an accumulator (player hand, encounter motion, body sync),
//! then session fades and animation playback.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, warn};

use stay_core::config::{HostConfig, PlayerHandConfig};
use stay_core::constants::{FIXED_DT, MAX_FIXED_STEPS_PER_FRAME};
use stay_core::enums::SessionPhase;
use stay_core::errors::SetupError;
use stay_core::state::EncounterSnapshot;

use crate::cues::CuePicker;
use crate::engine::{EncounterBuilder, EncounterEngine};
use crate::scene::{Scene, SceneHandle};
use crate::session::{SessionDirector, SharedSession};
use crate::systems::{player_hand, triggers};

/// Everything a frame produced.
#[derive(Debug, Clone, Serialize)]
pub struct HostFrame {
    pub snapshot: EncounterSnapshot,
    pub player: Vec2,
    pub session: SessionPhase,
    pub requested_scene: Option<String>,
    /// Cue ids played this frame, encounter and player hand together.
    pub cues: Vec<String>,
}

pub struct Host {
    scene: SceneHandle,
    session: SharedSession,
    engine: EncounterEngine,
    triggers: triggers::TriggerState,
    player: PlayerHandConfig,
    movement_sounds: CuePicker,
    rng: ChaCha8Rng,
    accumulator: f32,
    time: f32,
}

impl Host {
    /// Build the scene and the encounter against it.
    pub fn new(config: HostConfig) -> Result<Self, SetupError> {
        let scene = SceneHandle::new(Scene::new(&config.player, &config.encounter));
        let own_object = Scene::object_of(scene.borrow().other_entity());
        let session = SharedSession::new(SessionDirector::new(config.session.clone()));

        let mut engine = EncounterBuilder::new(config.encounter.clone())
            .tracker(scene.clone())
            .overlap_query(scene.clone())
            .session(session.clone())
            .presentation(scene.clone())
            .own_object(own_object)
            .build()?;
        engine.init();

        let movement_sounds = CuePicker::new(
            config.player.movement_sounds.clone(),
            config.encounter.cue_pitch_min,
            config.encounter.cue_pitch_max,
        );

        Ok(Self {
            scene,
            session,
            engine,
            triggers: triggers::TriggerState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.encounter.seed.wrapping_add(1)),
            player: config.player,
            movement_sounds,
            accumulator: 0.0,
            time: 0.0,
        })
    }

    pub fn engine(&self) -> &EncounterEngine {
        &self.engine
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Raw movement input for the player hand, applied from the next fixed step.
    pub fn set_input(&mut self, direction: Vec2) {
        self.scene.borrow_mut().set_input(direction);
    }

    /// Run one frame of `frame_dt` seconds.
    pub fn advance(&mut self, frame_dt: f32) -> HostFrame {
        let dt = if frame_dt.is_finite() {
            frame_dt.max(0.0)
        } else {
            0.0
        };
        self.time += dt;

        let snapshot = self.engine.tick(dt);
        self.fire_triggers();

        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator >= FIXED_DT && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.fixed_step();
            self.accumulator -= FIXED_DT;
            steps += 1;
        }
        if self.accumulator >= FIXED_DT {
            warn!(
                dropped = self.accumulator,
                "frame too long; fixed steps dropped"
            );
            self.accumulator = 0.0;
        }

        self.session.tick(dt);
        let (player, cues) = {
            let mut scene = self.scene.borrow_mut();
            scene.advance_animation(dt);
            (scene.player_position(), scene.take_cues())
        };

        HostFrame {
            snapshot,
            player,
            session: self.session.phase(),
            requested_scene: self.session.requested_scene(),
            cues,
        }
    }

    fn fire_triggers(&mut self) {
        let bounds = self.scene.borrow().player_bounds();
        let views = self.engine.zone_views();
        for event in triggers::run(&mut self.triggers, &views, bounds.center, bounds.radius) {
            debug!(?event, "trigger");
            match event {
                triggers::TriggerEvent::Enter(kind) => self.engine.on_zone_enter(kind),
                triggers::TriggerEvent::Exit(kind) => self.engine.on_zone_exit(kind),
            }
        }
    }

    fn fixed_step(&mut self) {
        let mut cues = Vec::new();
        {
            let mut scene = self.scene.borrow_mut();
            player_hand::run(
                scene.world_mut(),
                FIXED_DT,
                self.time,
                &self.player,
                &self.movement_sounds,
                &mut self.rng,
                &mut cues,
            );
            for cue in cues {
                scene.push_cue(cue.id);
            }
        }

        self.engine.fixed_tick(FIXED_DT);
        self.scene
            .borrow_mut()
            .set_other_hand_position(self.engine.position());
    }
}
