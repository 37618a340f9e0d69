//! Encounter engine: the other hand's proximity encounter.
//!
//! `EncounterEngine` owns the zone table, the overlap detector, the shrink
//! engine, the motion model and the resolution state, and drives them from two
//! clocks: `tick(dt)` once per frame and `fixed_tick(dt)` once per physics step.
//! Collaborators are injected through `EncounterBuilder`. Completely headless,
//! so the whole encounter is testable with mock collaborators.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use stay_core::config::EncounterConfig;
use stay_core::enums::{MotionMode, ShrinkPhase, ZoneKind};
use stay_core::errors::SetupError;
use stay_core::events::EncounterEvent;
use stay_core::state::{EncounterSnapshot, ZoneView};
use stay_core::types::{ObjectRef, ZoneShape};

use crate::cover::CoverController;
use crate::motion::{MotionInputs, MotionModel};
use crate::overlap::OverlapDetector;
use crate::ports::{OverlapQuery, Presentation, SessionController, TargetTracker};
use crate::recoil::RecoilSequence;
use crate::shrink::{self, ShrinkEngine};
use crate::timers::{TaskAction, TaskList};
use crate::tracker::TargetSample;
use crate::zones::ZoneSet;

/// Collects collaborators and configuration for an `EncounterEngine`.
pub struct EncounterBuilder {
    config: EncounterConfig,
    tracker: Option<Box<dyn TargetTracker>>,
    overlap: Option<Box<dyn OverlapQuery>>,
    session: Option<Box<dyn SessionController>>,
    presentation: Option<Box<dyn Presentation>>,
    own_object: Option<ObjectRef>,
}

impl EncounterBuilder {
    pub fn new(config: EncounterConfig) -> Self {
        Self {
            config,
            tracker: None,
            overlap: None,
            session: None,
            presentation: None,
            own_object: None,
        }
    }

    pub fn tracker(mut self, tracker: impl TargetTracker + 'static) -> Self {
        self.tracker = Some(Box::new(tracker));
        self
    }

    pub fn overlap_query(mut self, query: impl OverlapQuery + 'static) -> Self {
        self.overlap = Some(Box::new(query));
        self
    }

    pub fn session(mut self, session: impl SessionController + 'static) -> Self {
        self.session = Some(Box::new(session));
        self
    }

    pub fn presentation(mut self, presentation: impl Presentation + 'static) -> Self {
        self.presentation = Some(Box::new(presentation));
        self
    }

    /// The other hand's own collider, excluded from every overlap query.
    pub fn own_object(mut self, object: ObjectRef) -> Self {
        self.own_object = Some(object);
        self
    }

    /// Validate the configuration and check every required collaborator is present.
    pub fn build(self) -> Result<EncounterEngine, SetupError> {
        self.config.validate()?;
        let tracker = self
            .tracker
            .ok_or(SetupError::MissingCollaborator("target tracker"))?;
        let overlap = self
            .overlap
            .ok_or(SetupError::MissingCollaborator("overlap query"))?;
        let session = self
            .session
            .ok_or(SetupError::MissingCollaborator("session controller"))?;
        if self.presentation.is_none() {
            debug!("no presentation attached; cues and animations are skipped");
        }

        let config = self.config;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let rate = shrink::draw_rate(&config, &mut rng);

        Ok(EncounterEngine {
            zones: ZoneSet::new(),
            detector: OverlapDetector::new(&config, self.own_object),
            shrink: ShrinkEngine::new(&config, rate),
            motion: MotionModel::new(&config),
            cover: CoverController::new(&config),
            recoil: RecoilSequence::new(&config),
            tasks: TaskList::new(),
            rng,
            tracker,
            overlap,
            session,
            presentation: self.presentation,
            time: 0.0,
            initialized: false,
            front_layer: false,
            events: Vec::new(),
            config,
        })
    }
}

/// The encounter engine. Owns all encounter state.
pub struct EncounterEngine {
    config: EncounterConfig,
    zones: ZoneSet,
    detector: OverlapDetector,
    shrink: ShrinkEngine,
    motion: MotionModel,
    cover: CoverController,
    recoil: RecoilSequence,
    tasks: TaskList,
    rng: ChaCha8Rng,

    tracker: Box<dyn TargetTracker>,
    overlap: Box<dyn OverlapQuery>,
    session: Box<dyn SessionController>,
    presentation: Option<Box<dyn Presentation>>,

    /// Accumulated frame time (seconds).
    time: f32,
    initialized: bool,
    /// Whether the covering sort layer is applied.
    front_layer: bool,
    events: Vec<EncounterEvent>,
}

impl EncounterEngine {
    /// Create Personal, Recoil and Cover at their configured sizes and arm the
    /// shrink engine. Called automatically by the first tick if the host skips it.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let config = &self.config;
        let layout = [
            (
                ZoneKind::Personal,
                ZoneShape::Circle {
                    radius: config.personal_radius,
                },
                Vec2::ZERO,
            ),
            (
                ZoneKind::Recoil,
                ZoneShape::Circle {
                    radius: config.recoil_radius,
                },
                Vec2::new(0.0, config.recoil_vertical_offset),
            ),
            (
                ZoneKind::Cover,
                ZoneShape::Box {
                    side: config.cover_size,
                },
                Vec2::new(0.0, config.cover_vertical_offset),
            ),
        ];
        for (kind, shape, offset) in layout {
            self.zones.create_zone(kind, shape, offset);
            self.events.push(EncounterEvent::ZoneEnabled {
                zone: kind,
                size: shape.size(),
            });
        }
        self.front_layer = false;
        self.apply_sort_layer();

        info!(
            rate = self.shrink.rate(),
            origin = ?self.motion.origin(),
            "encounter initialized"
        );
    }

    /// Event channel: the tracked hand entered `kind`. Recoil entry starts the
    /// recoil sequence. Ignored once the loss is latched.
    pub fn on_zone_enter(&mut self, kind: ZoneKind) {
        if self.recoil.is_latched() {
            return;
        }
        self.detector.on_enter(&mut self.zones, kind);
        if kind == ZoneKind::Recoil && self.zones.is_occupied(ZoneKind::Recoil) {
            self.trigger_recoil();
        }
    }

    /// Event channel: the tracked hand left `kind`.
    pub fn on_zone_exit(&mut self, kind: ZoneKind) {
        if self.recoil.is_latched() {
            return;
        }
        self.detector.on_exit(&mut self.zones, kind);
    }

    /// Advance one frame and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> EncounterSnapshot {
        let dt = clamp_dt(dt);
        self.init();
        self.time += dt;

        if !self.recoil.is_latched() {
            self.shrink.tick(dt, &mut self.zones, &mut self.events);
            // Cover first: a hand arriving in cover suppresses Recoil before the poll sees it.
            self.check_cover(dt);
            self.poll(dt);
            self.check_movement_contact();
            self.recoil
                .freeze_finished_animation(self.presentation.as_deref_mut());
        }
        self.run_tasks(dt);

        self.snapshot()
    }

    /// Advance one physics step of the motion model.
    pub fn fixed_tick(&mut self, dt: f32) -> MotionMode {
        let dt = clamp_dt(dt);
        self.init();

        let target = TargetSample::read(&*self.tracker);
        let recoil_active = self.recoil.is_active();
        let inputs = MotionInputs {
            recoil_push: if recoil_active && self.zones.is_occupied(ZoneKind::Recoil) {
                self.zones.size(ZoneKind::Recoil)
            } else {
                None
            },
            personal_push: if self.zones.is_occupied(ZoneKind::Personal) {
                self.zones.size(ZoneKind::Personal)
            } else {
                None
            },
            approach: self.zones.is_enabled(ZoneKind::Movement),
            recoil_active,
        };

        let mode = self.motion.step(dt, &inputs, &target);
        self.set_front_layer(matches!(
            mode,
            MotionMode::Approaching | MotionMode::Holding
        ));
        mode
    }

    /// Current snapshot without advancing. Drains pending events.
    pub fn snapshot(&mut self) -> EncounterSnapshot {
        let position = self.motion.position();
        EncounterSnapshot {
            time: self.time,
            phase: self.shrink.phase(),
            motion: self.motion.mode(),
            position,
            zones: self.zones.views(position),
            hold_time: self.cover.hold_time(),
            recoil_active: self.recoil.is_active(),
            loss_latched: self.recoil.is_latched(),
            wins: self.cover.wins(),
            events: std::mem::take(&mut self.events),
        }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position()
    }

    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    /// Views of every existing zone at the current body position.
    pub fn zone_views(&self) -> Vec<ZoneView> {
        self.zones.views(self.motion.position())
    }

    pub fn phase(&self) -> ShrinkPhase {
        self.shrink.phase()
    }

    /// The per-encounter shrink rate drawn at build time.
    pub fn shrink_rate(&self) -> f32 {
        self.shrink.rate()
    }

    pub fn hold_time(&self) -> f32 {
        self.cover.hold_time()
    }

    pub fn wins(&self) -> u32 {
        self.cover.wins()
    }

    pub fn is_recoil_active(&self) -> bool {
        self.recoil.is_active()
    }

    pub fn is_loss_latched(&self) -> bool {
        self.recoil.is_latched()
    }

    pub fn loss_signalled(&self) -> bool {
        self.recoil.loss_signalled()
    }

    /// Interval poll of every enabled zone except Cover. A Recoil hit starts the recoil.
    fn poll(&mut self, dt: f32) {
        let body = self.motion.position();
        let target = self.tracker.object();
        let Some(report) = self.detector.tick(
            dt,
            &mut self.zones,
            body,
            &*self.overlap,
            target,
            ZoneKind::Cover,
        ) else {
            return;
        };
        if report.hit(ZoneKind::Recoil) {
            self.trigger_recoil();
        }
    }

    /// Movement contact is checked every frame, like Cover. A hand holding
    /// cover does not consume the zone; contact counts once the streak ends.
    fn check_movement_contact(&mut self) {
        if self.cover.is_covering() || !self.zones.is_enabled(ZoneKind::Movement) {
            return;
        }
        let body = self.motion.position();
        let target = self.tracker.object();
        if self.detector.zone_contains_target(
            &self.zones,
            ZoneKind::Movement,
            body,
            &*self.overlap,
            target,
        ) {
            self.consume_movement_zone();
        }
    }

    /// Cover is polled every frame, independent of the poll interval.
    fn check_cover(&mut self, dt: f32) {
        let body = self.motion.position();
        let target = self.tracker.object();
        let covered = self.zones.is_enabled(ZoneKind::Cover)
            && self.detector.zone_contains_target(
                &self.zones,
                ZoneKind::Cover,
                body,
                &*self.overlap,
                target,
            );
        self.cover.tick(
            dt,
            covered,
            &mut self.zones,
            &mut self.shrink,
            &mut *self.tracker,
            &mut *self.session,
            &mut self.events,
        );
    }

    fn trigger_recoil(&mut self) {
        self.recoil.trigger(
            &mut self.tasks,
            self.presentation.as_deref_mut(),
            &mut self.rng,
            &mut self.events,
        );
    }

    /// The tracked hand touched the Movement zone: glide home and re-arm.
    fn consume_movement_zone(&mut self) {
        if !self.zones.destroy_zone(ZoneKind::Movement) {
            return;
        }
        self.events.push(EncounterEvent::MovementZoneConsumed);
        info!(position = ?self.motion.position(), "movement zone consumed");

        self.motion.begin_return_glide();
        for kind in [ZoneKind::Personal, ZoneKind::Recoil] {
            self.zones.restore(kind);
            if self.zones.set_enabled(kind, true) {
                self.events.push(EncounterEvent::ZoneEnabled {
                    zone: kind,
                    size: self.zones.size(kind).unwrap_or_default(),
                });
            }
        }
        self.shrink.reset(&mut self.events);
        self.set_front_layer(false);
    }

    fn run_tasks(&mut self, dt: f32) {
        for action in self.tasks.advance(dt) {
            match action {
                TaskAction::LatchLoss => {
                    if self
                        .recoil
                        .latch_loss(&mut self.zones, &mut self.tasks, &mut self.events)
                    {
                        self.motion.freeze();
                    }
                }
                TaskAction::SignalLoss => {
                    self.recoil
                        .signal_loss(&mut *self.session, &mut self.events);
                }
            }
        }
    }

    fn set_front_layer(&mut self, front: bool) {
        if self.front_layer == front {
            return;
        }
        self.front_layer = front;
        self.apply_sort_layer();
    }

    fn apply_sort_layer(&mut self) {
        let name = if self.front_layer {
            &self.config.covering_sort_layer
        } else {
            &self.config.default_sort_layer
        };
        if let Some(presentation) = self.presentation.as_deref_mut() {
            presentation.set_sort_layer(name);
        }
        debug!(layer = %name, "sort layer changed");
    }
}

/// Negative and non-finite frame times count as zero.
fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}
