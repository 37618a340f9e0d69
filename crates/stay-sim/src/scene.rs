//! Reference scene: a hecs world holding both hands.
//!
//! `SceneHandle` is the shared view the encounter is built against. It answers
//! the tracker, overlap and presentation calls from the world's components.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, trace};

use stay_core::components::{CircleCollider, Layer, MoveInput, PlayerHand, Position, Velocity};
use stay_core::config::{EncounterConfig, PlayerHandConfig};
use stay_core::constants::ANIMATION_CLIP_LENGTH;
use stay_core::types::{box_overlaps_circle, circle_overlaps_circle, ColliderBounds, ObjectRef};

use crate::ports::{OverlapQuery, Presentation, TargetTracker};
use crate::world_setup;

/// Playback of the single animation layer on the other hand.
#[derive(Debug, Clone, Default)]
struct Playback {
    clip: Option<String>,
    /// Seconds into the clip.
    time: f32,
    frozen: bool,
}

pub struct Scene {
    world: World,
    player: Entity,
    other: Entity,
    playback: Playback,
    sort_layer: Option<String>,
    cues: Vec<String>,
}

impl Scene {
    pub fn new(player: &PlayerHandConfig, encounter: &EncounterConfig) -> Self {
        let mut world = World::new();
        let (player, other) = world_setup::setup_scene(&mut world, player, encounter);
        Self {
            world,
            player,
            other,
            playback: Playback::default(),
            sort_layer: None,
            cues: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    pub fn other_entity(&self) -> Entity {
        self.other
    }

    /// Stable identity of an entity for the overlap query service.
    pub fn object_of(entity: Entity) -> ObjectRef {
        ObjectRef(entity.to_bits().get())
    }

    pub fn entity_of(object: ObjectRef) -> Option<Entity> {
        Entity::from_bits(object.0)
    }

    pub fn player_position(&self) -> Vec2 {
        self.position_of(self.player)
    }

    pub fn player_velocity(&self) -> Vec2 {
        self.world
            .get::<&Velocity>(self.player)
            .map(|v| v.0)
            .unwrap_or_default()
    }

    pub fn player_bounds(&self) -> ColliderBounds {
        self.bounds_of(self.player).unwrap_or_default()
    }

    pub fn movement_enabled(&self) -> bool {
        self.world
            .get::<&PlayerHand>(self.player)
            .map(|hand| hand.movement_enabled)
            .unwrap_or(false)
    }

    /// Set this frame's raw movement input for the player hand.
    pub fn set_input(&mut self, direction: Vec2) {
        if let Ok(mut input) = self.world.get::<&mut MoveInput>(self.player) {
            input.0 = direction;
        }
    }

    pub fn other_hand_position(&self) -> Vec2 {
        self.position_of(self.other)
    }

    /// Mirror the encounter's body position onto the other hand entity.
    pub fn set_other_hand_position(&mut self, position: Vec2) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.other) {
            pos.0 = position;
        }
    }

    pub fn cues(&self) -> &[String] {
        &self.cues
    }

    pub fn take_cues(&mut self) -> Vec<String> {
        std::mem::take(&mut self.cues)
    }

    /// Queue a cue played by something other than the encounter (movement sounds).
    pub fn push_cue(&mut self, id: String) {
        self.cues.push(id);
    }

    pub fn sort_layer(&self) -> Option<&str> {
        self.sort_layer.as_deref()
    }

    pub fn animation_clip(&self) -> Option<&str> {
        self.playback.clip.as_deref()
    }

    pub fn animation_frozen(&self) -> bool {
        self.playback.frozen
    }

    /// Advance animation playback by a frame.
    pub fn advance_animation(&mut self, dt: f32) {
        if self.playback.clip.is_some() && !self.playback.frozen {
            self.playback.time += dt.max(0.0);
        }
    }

    fn position_of(&self, entity: Entity) -> Vec2 {
        self.world
            .get::<&Position>(entity)
            .map(|p| p.0)
            .unwrap_or_default()
    }

    fn bounds_of(&self, entity: Entity) -> Option<ColliderBounds> {
        let position = self.world.get::<&Position>(entity).ok()?;
        let collider = self.world.get::<&CircleCollider>(entity).ok()?;
        Some(ColliderBounds::new(
            position.0 + collider.offset,
            collider.radius * collider.scale,
        ))
    }

    fn colliders(&self) -> Vec<(ObjectRef, ColliderBounds)> {
        let mut query = self.world.query::<(&Position, &CircleCollider)>();
        let colliders = query
            .iter()
            .map(|(entity, (position, collider))| {
                (
                    Self::object_of(entity),
                    ColliderBounds::new(
                        position.0 + collider.offset,
                        collider.radius * collider.scale,
                    ),
                )
            })
            .collect();
        colliders
    }
}

/// Shared handle to the scene.
#[derive(Clone)]
pub struct SceneHandle(Rc<RefCell<Scene>>);

impl SceneHandle {
    pub fn new(scene: Scene) -> Self {
        Self(Rc::new(RefCell::new(scene)))
    }

    pub fn borrow(&self) -> Ref<'_, Scene> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Scene> {
        self.0.borrow_mut()
    }
}

impl TargetTracker for SceneHandle {
    fn object(&self) -> ObjectRef {
        Scene::object_of(self.0.borrow().player)
    }

    fn position(&self) -> Vec2 {
        self.0.borrow().player_position()
    }

    fn collider_bounds(&self) -> ColliderBounds {
        self.0.borrow().player_bounds()
    }

    fn velocity(&self) -> Vec2 {
        self.0.borrow().player_velocity()
    }

    fn set_movement_enabled(&mut self, enabled: bool) {
        let scene = self.0.borrow_mut();
        let player = scene.player;
        if let Ok(mut hand) = scene.world.get::<&mut PlayerHand>(player) {
            hand.movement_enabled = enabled;
            if !enabled {
                hand.current_speed = 0.0;
            }
        }
        if !enabled {
            if let Ok(mut velocity) = scene.world.get::<&mut Velocity>(player) {
                velocity.0 = Vec2::ZERO;
            }
        }
        debug!(enabled, "player hand movement toggled");
    }
}

impl OverlapQuery for SceneHandle {
    fn overlaps_circle(&self, center: Vec2, radius: f32, exclude: &[ObjectRef]) -> Vec<ObjectRef> {
        self.0
            .borrow()
            .colliders()
            .into_iter()
            .filter(|(object, _)| !exclude.contains(object))
            .filter(|(_, bounds)| circle_overlaps_circle(center, radius, bounds.center, bounds.radius))
            .map(|(object, _)| object)
            .collect()
    }

    fn overlaps_box(&self, center: Vec2, size: Vec2) -> Vec<ObjectRef> {
        self.0
            .borrow()
            .colliders()
            .into_iter()
            .filter(|(_, bounds)| box_overlaps_circle(center, size, bounds.center, bounds.radius))
            .map(|(object, _)| object)
            .collect()
    }

    fn layer_of(&self, object: ObjectRef) -> Option<u8> {
        let entity = Scene::entity_of(object)?;
        let scene = self.0.borrow();
        let layer = scene.world.get::<&Layer>(entity).ok()?;
        Some(layer.0)
    }
}

impl Presentation for SceneHandle {
    fn play_cue(&mut self, id: &str) {
        trace!(cue = id, "cue played");
        self.0.borrow_mut().cues.push(id.to_string());
    }

    fn set_animation_state(&mut self, name: &str, normalized_time: f32) {
        let mut scene = self.0.borrow_mut();
        scene.playback = Playback {
            clip: Some(name.to_string()),
            time: normalized_time.max(0.0) * ANIMATION_CLIP_LENGTH,
            frozen: normalized_time >= 1.0,
        };
    }

    fn set_sort_layer(&mut self, name: &str) {
        self.0.borrow_mut().sort_layer = Some(name.to_string());
    }

    fn animation_finished(&self, name: &str) -> bool {
        let scene = self.0.borrow();
        scene.playback.clip.as_deref() == Some(name) && scene.playback.time >= ANIMATION_CLIP_LENGTH
    }
}
