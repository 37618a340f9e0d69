//! Entity spawn factories for the reference scene.
//!
//! Creates the player hand and the other hand with their component bundles.

use glam::Vec2;
use hecs::{Entity, World};

use stay_core::components::*;
use stay_core::config::{EncounterConfig, PlayerHandConfig};
use stay_core::constants::{OTHER_HAND_LAYER, PLAYER_LAYER};

/// Set up the scene: player hand on the right, other hand at its origin.
pub fn setup_scene(
    world: &mut World,
    player: &PlayerHandConfig,
    encounter: &EncounterConfig,
) -> (Entity, Entity) {
    let player_hand = spawn_player_hand(world, player);
    let other_hand = spawn_other_hand(world, encounter);
    (player_hand, other_hand)
}

/// Spawn the player-controlled hand at its start position, at rest.
pub fn spawn_player_hand(world: &mut World, config: &PlayerHandConfig) -> Entity {
    world.spawn((
        PlayerHand {
            speed: config.speed,
            smoothing: config.smoothing,
            max_y: config.max_y,
            movement_enabled: true,
            current_speed: 0.0,
            last_sound_position: config.start,
            last_sound_time: f32::NEG_INFINITY,
        },
        Position(config.start),
        Velocity(Vec2::ZERO),
        MoveInput(Vec2::ZERO),
        CircleCollider {
            radius: config.collider_radius,
            offset: Vec2::ZERO,
            scale: 1.0,
        },
        Layer(PLAYER_LAYER),
    ))
}

/// Spawn the other hand at the encounter origin. Its body collider is half its
/// scaled width, so zone queries must exclude it.
pub fn spawn_other_hand(world: &mut World, config: &EncounterConfig) -> Entity {
    world.spawn((
        OtherHand,
        Position(config.origin),
        Velocity(Vec2::ZERO),
        CircleCollider {
            radius: config.hand_width * 0.5,
            offset: Vec2::ZERO,
            scale: config.hand_scale,
        },
        Layer(OTHER_HAND_LAYER),
    ))
}
