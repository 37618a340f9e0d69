//! ECS components for the reference scene host.
//!
//! Components are plain data structs with no methods.
//! Scene logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// World velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Circular collider attached to an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleCollider {
    pub radius: f32,
    /// Offset from the entity's position.
    pub offset: Vec2,
    /// Uniform world scale applied to the radius.
    pub scale: f32,
}

/// Collision layer index (0..32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer(pub u8);

/// Raw movement input for this frame (unnormalized).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveInput(pub Vec2);

/// Player hand controller state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHand {
    pub speed: f32,
    pub smoothing: f32,
    /// Highest y the hand may reach.
    pub max_y: f32,
    pub movement_enabled: bool,
    /// Magnitude of the current velocity.
    pub current_speed: f32,
    /// Position at the last movement sound evaluation.
    pub last_sound_position: Vec2,
    /// Scene time of the last movement sound.
    pub last_sound_time: f32,
}

/// Marks the reactive other hand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OtherHand;
