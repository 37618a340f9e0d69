//! Flat encounter configuration.
//!
//! Every parameter is a named number or string supplied at construction.
//! Missing JSON fields fall back to the defaults in `constants`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ConfigError;
use crate::types::ScreenBounds;

/// Configuration for one encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    // --- Proximity radii ---
    pub personal_radius: f32,
    pub recoil_radius: f32,
    /// Cover box side length; also the shrink floor.
    pub cover_size: f32,
    pub shrink_rate_min: f32,
    pub shrink_rate_max: f32,
    /// Movement zone shrink rate. `None` reuses the drawn Personal rate.
    pub movement_shrink_rate: Option<f32>,

    // --- Offsets ---
    pub recoil_vertical_offset: f32,
    pub cover_vertical_offset: f32,

    // --- Motion ---
    /// Spawn position of the other hand; fixed for the encounter's lifetime.
    pub origin: Vec2,
    pub push_speed: f32,
    pub return_speed: f32,
    pub recoil_push_multiplier: f32,
    pub movement_smoothing: f32,
    pub approach_speed: f32,
    pub reach_threshold: f32,
    pub hand_width: f32,
    pub hand_scale: f32,
    pub screen_min_x: f32,
    pub screen_max_x: f32,
    pub screen_edge_margin: f32,

    // --- Timing ---
    pub movement_delay: f32,
    pub polling_enabled: bool,
    pub poll_interval: f32,
    pub cover_stop_threshold: f32,
    pub cover_win_threshold: f32,
    pub recoil_lead_time: f32,
    pub loss_animation_duration: f32,

    // --- Presentation ---
    pub recoil_animation: String,
    /// Recoil sound cues; one is picked at random. Empty means silent.
    pub recoil_sounds: Vec<String>,
    pub cue_pitch_min: f32,
    pub cue_pitch_max: f32,
    pub default_sort_layer: String,
    pub covering_sort_layer: String,
    pub loss_reason: String,

    // --- Identity ---
    /// Layers counted as the tracked hand besides the tracked object itself. 0 disables.
    pub target_layer_mask: u32,

    /// RNG seed. Same seed = same encounter.
    pub seed: u64,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            personal_radius: PERSONAL_RADIUS,
            recoil_radius: RECOIL_RADIUS,
            cover_size: COVER_SIZE,
            shrink_rate_min: SHRINK_RATE_MIN,
            shrink_rate_max: SHRINK_RATE_MAX,
            movement_shrink_rate: None,
            recoil_vertical_offset: RECOIL_VERTICAL_OFFSET,
            cover_vertical_offset: COVER_VERTICAL_OFFSET,
            origin: Vec2::new(-3.0, 0.0),
            push_speed: PUSH_SPEED,
            return_speed: RETURN_SPEED,
            recoil_push_multiplier: RECOIL_PUSH_MULTIPLIER,
            movement_smoothing: MOVEMENT_SMOOTHING,
            approach_speed: APPROACH_SPEED,
            reach_threshold: REACH_THRESHOLD,
            hand_width: HAND_WIDTH,
            hand_scale: HAND_SCALE,
            screen_min_x: SCREEN_MIN_X,
            screen_max_x: SCREEN_MAX_X,
            screen_edge_margin: SCREEN_EDGE_MARGIN,
            movement_delay: MOVEMENT_DELAY,
            polling_enabled: true,
            poll_interval: POLL_INTERVAL,
            cover_stop_threshold: COVER_STOP_THRESHOLD,
            cover_win_threshold: COVER_WIN_THRESHOLD,
            recoil_lead_time: RECOIL_LEAD_TIME,
            loss_animation_duration: LOSS_ANIMATION_DURATION,
            recoil_animation: RECOIL_ANIMATION.to_string(),
            recoil_sounds: Vec::new(),
            cue_pitch_min: 1.0,
            cue_pitch_max: 1.0,
            default_sort_layer: DEFAULT_SORT_LAYER.to_string(),
            covering_sort_layer: COVERING_SORT_LAYER.to_string(),
            loss_reason: LOSS_REASON_RECOIL.to_string(),
            target_layer_mask: 0,
            seed: 42,
        }
    }
}

impl EncounterConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EncounterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Half of the body's scaled width.
    pub fn half_width(&self) -> f32 {
        self.hand_width * 0.5 * self.hand_scale
    }

    pub fn screen_bounds(&self) -> ScreenBounds {
        ScreenBounds {
            min_x: self.screen_min_x,
            max_x: self.screen_max_x,
            margin: self.screen_edge_margin,
        }
    }

    /// Check every parameter. Geometry must be positive and nested, timings non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("personal_radius", self.personal_radius)?;
        positive("recoil_radius", self.recoil_radius)?;
        positive("cover_size", self.cover_size)?;
        positive("shrink_rate_min", self.shrink_rate_min)?;
        positive("shrink_rate_max", self.shrink_rate_max)?;
        if self.shrink_rate_min > self.shrink_rate_max {
            return Err(ConfigError::EmptyRange {
                name: "shrink_rate",
                min: self.shrink_rate_min,
                max: self.shrink_rate_max,
            });
        }
        if let Some(rate) = self.movement_shrink_rate {
            positive("movement_shrink_rate", rate)?;
        }
        if self.cover_size >= self.recoil_radius {
            return Err(ConfigError::ZoneOrder {
                inner: "cover_size",
                inner_size: self.cover_size,
                outer: "recoil_radius",
                outer_size: self.recoil_radius,
            });
        }
        if self.cover_size >= self.personal_radius {
            return Err(ConfigError::ZoneOrder {
                inner: "cover_size",
                inner_size: self.cover_size,
                outer: "personal_radius",
                outer_size: self.personal_radius,
            });
        }

        finite("recoil_vertical_offset", self.recoil_vertical_offset)?;
        finite("cover_vertical_offset", self.cover_vertical_offset)?;
        finite("origin.x", self.origin.x)?;
        finite("origin.y", self.origin.y)?;

        non_negative("push_speed", self.push_speed)?;
        positive("return_speed", self.return_speed)?;
        non_negative("recoil_push_multiplier", self.recoil_push_multiplier)?;
        positive("movement_smoothing", self.movement_smoothing)?;
        non_negative("approach_speed", self.approach_speed)?;
        non_negative("reach_threshold", self.reach_threshold)?;
        positive("hand_width", self.hand_width)?;
        positive("hand_scale", self.hand_scale)?;
        non_negative("screen_edge_margin", self.screen_edge_margin)?;
        finite("screen_min_x", self.screen_min_x)?;
        finite("screen_max_x", self.screen_max_x)?;
        let usable = self.screen_max_x - self.screen_min_x - 2.0 * self.screen_edge_margin;
        if usable < 2.0 * self.half_width() {
            return Err(ConfigError::ScreenBounds {
                min_x: self.screen_min_x,
                max_x: self.screen_max_x,
                margin: self.screen_edge_margin,
            });
        }

        non_negative("movement_delay", self.movement_delay)?;
        positive("poll_interval", self.poll_interval)?;
        non_negative("cover_stop_threshold", self.cover_stop_threshold)?;
        positive("cover_win_threshold", self.cover_win_threshold)?;
        if self.cover_stop_threshold > self.cover_win_threshold {
            return Err(ConfigError::CoverThresholds {
                stop: self.cover_stop_threshold,
                win: self.cover_win_threshold,
            });
        }
        non_negative("recoil_lead_time", self.recoil_lead_time)?;
        non_negative("loss_animation_duration", self.loss_animation_duration)?;
        positive("cue_pitch_min", self.cue_pitch_min)?;
        positive("cue_pitch_max", self.cue_pitch_max)?;
        if self.cue_pitch_min > self.cue_pitch_max {
            return Err(ConfigError::EmptyRange {
                name: "cue_pitch",
                min: self.cue_pitch_min,
                max: self.cue_pitch_max,
            });
        }
        Ok(())
    }
}

/// Reference player hand tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerHandConfig {
    pub start: Vec2,
    pub speed: f32,
    pub smoothing: f32,
    pub collider_radius: f32,
    pub max_y: f32,
    pub movement_sounds: Vec<String>,
    pub sound_cooldown: f32,
    pub min_speed_for_sound: f32,
}

impl Default for PlayerHandConfig {
    fn default() -> Self {
        Self {
            start: Vec2::new(6.0, 0.0),
            speed: PLAYER_SPEED,
            smoothing: PLAYER_SMOOTHING,
            collider_radius: PLAYER_COLLIDER_RADIUS,
            max_y: PLAYER_MAX_Y,
            movement_sounds: Vec::new(),
            sound_cooldown: MOVEMENT_SOUND_COOLDOWN,
            min_speed_for_sound: MIN_SPEED_FOR_SOUND,
        }
    }
}

/// Reference session director tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub fade_duration: f32,
    pub music_fade_time: f32,
    pub music_max_volume: f32,
    pub win_scene: String,
    pub lose_scene: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fade_duration: FADE_DURATION,
            music_fade_time: MUSIC_FADE_TIME,
            music_max_volume: MUSIC_MAX_VOLUME,
            win_scene: WIN_SCENE.to_string(),
            lose_scene: LOSE_SCENE.to_string(),
        }
    }
}

/// Everything the reference host needs, loadable from one JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub encounter: EncounterConfig,
    pub player: PlayerHandConfig,
    pub session: SessionConfig,
}

impl HostConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: HostConfig = serde_json::from_str(json)?;
        config.encounter.validate()?;
        positive("player.collider_radius", config.player.collider_radius)?;
        non_negative("player.speed", config.player.speed)?;
        non_negative("session.fade_duration", config.session.fade_duration)?;
        non_negative("session.music_fade_time", config.session.music_fade_time)?;
        Ok(config)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}
