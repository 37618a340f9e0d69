//! Default tuning parameters for the encounter and its reference host.
//!
//! Every field of `EncounterConfig` falls back to one of these values.

// --- Proximity radii ---

/// Starting radius of the Personal zone.
pub const PERSONAL_RADIUS: f32 = 6.0;

/// Starting radius of the Recoil zone.
pub const RECOIL_RADIUS: f32 = 3.0;

/// Side length of the Cover box. Also the floor every shrinking zone converges to.
pub const COVER_SIZE: f32 = 1.0;

/// Lower bound of the per-encounter shrink rate draw (units per second).
pub const SHRINK_RATE_MIN: f32 = 0.15;

/// Upper bound of the per-encounter shrink rate draw (units per second).
pub const SHRINK_RATE_MAX: f32 = 0.25;

// --- Vertical offsets ---

pub const RECOIL_VERTICAL_OFFSET: f32 = 0.0;
pub const COVER_VERTICAL_OFFSET: f32 = 0.0;

// --- Motion ---

/// Base push speed multiplier applied to the radius overlap.
pub const PUSH_SPEED: f32 = 5.0;

/// Speed of the drift back to the origin (units per second).
pub const RETURN_SPEED: f32 = 2.0;

/// Push speed multiplier while a recoil is active.
pub const RECOIL_PUSH_MULTIPLIER: f32 = 2.0;

/// Smooth-damp time constant (seconds).
pub const MOVEMENT_SMOOTHING: f32 = 0.1;

/// Horizontal glide speed of the autonomous approach (units per second).
pub const APPROACH_SPEED: f32 = 1.5;

/// Gap below which the approach counts as having reached the target.
pub const REACH_THRESHOLD: f32 = 0.05;

/// Unscaled width of the other hand's body.
pub const HAND_WIDTH: f32 = 1.0;

/// Horizontal scale of the other hand's body.
pub const HAND_SCALE: f32 = 1.0;

/// Left and right world edges of the visible screen.
pub const SCREEN_MIN_X: f32 = -9.0;
pub const SCREEN_MAX_X: f32 = 9.0;

/// Margin kept between the body and the screen edges.
pub const SCREEN_EDGE_MARGIN: f32 = 0.25;

// --- Timing ---

/// Delay between the end of shrinking and the Movement zone's creation (seconds).
pub const MOVEMENT_DELAY: f32 = 2.0;

/// Interval between polling passes (seconds).
pub const POLL_INTERVAL: f32 = 0.1;

/// Covered time after which the tracked hand stops accepting input (seconds).
pub const COVER_STOP_THRESHOLD: f32 = 1.0;

/// Covered time after which the encounter is won (seconds).
pub const COVER_WIN_THRESHOLD: f32 = 3.0;

/// Delay between a recoil and the loss latch (seconds).
pub const RECOIL_LEAD_TIME: f32 = 0.3;

/// Duration of the loss animation before the loss is signalled (seconds).
pub const LOSS_ANIMATION_DURATION: f32 = 2.0;

// --- Presentation identifiers ---

pub const RECOIL_ANIMATION: &str = "Recoil";
pub const DEFAULT_SORT_LAYER: &str = "Default";
pub const COVERING_SORT_LAYER: &str = "Covering";
pub const LOSS_REASON_RECOIL: &str = "recoil";

// --- Reference host ---

/// Fixed physics step rate (Hz).
pub const FIXED_RATE: u32 = 50;

/// Seconds per fixed step.
pub const FIXED_DT: f32 = 1.0 / FIXED_RATE as f32;

/// Upper bound on fixed steps run for one frame, so a long stall does not spiral.
pub const MAX_FIXED_STEPS_PER_FRAME: u32 = 8;

/// Player hand top speed (units per second).
pub const PLAYER_SPEED: f32 = 20.0;

/// Player hand velocity smoothing factor (per 60 Hz frame).
pub const PLAYER_SMOOTHING: f32 = 0.1;

/// Player hand collider radius.
pub const PLAYER_COLLIDER_RADIUS: f32 = 0.5;

/// Highest y the player hand may reach.
pub const PLAYER_MAX_Y: f32 = 4.5;

/// Minimum time between two movement sound cues (seconds).
pub const MOVEMENT_SOUND_COOLDOWN: f32 = 0.1;

/// Speed below which no movement sound plays.
pub const MIN_SPEED_FOR_SOUND: f32 = 1.0;

/// Minimum displacement between frames that counts as moving.
pub const MOVEMENT_SOUND_MIN_DISPLACEMENT: f32 = 0.01;

/// Collision layer assigned to the player hand.
pub const PLAYER_LAYER: u8 = 8;

/// Collision layer assigned to the other hand.
pub const OTHER_HAND_LAYER: u8 = 9;

/// Length of one animation clip in the reference scene (seconds).
pub const ANIMATION_CLIP_LENGTH: f32 = 0.5;

// --- Session ---

pub const FADE_DURATION: f32 = 2.0;
pub const MUSIC_FADE_TIME: f32 = 2.0;
pub const MUSIC_MAX_VOLUME: f32 = 0.25;
pub const WIN_SCENE: &str = "Win";
pub const LOSE_SCENE: &str = "Lose";
