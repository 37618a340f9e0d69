//! Motion model for the other hand, run on the fixed physics step.
//!
//! Each step picks one rule by priority (recoil push, return glide, approach,
//! personal push, drift home). Pushes and the drift home smooth-damp toward a
//! target position; the approach and the glide move the body directly. While
//! pushing or approaching, the body's right edge never crosses the tracked
//! hand's left bound. The body never leaves the screen margin.

use glam::Vec2;
use tracing::debug;

use stay_core::config::EncounterConfig;
use stay_core::enums::MotionMode;
use stay_core::types::ScreenBounds;

use crate::kinematics::{move_towards, sign, smooth_damp};
use crate::tracker::TargetSample;

/// What the zones say about this step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionInputs {
    /// Recoil radius, when a recoil is active and Recoil is occupied.
    pub recoil_push: Option<f32>,
    /// Personal radius, when Personal is enabled and occupied.
    pub personal_push: Option<f32>,
    /// Movement zone exists, is enabled and untouched.
    pub approach: bool,
    /// A recoil is in progress (speeds up any push).
    pub recoil_active: bool,
}

/// Interpolation back to the origin after the Movement zone is consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ReturnGlide {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
}

#[derive(Debug, Clone)]
pub struct MotionModel {
    origin: Vec2,
    position: Vec2,
    target_position: Vec2,
    velocity: Vec2,
    mode: MotionMode,
    reached: bool,
    glide: Option<ReturnGlide>,
    push_speed: f32,
    return_speed: f32,
    recoil_push_multiplier: f32,
    smoothing: f32,
    approach_speed: f32,
    reach_threshold: f32,
    half_width: f32,
    screen: ScreenBounds,
}

impl MotionModel {
    pub fn new(config: &EncounterConfig) -> Self {
        let origin = config.origin;
        Self {
            origin,
            position: origin,
            target_position: origin,
            velocity: Vec2::ZERO,
            mode: MotionMode::Returning,
            reached: false,
            glide: None,
            push_speed: config.push_speed,
            return_speed: config.return_speed,
            recoil_push_multiplier: config.recoil_push_multiplier,
            smoothing: config.movement_smoothing,
            approach_speed: config.approach_speed,
            reach_threshold: config.reach_threshold,
            half_width: config.half_width(),
            screen: config.screen_bounds(),
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target_position(&self) -> Vec2 {
        self.target_position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// The approach touched the tracked hand and is holding.
    pub fn approach_reached(&self) -> bool {
        self.reached
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn right_edge(&self) -> f32 {
        self.position.x + self.half_width
    }

    /// Start the interpolation home. Duration is distance / return speed.
    pub fn begin_return_glide(&mut self) {
        let distance = self.position.distance(self.origin);
        let duration = distance / self.return_speed;
        self.velocity = Vec2::ZERO;
        self.reached = false;
        if duration <= 0.0 {
            self.position = self.origin;
            self.target_position = self.origin;
            self.glide = None;
            return;
        }
        debug!(distance, duration, "return glide started");
        self.glide = Some(ReturnGlide {
            from: self.position,
            to: self.origin,
            elapsed: 0.0,
            duration,
        });
    }

    /// Stop all motion for good.
    pub fn freeze(&mut self) {
        self.mode = MotionMode::Frozen;
        self.velocity = Vec2::ZERO;
        self.target_position = self.position;
        self.glide = None;
    }

    /// Advance one fixed step.
    pub fn step(&mut self, dt: f32, inputs: &MotionInputs, target: &TargetSample) -> MotionMode {
        if self.mode == MotionMode::Frozen {
            return self.mode;
        }
        let dt = dt.max(0.0);

        if !inputs.approach {
            self.reached = false;
        }

        let mode = if let Some(radius) = inputs.recoil_push {
            self.glide = None;
            self.push(dt, radius, self.push_speed * self.recoil_push_multiplier, target);
            MotionMode::Recoiling
        } else if self.glide.is_some() {
            self.advance_glide(dt);
            self.mode = MotionMode::Gliding;
            return self.mode;
        } else if inputs.approach {
            self.mode = self.approach(dt, target);
            return self.mode;
        } else if let Some(radius) = inputs.personal_push {
            let speed = if inputs.recoil_active {
                self.push_speed * self.recoil_push_multiplier
            } else {
                self.push_speed
            };
            self.push(dt, radius, speed, target);
            MotionMode::Pushing
        } else {
            let x = move_towards(self.position.x, self.origin.x, self.return_speed * dt);
            self.target_position.x = self.screen.clamp_center(x, self.half_width);
            MotionMode::Returning
        };
        self.target_position.y = self.origin.y;

        let mut next = smooth_damp(
            self.position,
            self.target_position,
            &mut self.velocity,
            self.smoothing,
            dt,
        );
        if matches!(mode, MotionMode::Pushing | MotionMode::Recoiling) {
            next.x = self.clamp_to_target(next.x, target);
        }
        next.x = self.screen.clamp_center(next.x, self.half_width);
        self.position = next;
        self.mode = mode;
        mode
    }

    fn push(&mut self, dt: f32, radius: f32, speed: f32, target: &TargetSample) {
        let left_bound = target.left_bound();
        let gap = (left_bound - self.right_edge()).abs();
        if gap >= radius {
            return;
        }
        let direction = sign(self.position.x - target.position.x);
        let desired = self.position.x + direction * (radius - gap) * speed * dt;
        let desired = self.clamp_to_target(desired, target);
        self.target_position.x = desired;

        // Lead a hand moving toward us so the step does not tunnel through it.
        let adjusted = desired + target.velocity.x * dt;
        if !self.crosses_target(adjusted, target) {
            self.target_position.x = adjusted;
        }
    }

    /// Glide straight at the tracked hand at `approach_speed`, unsmoothed.
    fn approach(&mut self, dt: f32, target: &TargetSample) -> MotionMode {
        self.velocity = Vec2::ZERO;
        let gap = target.left_bound() - self.right_edge();
        if !self.reached && target.position.x >= self.position.x && gap <= self.reach_threshold {
            self.reached = true;
            debug!(gap, "approach reached the tracked hand");
        }
        if self.reached {
            self.target_position = self.position;
            return MotionMode::Holding;
        }
        let x = move_towards(
            self.position.x,
            target.position.x,
            self.approach_speed * dt,
        );
        let x = self.clamp_to_target(x, target);
        self.position.x = self.screen.clamp_center(x, self.half_width);
        self.target_position = self.position;
        MotionMode::Approaching
    }

    fn advance_glide(&mut self, dt: f32) {
        let Some(glide) = self.glide.as_mut() else {
            return;
        };
        glide.elapsed += dt;
        let t = (glide.elapsed / glide.duration).clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        self.position = glide.from.lerp(glide.to, eased);
        self.position.x = self.screen.clamp_center(self.position.x, self.half_width);
        self.target_position = self.position;
        self.velocity = Vec2::ZERO;
        if t >= 1.0 {
            self.position = glide.to;
            self.target_position = glide.to;
            self.glide = None;
            debug!("return glide finished");
        }
    }

    /// Whether a body centered at `x` would cross the tracked hand's left bound.
    /// Only a hand on our right has a bound we can cross.
    fn crosses_target(&self, x: f32, target: &TargetSample) -> bool {
        target.position.x >= self.position.x && x + self.half_width > target.left_bound()
    }

    fn clamp_to_target(&self, x: f32, target: &TargetSample) -> f32 {
        if self.crosses_target(x, target) {
            target.left_bound() - self.half_width
        } else {
            x
        }
    }
}
