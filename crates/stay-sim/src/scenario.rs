//! Scripted player input for headless runs.
//!
//! Each script maps what the player can see (its own hand, the Cover box,
//! whether Personal is up) to a movement input for the frame.

use glam::Vec2;

use stay_core::enums::ZoneKind;
use stay_core::errors::ScenarioError;

use crate::host::{Host, HostFrame};

/// Distance at which the player counts as having arrived.
const ARRIVE_TOLERANCE: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptId {
    /// Never touch the controls.
    Idle,
    /// Push straight left into the other hand.
    Rush,
    /// Wait for Personal to collapse, then settle inside the Cover box.
    PatientCover,
}

impl ScriptId {
    pub const ALL: [ScriptId; 3] = [ScriptId::Idle, ScriptId::Rush, ScriptId::PatientCover];

    pub fn name(self) -> &'static str {
        match self {
            ScriptId::Idle => "idle",
            ScriptId::Rush => "rush",
            ScriptId::PatientCover => "patient-cover",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScriptId::Idle => "no input; the zones shrink and the other hand comes over",
            ScriptId::Rush => "move left into the other hand; recoil and loss",
            ScriptId::PatientCover => "wait out the shrink, then hold inside the cover box",
        }
    }

    pub fn parse(name: &str) -> Result<Self, ScenarioError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| ScenarioError::UnknownScript {
                name: name.to_string(),
            })
    }

    /// Input for this frame.
    pub fn input(self, view: &ScriptView) -> Vec2 {
        match self {
            ScriptId::Idle => Vec2::ZERO,
            ScriptId::Rush => Vec2::NEG_X,
            ScriptId::PatientCover => {
                if view.personal_enabled {
                    return Vec2::ZERO;
                }
                match view.cover_center {
                    Some(cover) => arrive(view, cover),
                    None => Vec2::ZERO,
                }
            }
        }
    }
}

/// What a script may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptView {
    pub time: f32,
    pub player: Vec2,
    pub player_velocity: Vec2,
    /// Distance the player hand coasts to rest once input stops.
    pub braking_distance: f32,
    pub cover_center: Option<Vec2>,
    pub personal_enabled: bool,
}

impl ScriptView {
    pub fn observe(host: &Host, smoothing: f32) -> Self {
        let (player, player_velocity) = {
            let scene = host.scene().borrow();
            (scene.player_position(), scene.player_velocity())
        };
        let views = host.engine().zone_views();
        let cover_center = views
            .iter()
            .find(|v| v.kind == ZoneKind::Cover && v.enabled)
            .map(|v| v.center);
        let personal_enabled = views
            .iter()
            .any(|v| v.kind == ZoneKind::Personal && v.enabled);
        let braking_distance = if smoothing > 0.0 {
            player_velocity.length() / (smoothing * 60.0)
        } else {
            0.0
        };
        Self {
            time: host.time(),
            player,
            player_velocity,
            braking_distance,
            cover_center,
            personal_enabled,
        }
    }
}

/// Head for `goal`, letting go once coasting would carry the hand there.
fn arrive(view: &ScriptView, goal: Vec2) -> Vec2 {
    let delta = goal - view.player;
    let distance = delta.length();
    if distance <= ARRIVE_TOLERANCE || distance <= view.braking_distance {
        Vec2::ZERO
    } else {
        delta
    }
}

/// Drive `host` with `script` for `seconds` at a fixed frame time.
pub fn run_script(
    host: &mut Host,
    script: ScriptId,
    smoothing: f32,
    seconds: f32,
    frame_dt: f32,
) -> Vec<HostFrame> {
    let frame_dt = if frame_dt > 0.0 { frame_dt } else { 1.0 / 60.0 };
    let frames = (seconds.max(0.0) / frame_dt).ceil() as usize;
    let mut out = Vec::with_capacity(frames);
    for _ in 0..frames {
        let view = ScriptView::observe(host, smoothing);
        host.set_input(script.input(&view));
        out.push(host.advance(frame_dt));
    }
    out
}
