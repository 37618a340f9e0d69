//! Trigger system: enter/exit events for the event-channel zones.
//!
//! Compares the player hand's collider against each Personal and Recoil zone
//! view and reports transitions. A zone enabled around the hand reports an
//! enter; a zone disabled under it reports an exit.

use glam::Vec2;

use stay_core::enums::ZoneKind;
use stay_core::state::ZoneView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter(ZoneKind),
    Exit(ZoneKind),
}

/// Per-zone contact state carried between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerState {
    inside: [bool; ZoneKind::COUNT],
}

impl TriggerState {
    pub fn is_inside(&self, kind: ZoneKind) -> bool {
        self.inside[kind.index()]
    }
}

/// Detect transitions for a collider at `center` with `radius`.
pub fn run(state: &mut TriggerState, views: &[ZoneView], center: Vec2, radius: f32) -> Vec<TriggerEvent> {
    let mut events = Vec::new();
    for kind in ZoneKind::ALL.into_iter().filter(|k| k.receives_events()) {
        let inside = views
            .iter()
            .find(|v| v.kind == kind)
            .is_some_and(|v| v.enabled && v.shape.overlaps_circle(v.center, center, radius));
        let was = state.inside[kind.index()];
        if inside && !was {
            events.push(TriggerEvent::Enter(kind));
        } else if !inside && was {
            events.push(TriggerEvent::Exit(kind));
        }
        state.inside[kind.index()] = inside;
    }
    events
}
