//! Overlap detection: event channel plus interval polling.
//!
//! Events give immediate enter/exit for Personal and Recoil. Polling re-scans
//! every enabled zone from scratch on a fixed interval and catches what events
//! miss: a hand already inside at spawn, or a zone re-enabled around it.
//! Both write the same occupancy flags in the `ZoneSet`.

use glam::Vec2;
use tracing::trace;

use stay_core::config::EncounterConfig;
use stay_core::enums::ZoneKind;
use stay_core::types::{ObjectRef, ZoneShape};

use crate::ports::{is_tracked_target, OverlapQuery};
use crate::zones::ZoneSet;

/// Result of one polling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    hits: [bool; ZoneKind::COUNT],
    scanned: [bool; ZoneKind::COUNT],
}

impl PollReport {
    /// Whether the zone was scanned and contained the tracked hand.
    pub fn hit(&self, kind: ZoneKind) -> bool {
        self.hits[kind.index()]
    }

    pub fn scanned(&self, kind: ZoneKind) -> bool {
        self.scanned[kind.index()]
    }
}

/// Reconciles the event and polling channels into the zone occupancy flags.
#[derive(Debug, Clone)]
pub struct OverlapDetector {
    polling_enabled: bool,
    poll_interval: f32,
    poll_timer: f32,
    layer_mask: u32,
    /// Objects never reported as overlaps (the other hand's own body).
    exclude: Vec<ObjectRef>,
}

impl OverlapDetector {
    pub fn new(config: &EncounterConfig, own_object: Option<ObjectRef>) -> Self {
        Self {
            polling_enabled: config.polling_enabled,
            poll_interval: config.poll_interval,
            poll_timer: 0.0,
            layer_mask: config.target_layer_mask,
            exclude: own_object.into_iter().collect(),
        }
    }

    /// Event channel: the tracked hand crossed into `kind`.
    /// Returns true on a rising edge. Zones outside the event channel are ignored.
    pub fn on_enter(&self, zones: &mut ZoneSet, kind: ZoneKind) -> bool {
        if !kind.receives_events() {
            return false;
        }
        trace!(zone = kind.label(), "[event] enter");
        zones.set_occupied(kind, true)
    }

    /// Event channel: the tracked hand left `kind`.
    pub fn on_exit(&self, zones: &mut ZoneSet, kind: ZoneKind) {
        if !kind.receives_events() {
            return;
        }
        trace!(zone = kind.label(), "[event] exit");
        zones.set_occupied(kind, false);
    }

    /// Advance the poll timer; when the interval elapses, scan every enabled zone
    /// except `skip` and overwrite their flags.
    pub fn tick(
        &mut self,
        dt: f32,
        zones: &mut ZoneSet,
        body: Vec2,
        query: &dyn OverlapQuery,
        target: ObjectRef,
        skip: ZoneKind,
    ) -> Option<PollReport> {
        if !self.polling_enabled {
            return None;
        }
        self.poll_timer += dt.max(0.0);
        if self.poll_timer < self.poll_interval {
            return None;
        }
        self.poll_timer = 0.0;
        Some(self.scan(zones, body, query, target, skip))
    }

    /// One polling pass, recomputing each scanned flag from scratch.
    pub fn scan(
        &self,
        zones: &mut ZoneSet,
        body: Vec2,
        query: &dyn OverlapQuery,
        target: ObjectRef,
        skip: ZoneKind,
    ) -> PollReport {
        let mut report = PollReport::default();
        let kinds: Vec<ZoneKind> = zones.enabled_kinds().filter(|&k| k != skip).collect();
        for kind in kinds {
            let hit = self.zone_contains_target(zones, kind, body, query, target);
            report.scanned[kind.index()] = true;
            report.hits[kind.index()] = hit;
            zones.set_occupied(kind, hit);
            trace!(zone = kind.label(), hit, "[poll]");
        }
        report
    }

    /// Query one zone's geometry for the tracked hand. Disabled zones never contain it.
    pub fn zone_contains_target(
        &self,
        zones: &ZoneSet,
        kind: ZoneKind,
        body: Vec2,
        query: &dyn OverlapQuery,
        target: ObjectRef,
    ) -> bool {
        let Some(zone) = zones.get(kind) else {
            return false;
        };
        if !zone.enabled {
            return false;
        }
        let center = body + zone.offset;
        let found = match zone.shape {
            ZoneShape::Circle { radius } => query.overlaps_circle(center, radius, &self.exclude),
            ZoneShape::Box { side } => query.overlaps_box(center, Vec2::splat(side)),
        };
        found
            .into_iter()
            .filter(|object| !self.exclude.contains(object))
            .any(|object| is_tracked_target(query, target, self.layer_mask, object))
    }
}
