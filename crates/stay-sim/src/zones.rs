//! Zone table: the four proximity zones indexed by kind.
//!
//! A fixed array with an enabled bit per entry. Movement is the only zone
//! created after `init()`; its slot is empty until then and after it is consumed.

use glam::Vec2;
use tracing::debug;

use stay_core::enums::ZoneKind;
use stay_core::state::ZoneView;
use stay_core::types::ZoneShape;

use crate::kinematics::move_towards;

/// Zones are addressed by kind; there is at most one zone per kind.
pub type ZoneHandle = ZoneKind;

/// One proximity zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub kind: ZoneKind,
    pub shape: ZoneShape,
    /// Size at creation; `restore` returns to it.
    pub original_size: f32,
    /// Offset from the owning body's position.
    pub offset: Vec2,
    pub enabled: bool,
    occupied: bool,
}

/// The entity's zones.
#[derive(Debug, Clone, Default)]
pub struct ZoneSet {
    slots: [Option<Zone>; ZoneKind::COUNT],
}

impl ZoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the zone of `kind`. New zones start enabled and unoccupied.
    pub fn create_zone(&mut self, kind: ZoneKind, shape: ZoneShape, offset: Vec2) -> ZoneHandle {
        debug!(zone = kind.label(), size = shape.size(), "zone created");
        self.slots[kind.index()] = Some(Zone {
            kind,
            shape,
            original_size: shape.size(),
            offset,
            enabled: true,
            occupied: false,
        });
        kind
    }

    /// Remove the zone. Returns whether it existed.
    pub fn destroy_zone(&mut self, handle: ZoneHandle) -> bool {
        let existed = self.slots[handle.index()].take().is_some();
        if existed {
            debug!(zone = handle.label(), "zone destroyed");
        }
        existed
    }

    pub fn get(&self, handle: ZoneHandle) -> Option<&Zone> {
        self.slots[handle.index()].as_ref()
    }

    pub fn exists(&self, handle: ZoneHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Enable or disable a zone. Disabling clears occupancy.
    /// Returns whether the enabled bit changed.
    pub fn set_enabled(&mut self, handle: ZoneHandle, enabled: bool) -> bool {
        let Some(zone) = self.slots[handle.index()].as_mut() else {
            return false;
        };
        if !enabled {
            zone.occupied = false;
        }
        if zone.enabled == enabled {
            return false;
        }
        zone.enabled = enabled;
        debug!(zone = handle.label(), enabled, size = zone.shape.size(), "zone toggled");
        true
    }

    pub fn is_enabled(&self, handle: ZoneHandle) -> bool {
        self.get(handle).is_some_and(|z| z.enabled)
    }

    /// A disabled or missing zone is never occupied, whatever its stale flag says.
    pub fn is_occupied(&self, handle: ZoneHandle) -> bool {
        self.get(handle).is_some_and(|z| z.enabled && z.occupied)
    }

    /// Record occupancy. Ignored for disabled or missing zones.
    /// Returns true on a rising edge (was not occupied, now is).
    pub fn set_occupied(&mut self, handle: ZoneHandle, occupied: bool) -> bool {
        match self.slots[handle.index()].as_mut() {
            Some(zone) if zone.enabled => {
                let rising = occupied && !zone.occupied;
                zone.occupied = occupied;
                rising
            }
            _ => false,
        }
    }

    pub fn size(&self, handle: ZoneHandle) -> Option<f32> {
        self.get(handle).map(|z| z.shape.size())
    }

    /// Set a zone's size directly, clamped at zero.
    pub fn set_size(&mut self, handle: ZoneHandle, size: f32) {
        if let Some(zone) = self.slots[handle.index()].as_mut() {
            zone.shape = zone.shape.with_size(size);
        }
    }

    /// Reset a zone to its creation size.
    pub fn restore(&mut self, handle: ZoneHandle) {
        if let Some(zone) = self.slots[handle.index()].as_mut() {
            zone.shape = zone.shape.with_size(zone.original_size);
        }
    }

    /// Move a zone's size toward `floor` by at most `rate * dt`. Never grows.
    /// Returns true once the size is at or below the floor.
    pub fn shrink_towards(&mut self, handle: ZoneHandle, floor: f32, rate: f32, dt: f32) -> bool {
        let Some(zone) = self.slots[handle.index()].as_mut() else {
            return false;
        };
        let size = zone.shape.size();
        if size <= floor {
            return true;
        }
        let next = move_towards(size, floor, (rate * dt).max(0.0));
        zone.shape = zone.shape.with_size(next);
        next <= floor
    }

    /// Clear every occupancy flag.
    pub fn clear_occupancy(&mut self) {
        for zone in self.slots.iter_mut().flatten() {
            zone.occupied = false;
        }
    }

    /// Kinds of all existing, enabled zones, in table order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = ZoneKind> + '_ {
        self.slots
            .iter()
            .flatten()
            .filter(|z| z.enabled)
            .map(|z| z.kind)
    }

    /// World-space center of a zone attached to a body at `body`.
    pub fn center(&self, handle: ZoneHandle, body: Vec2) -> Option<Vec2> {
        self.get(handle).map(|z| body + z.offset)
    }

    /// External view of every existing zone.
    pub fn views(&self, body: Vec2) -> Vec<ZoneView> {
        self.slots
            .iter()
            .flatten()
            .map(|z| ZoneView {
                kind: z.kind,
                shape: z.shape,
                center: body + z.offset,
                enabled: z.enabled,
                occupied: z.enabled && z.occupied,
            })
            .collect()
    }
}
