//! Direct-mapped lookup cache for the booking hot path
//!
//! A fixed array of slots; an event's slot is its numeric identifier modulo
//! [`CACHE_SLOTS`]. There is no collision chaining - the last writer per
//! slot wins, and two events whose identifiers collide modulo the slot
//! count thrash each other's slot. That is acceptable: on a miss the
//! authoritative [`EventStore`](crate::EventStore) is always consulted, and
//! occupants are the live shared records, so a slot left over from an
//! earlier booking still reads the current seat count.

use crate::event_store::EventRecord;
use boxoffice_core::limits::CACHE_SLOTS;
use boxoffice_core::EventId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Fixed-size direct-mapped cache of event records.
#[derive(Debug)]
pub struct SlotCache {
    slots: Mutex<[Option<Arc<EventRecord>>; CACHE_SLOTS]>,
}

impl Default for SlotCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotCache {
    /// Create a cache with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(std::array::from_fn(|_| None)),
        }
    }

    /// The slot an identifier maps to, if it has one.
    ///
    /// A non-numeric identifier has no slot: it can never be cached and
    /// always misses, leaving resolution to the store.
    fn slot_of(id: &EventId) -> Option<usize> {
        id.numeric().map(|n| (n % CACHE_SLOTS as u64) as usize)
    }

    /// Look an event up by identifier.
    ///
    /// Hit only when the occupant's identifier matches exactly; a colliding
    /// occupant or an empty slot is a miss.
    pub fn lookup(&self, id: &EventId) -> Option<Arc<EventRecord>> {
        let slot = Self::slot_of(id)?;
        let slots = self.slots.lock();
        slots[slot]
            .as_ref()
            .filter(|record| record.id == *id)
            .map(Arc::clone)
    }

    /// Store a record in its slot, evicting any previous occupant.
    ///
    /// No-op for records whose identifier has no slot.
    pub fn record(&self, record: Arc<EventRecord>) {
        if let Some(slot) = Self::slot_of(&record.id) {
            self.slots.lock()[slot] = Some(record);
        }
    }
}
