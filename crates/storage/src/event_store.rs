//! Concurrent event storage
//!
//! Replaces external locking with DashMap: lock-free reads, sharded writes,
//! O(1) lookups. A `put` for key K is visible to every subsequent `get(K)`
//! once it returns; no ordering is guaranteed across keys.
//!
//! # Shared records
//!
//! The map holds `Arc<EventRecord>` values and hands out clones of the
//! `Arc`, never copies of the record. Everything that resolves an event -
//! store, cache, in-flight bookings - observes the same seat counter.

use boxoffice_core::{Event, EventId};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// A stored event: immutable identity plus the mutable seat counter.
#[derive(Debug)]
pub struct EventRecord {
    /// Identifier assigned at creation, immutable.
    pub id: EventId,
    /// Human-readable event name.
    pub name: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Size of the initial ticket pool, immutable after creation.
    pub total_tickets: i64,
    /// Remaining pool, guarded by the per-event serialization point.
    ///
    /// The availability check and the decrement that follows must run under
    /// this lock as one unit; that is what keeps racing bookings on the same
    /// event from overselling it.
    pub available: Mutex<i64>,
}

impl EventRecord {
    /// Create a record whose available pool equals the total pool.
    pub fn new(
        id: EventId,
        name: String,
        date: DateTime<Utc>,
        total_tickets: i64,
    ) -> Self {
        Self {
            id,
            name,
            date,
            total_tickets,
            available: Mutex::new(total_tickets),
        }
    }

    /// Point-in-time caller-facing view of this record.
    pub fn snapshot(&self) -> Event {
        Event {
            id: self.id.clone(),
            name: self.name.clone(),
            date: self.date,
            total_tickets: self.total_tickets,
            available_tickets: *self.available.lock(),
        }
    }
}

/// Concurrent map of events keyed by identifier.
///
/// Safe to share across threads without external locking; all methods take
/// `&self`.
#[derive(Debug, Default)]
pub struct EventStore {
    events: DashMap<EventId, Arc<EventRecord>>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record keyed by its identifier.
    pub fn put(&self, record: Arc<EventRecord>) {
        self.events.insert(record.id.clone(), record);
    }

    /// Point lookup.
    pub fn get(&self, id: &EventId) -> Option<Arc<EventRecord>> {
        self.events.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// All stored records, in unspecified order.
    ///
    /// Callers that need an order impose it themselves; event identifiers
    /// are numeric strings precisely so that is possible.
    pub fn list(&self) -> Vec<Arc<EventRecord>> {
        self.events
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
