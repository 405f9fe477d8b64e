//! The inventory service: create, list, book
//!
//! Booking resolves the event through the lookup cache (falling back to the
//! store), then runs the availability check, ticket issuance, and decrement
//! as one unit under that event's own seat lock. Bookings against distinct
//! events proceed in parallel; bookings against the same event serialize,
//! which is what keeps the pool from going negative.

use boxoffice_concurrency::IdSequence;
use boxoffice_core::{Error, Event, EventId, Result, TicketId};
use boxoffice_storage::{EventRecord, EventStore, SlotCache};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, trace};

/// The inventory service; every operation goes through one of these.
///
/// Cheap to share behind an `Arc`: all interior state carries its own
/// synchronization and every method takes `&self`.
#[derive(Debug, Default)]
pub struct Inventory {
    store: EventStore,
    cache: SlotCache,
    ids: IdSequence,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event with a fixed ticket pool and return its snapshot.
    ///
    /// The pool size is taken as given - zero and negative totals are
    /// accepted, matching how permissive the booking path is about counts.
    /// The event is visible to [`list_events`](Self::list_events) and
    /// [`book_tickets`](Self::book_tickets) as soon as this returns.
    pub fn create_event(
        &self,
        name: impl Into<String>,
        date: DateTime<Utc>,
        total_tickets: i64,
    ) -> Event {
        let record = Arc::new(EventRecord::new(
            self.ids.next_event_id(),
            name.into(),
            date,
            total_tickets,
        ));
        let snapshot = record.snapshot();
        self.store.put(record);
        debug!(event = %snapshot.id, total = total_tickets, "event created");
        snapshot
    }

    /// Snapshots of all events, in unspecified order.
    ///
    /// Identifiers are numeric strings, so presentation layers can sort by
    /// numeric value; the store itself imposes no order.
    pub fn list_events(&self) -> Vec<Event> {
        self.store
            .list()
            .iter()
            .map(|record| record.snapshot())
            .collect()
    }

    /// Book `num_tickets` against an event, returning the issued ticket
    /// identifiers in issuance order.
    ///
    /// All-or-nothing: on failure the pool is untouched and no identifiers
    /// are issued. `num_tickets` is not validated - zero books nothing and
    /// changes nothing, and a negative count issues no tickets while
    /// returning seats to the pool.
    ///
    /// # Errors
    ///
    /// [`Error::EventNotFound`] when no event has this identifier;
    /// [`Error::InsufficientTickets`] when the remaining pool is smaller
    /// than the request.
    pub fn book_tickets(&self, event_id: &EventId, num_tickets: i64) -> Result<Vec<TicketId>> {
        let record = self.resolve(event_id)?;

        // Check, issue, and decrement under the event's seat lock, as one
        // unit; racing bookings for this event line up here.
        let mut available = record.available.lock();
        if *available < num_tickets {
            return Err(Error::InsufficientTickets {
                event: event_id.clone(),
                requested: num_tickets,
                available: *available,
            });
        }

        // Empty for zero or negative counts
        let tickets: Vec<TicketId> = (0..num_tickets)
            .map(|_| self.ids.next_ticket_id())
            .collect();
        *available -= num_tickets;
        debug!(
            event = %event_id,
            booked = num_tickets,
            remaining = *available,
            "tickets booked"
        );
        Ok(tickets)
    }

    /// Resolve an event through the cache, falling back to the store.
    ///
    /// The store is authoritative; the cache only short-circuits repeat
    /// lookups and is refreshed after every fallback.
    fn resolve(&self, event_id: &EventId) -> Result<Arc<EventRecord>> {
        if let Some(record) = self.cache.lookup(event_id) {
            trace!(event = %event_id, "lookup cache hit");
            return Ok(record);
        }
        let record = self
            .store
            .get(event_id)
            .ok_or_else(|| Error::EventNotFound(event_id.clone()))?;
        self.cache.record(Arc::clone(&record));
        Ok(record)
    }
}
