//! Process-wide identifier issuance
//!
//! Events and tickets draw from one shared counter, so identifiers are
//! unique across both kinds. The counter only increases.

use boxoffice_core::{EventId, TicketId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source shared by events and tickets.
///
/// Issuance is linearizable: concurrent calls never return the same value,
/// and N calls return exactly the values `{1..=N}` in some interleaving
/// order. Identifiers are the decimal string form of the post-increment
/// counter value.
#[derive(Debug, Default)]
pub struct IdSequence {
    /// Last issued value; the next call returns this plus one.
    counter: AtomicU64,
}

impl IdSequence {
    /// Create a sequence starting at zero (first identifier is "1").
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next sequence value (post-increment).
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last issued value (zero if nothing was issued yet).
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Mint an event identifier.
    pub fn next_event_id(&self) -> EventId {
        EventId::from_seq(self.next())
    }

    /// Mint a ticket identifier.
    pub fn next_ticket_id(&self) -> TicketId {
        TicketId::from_seq(self.next())
    }
}
