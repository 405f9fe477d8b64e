//! Identifier and data-model types
//!
//! Identifiers are the decimal string form of values drawn from one shared
//! monotonic counter, so every identifier is unique across events *and*
//! tickets, and event identifiers are numerically comparable for
//! presentation ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a bookable event.
///
/// Sequence-issued identifiers are always decimal strings. Caller-supplied
/// strings (e.g. from a URL path) are representable without validation; a
/// non-numeric one simply never resolves anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Build an identifier from a sequence value.
    pub fn from_seq(seq: u64) -> Self {
        Self(seq.to_string())
    }

    /// Wrap a caller-supplied identifier string as-is.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier, if it is a decimal string.
    ///
    /// Sequence-issued identifiers always parse; caller-supplied ones may
    /// not, and callers must treat `None` as "no slot / sorts first".
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of an issued ticket.
///
/// Tickets draw from the same counter namespace as events, so a ticket
/// identifier never collides with an event identifier either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Build an identifier from a sequence value.
    pub fn from_seq(seq: u64) -> Self {
        Self(seq.to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-facing snapshot of an event.
///
/// `available_tickets` is a point-in-time reading of the live seat counter;
/// the authoritative, mutable state lives in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Identifier assigned at creation, immutable.
    pub id: EventId,
    /// Human-readable event name.
    pub name: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Size of the initial ticket pool, immutable after creation.
    pub total_tickets: i64,
    /// Remaining pool at snapshot time. Mutated only by booking.
    pub available_tickets: i64,
}

/// Proof-of-booking issued against an event.
///
/// Tickets are returned to the caller and not retained anywhere: they are
/// capability tokens, not tracked entities. `event_id` is a back-reference
/// for reporting, not an ownership relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Identifier assigned at issuance.
    pub id: TicketId,
    /// The event this ticket was issued for.
    pub event_id: EventId,
}

impl Ticket {
    /// Pair a ticket identifier with the event it was issued for.
    pub fn new(id: TicketId, event_id: EventId) -> Self {
        Self { id, event_id }
    }
}
