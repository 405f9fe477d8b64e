//! Error types for the boxoffice inventory core
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Only booking can fail; the core performs no retries and
//! no internal recovery - failures surface to the caller as typed results,
//! and status codes or messages are the transport layer's concern.

use crate::types::EventId;
use thiserror::Error;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the inventory core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Booking referenced an event identifier absent from the store
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// Requested ticket count exceeds the event's remaining pool
    ///
    /// The pool is left untouched: no partial booking occurs.
    #[error("not enough tickets available for event {event}: requested {requested}, available {available}")]
    InsufficientTickets {
        /// The event the booking targeted
        event: EventId,
        /// Tickets the caller asked for
        requested: i64,
        /// Tickets remaining at check time
        available: i64,
    },
}
