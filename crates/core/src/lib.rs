//! Core types for the boxoffice inventory system
//!
//! This crate defines the foundational types used throughout the system:
//! - EventId / TicketId: identifiers drawn from the shared sequence
//! - Event: caller-facing snapshot of a bookable event
//! - Ticket: proof-of-booking issued against an event
//! - Error: error type hierarchy
//! - limits: fixed capacities (cache slots, admission limit)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Event, EventId, Ticket, TicketId};
