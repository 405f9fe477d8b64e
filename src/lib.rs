//! Boxoffice - concurrent event-ticket inventory service
//!
//! Boxoffice manages event ticket inventory in process memory: creating
//! events with a fixed ticket pool, listing them, and booking tickets
//! against a pool under concurrent access without ever overselling.
//!
//! # Quick Start
//!
//! ```
//! use boxoffice::Inventory;
//! use chrono::Utc;
//!
//! let inventory = Inventory::new();
//!
//! // Create an event with 100 tickets
//! let event = inventory.create_event("Concert", Utc::now(), 100);
//!
//! // Book three of them
//! let tickets = inventory.book_tickets(&event.id, 3)?;
//! assert_eq!(tickets.len(), 3);
//! # Ok::<(), boxoffice::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through [`Inventory`], which owns the event store, the
//! booking lookup cache, and the identifier sequence as explicit state.
//! Transport layers bound in-flight operations with an [`AdmissionGate`].
//!
//! Internal implementation details (storage, caching) are not exposed - only
//! the inventory API and its types are public.

pub use boxoffice_concurrency::{AdmissionGate, AdmissionPermit, IdSequence};
pub use boxoffice_core::{limits, Error, Event, EventId, Result, Ticket, TicketId};
pub use boxoffice_engine::Inventory;
