//! Inventory engine for the boxoffice system
//!
//! [`Inventory`] is the orchestration seam: it owns the event store, the
//! booking lookup cache, and the identifier sequence as explicit injected
//! state (no hidden globals), and implements the three inventory
//! operations on top of them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod inventory;

pub use inventory::Inventory;
