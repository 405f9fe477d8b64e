//! Inventory Integration Tests
//!
//! End-to-end coverage of the public facade: booking flows, listing,
//! and the guarantees that hold under concurrent access.

mod booking;
mod concurrency;
mod listing;
