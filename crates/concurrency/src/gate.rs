//! Admission gate bounding concurrent inventory operations
//!
//! A counting gate with fixed capacity: `acquire` blocks the calling thread
//! until a slot frees, then occupies it for the lifetime of the returned
//! permit. The gate bounds how many operations are in flight at once,
//! whatever their kind. It protects no shared data and is never used as a
//! data lock; the stores carry their own synchronization.

use parking_lot::{Condvar, Mutex};
use tracing::trace;

/// Counting admission gate with fixed capacity.
pub struct AdmissionGate {
    capacity: usize,
    in_flight: Mutex<usize>,
    freed: Condvar,
}

impl AdmissionGate {
    /// Create a gate admitting at most `capacity` concurrent holders.
    ///
    /// # Panics
    /// Panics if `capacity` is zero, which would block every acquire forever.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "admission gate capacity must be at least 1");
        Self {
            capacity,
            in_flight: Mutex::new(0),
            freed: Condvar::new(),
        }
    }

    /// Block until a slot is free, then occupy it.
    ///
    /// The slot is held until the returned permit is dropped, so it is
    /// released on every exit path, including early returns and panics.
    pub fn acquire(&self) -> AdmissionPermit<'_> {
        let mut in_flight = self.in_flight.lock();
        while *in_flight >= self.capacity {
            trace!(capacity = self.capacity, "admission gate full, waiting");
            self.freed.wait(&mut in_flight);
        }
        *in_flight += 1;
        AdmissionPermit { gate: self }
    }

    /// Occupy a slot only if one is free right now.
    pub fn try_acquire(&self) -> Option<AdmissionPermit<'_>> {
        let mut in_flight = self.in_flight.lock();
        if *in_flight >= self.capacity {
            return None;
        }
        *in_flight += 1;
        Some(AdmissionPermit { gate: self })
    }

    /// The fixed capacity of this gate.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently occupied slots.
    pub fn in_flight(&self) -> usize {
        *self.in_flight.lock()
    }
}

/// Occupied slot in an [`AdmissionGate`]; dropping it frees the slot.
#[must_use = "dropping the permit immediately releases the slot"]
pub struct AdmissionPermit<'a> {
    gate: &'a AdmissionGate,
}

impl Drop for AdmissionPermit<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.gate.in_flight.lock();
        *in_flight -= 1;
        drop(in_flight);
        self.gate.freed.notify_one();
    }
}
