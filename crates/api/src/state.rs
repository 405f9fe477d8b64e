//! Application state shared across HTTP handlers

use boxoffice_concurrency::AdmissionGate;
use boxoffice_engine::Inventory;
use std::sync::Arc;

/// Shared state handed to every handler.
///
/// Cloning is cheap: both members sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// The inventory engine all operations go through.
    pub inventory: Arc<Inventory>,
    /// Admission gate bounding concurrently executing operations.
    pub gate: Arc<AdmissionGate>,
}

impl AppState {
    /// Create fresh state with an empty inventory and the given admission
    /// capacity.
    pub fn new(admission_limit: usize) -> Self {
        Self {
            inventory: Arc::new(Inventory::new()),
            gate: Arc::new(AdmissionGate::new(admission_limit)),
        }
    }
}
