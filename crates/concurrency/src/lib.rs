//! Concurrency primitives for the boxoffice inventory system
//!
//! Two unrelated concerns live here and must stay unrelated:
//! - [`IdSequence`]: process-wide identifier issuance (data, linearizable)
//! - [`AdmissionGate`]: bounding how many operations run at once (capacity,
//!   not data protection)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gate;
pub mod sequence;

pub use gate::{AdmissionGate, AdmissionPermit};
pub use sequence::IdSequence;
