//! `rxsales-recon` - feature reconciliation for single-record inference.
//!
//! Pure crate: receives a partial record plus the two frozen training
//! artifacts (label mapping, reference schema) and returns a feature row laid
//! out exactly like the training data. No IO.

pub mod encode;
pub mod engine;
pub mod error;
pub mod temporal;

pub use engine::{align_to_schema, derive_features, reconcile, DerivedFeatures};
pub use error::ReconError;
