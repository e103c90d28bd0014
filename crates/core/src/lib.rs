//! `rxsales-core` - shared types for sales prediction.
//!
//! The training run freezes two artifacts that every prediction depends on:
//! the [`ReferenceSchema`] (ordered feature columns) and the [`LabelMapping`]
//! (product name → integer code). A [`PartialRecord`] is what a caller knows;
//! a [`FeatureRow`] is what the model consumes.

pub mod error;
pub mod feature;
pub mod record;
pub mod schema;

pub use error::SchemaError;
pub use feature::{FeatureRow, FeatureValue};
pub use record::{CategoryDefaults, PartialRecord};
pub use schema::{LabelMapping, ReferenceSchema};
