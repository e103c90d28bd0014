use rxsales_core::record::{DAY, DAY_OF_WEEK, MONTH, PRODUCT_NAME, YEAR};
use rxsales_core::{FeatureRow, FeatureValue, LabelMapping, PartialRecord, ReferenceSchema};

use crate::encode::{encode_label, expand_indicators};
use crate::error::ReconError;
use crate::temporal::calendar_features;

/// Columns produced from one record, before alignment, in derivation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedFeatures {
    entries: Vec<(String, FeatureValue)>,
}

impl DerivedFeatures {
    fn push(&mut self, column: impl Into<String>, value: impl Into<FeatureValue>) {
        self.entries.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<FeatureValue> {
        self.entries.iter().find(|(c, _)| c == column).map(|(_, v)| *v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> + '_ {
        self.entries.iter().map(|(c, v)| (c.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Encode the product, expand the date, and one-hot the remaining categories.
pub fn derive_features(
    record: &PartialRecord,
    labels: &LabelMapping,
) -> Result<DerivedFeatures, ReconError> {
    let code = encode_label(labels, PRODUCT_NAME, &record.product_name)?;
    let date = calendar_features(record.year, &record.month)?;

    let mut derived = DerivedFeatures::default();
    derived.push(PRODUCT_NAME, code);
    derived.push(YEAR, i64::from(date.year));
    derived.push(MONTH, i64::from(date.month));
    derived.push(DAY, i64::from(date.day));
    derived.push(DAY_OF_WEEK, i64::from(date.day_of_week));
    for (column, value) in expand_indicators(&record.categories) {
        derived.push(column, value);
    }
    Ok(derived)
}

/// Merge `features` into a zero-filled row shaped like `schema`.
///
/// Columns the schema does not know are dropped; schema columns the features
/// do not mention stay zero. The result is always in schema order.
pub fn align_to_schema<'a, I>(features: I, schema: &ReferenceSchema) -> FeatureRow
where
    I: IntoIterator<Item = (&'a str, FeatureValue)>,
{
    let mut row = FeatureRow::zeroed(schema);
    let mut merged = 0usize;
    let mut dropped = Vec::new();

    for (column, value) in features {
        if row.set(column, value) {
            merged += 1;
        } else {
            dropped.push(column);
        }
    }

    if !dropped.is_empty() {
        log::debug!(
            "dropped {} column(s) not in reference schema: {}",
            dropped.len(),
            dropped.join(", ")
        );
    }
    log::trace!(
        "aligned {merged} derived column(s), zero-filled {} of {}",
        schema.len().saturating_sub(merged),
        schema.len()
    );

    row
}

/// Full reconciliation: derive features from `record` and align them to `schema`.
pub fn reconcile(
    record: &PartialRecord,
    labels: &LabelMapping,
    schema: &ReferenceSchema,
) -> Result<FeatureRow, ReconError> {
    let derived = derive_features(record, labels)?;
    Ok(align_to_schema(derived.iter(), schema))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
