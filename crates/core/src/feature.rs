use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::schema::ReferenceSchema;

/// A single feature cell: derived numerics are integers, indicators are booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Bool(bool),
}

impl FeatureValue {
    /// Fill value for schema columns the record did not produce.
    pub const ZERO: FeatureValue = FeatureValue::Int(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// True for a set indicator or any non-zero number.
    pub fn is_set(self) -> bool {
        match self {
            Self::Int(v) => v != 0,
            Self::Bool(b) => b,
        }
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One inference-ready row: exactly the columns of a [`ReferenceSchema`], in order.
///
/// The only way to build one is [`FeatureRow::zeroed`] followed by [`FeatureRow::set`],
/// so the column set can never drift from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    schema: ReferenceSchema,
    values: Vec<FeatureValue>,
}

impl FeatureRow {
    /// Schema-shaped row with every column set to zero.
    pub fn zeroed(schema: &ReferenceSchema) -> Self {
        Self {
            schema: schema.clone(),
            values: vec![FeatureValue::ZERO; schema.len()],
        }
    }

    /// Set `column` to `value`. Returns `false` (and leaves the row untouched)
    /// when the schema has no such column.
    pub fn set(&mut self, column: &str, value: FeatureValue) -> bool {
        match self.schema.position(column) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, column: &str) -> Option<FeatureValue> {
        self.schema.position(column).map(|i| self.values[i])
    }

    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    pub fn schema(&self) -> &ReferenceSchema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> + '_ {
        self.schema
            .columns()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Dense numeric vector in schema order; booleans become 0/1.
    pub fn to_dense(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.as_f64()).collect()
    }
}

/// Serializes as an ordered JSON object `{column: value, ...}`.
impl Serialize for FeatureRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}
