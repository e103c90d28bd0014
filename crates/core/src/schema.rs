use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// Reference schema
// ---------------------------------------------------------------------------

/// Ordered feature columns the model was fit on.
///
/// Serialized as a plain JSON array of column names. Column names are unique;
/// the position of a name is the feature index the model reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ReferenceSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl ReferenceSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::EmptySchema);
        }
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { columns, index })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl TryFrom<Vec<String>> for ReferenceSchema {
    type Error = SchemaError;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<ReferenceSchema> for Vec<String> {
    fn from(schema: ReferenceSchema) -> Self {
        schema.columns
    }
}

// ---------------------------------------------------------------------------
// Label mapping
// ---------------------------------------------------------------------------

/// Bijection from known category strings to integer codes.
///
/// Stored as `{"classes": [...]}`; a class's code is its index in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LabelMappingRepr", into = "LabelMappingRepr")]
pub struct LabelMapping {
    classes: Vec<String>,
    codes: HashMap<String, i64>,
}

#[derive(Serialize, Deserialize)]
struct LabelMappingRepr {
    classes: Vec<String>,
}

impl LabelMapping {
    pub fn new(classes: Vec<String>) -> Result<Self, SchemaError> {
        let mut codes = HashMap::with_capacity(classes.len());
        for (code, class) in classes.iter().enumerate() {
            if codes.insert(class.clone(), code as i64).is_some() {
                return Err(SchemaError::DuplicateClass(class.clone()));
            }
        }
        Ok(Self { classes, codes })
    }

    /// Integer code for `class`, or `None` if it was never seen at training time.
    pub fn encode(&self, class: &str) -> Option<i64> {
        self.codes.get(class).copied()
    }

    pub fn decode(&self, code: i64) -> Option<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TryFrom<LabelMappingRepr> for LabelMapping {
    type Error = SchemaError;

    fn try_from(repr: LabelMappingRepr) -> Result<Self, Self::Error> {
        Self::new(repr.classes)
    }
}

impl From<LabelMapping> for LabelMappingRepr {
    fn from(mapping: LabelMapping) -> Self {
        Self { classes: mapping.classes }
    }
}
