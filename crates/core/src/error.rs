use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Reference schema has no columns.
    EmptySchema,
    /// A column name appears more than once in the reference schema.
    DuplicateColumn(String),
    /// A class appears more than once in the label mapping.
    DuplicateClass(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySchema => write!(f, "reference schema has no columns"),
            Self::DuplicateColumn(name) => write!(f, "duplicate schema column '{name}'"),
            Self::DuplicateClass(name) => write!(f, "duplicate label class '{name}'"),
        }
    }
}

impl std::error::Error for SchemaError {}
