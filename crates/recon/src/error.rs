use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconError {
    /// Category value absent from the label mapping (never seen at training time).
    UnknownCategory { field: String, value: String },
    /// Year and month do not form a calendar date.
    InvalidDate { year: i32, month: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { field, value } => {
                write!(f, "unknown {field} '{value}': not present in the label mapping")
            }
            Self::InvalidDate { year, month } => {
                write!(f, "invalid date: year {year}, month '{month}'")
            }
        }
    }
}

impl std::error::Error for ReconError {}
