use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Model structure is unusable (empty ensemble, broken node arrays, etc.).
    InvalidModel(String),
    /// Feature vector width differs from what the model was fit on.
    FeatureCountMismatch { expected: usize, got: usize },
    /// Inference produced NaN or an infinity.
    NonFinite(f64),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidModel(msg) => write!(f, "invalid model: {msg}"),
            Self::FeatureCountMismatch { expected, got } => {
                write!(f, "model expects {expected} feature(s), row has {got}")
            }
            Self::NonFinite(v) => write!(f, "prediction is not finite: {v}"),
        }
    }
}

impl std::error::Error for EngineError {}
