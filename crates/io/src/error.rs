use std::fmt;
use std::path::PathBuf;

/// Which of the three training artifacts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    LabelMapping,
    Schema,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::LabelMapping => write!(f, "label mapping"),
            Self::Schema => write!(f, "reference schema"),
        }
    }
}

#[derive(Debug)]
pub enum ArtifactError {
    /// Artifact file does not exist.
    NotFound { kind: ArtifactKind, path: PathBuf },
    /// File exists but could not be read.
    Read { kind: ArtifactKind, path: PathBuf, message: String },
    /// File is not well-formed JSON.
    Parse { kind: ArtifactKind, path: PathBuf, message: String },
    /// JSON is well-formed but violates the artifact's rules.
    Invalid { kind: ArtifactKind, path: PathBuf, message: String },
}

impl ArtifactError {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::NotFound { kind, .. }
            | Self::Read { kind, .. }
            | Self::Parse { kind, .. }
            | Self::Invalid { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, path } => {
                write!(f, "{kind} file not found: {}", path.display())
            }
            Self::Read { kind, path, message } => {
                write!(f, "cannot read {kind} file {}: {message}", path.display())
            }
            Self::Parse { kind, path, message } => {
                write!(f, "cannot parse {kind} file {}: {message}", path.display())
            }
            Self::Invalid { kind, path, message } => {
                write!(f, "invalid {kind} in {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ArtifactError {}
