// Artifact I/O

pub mod artifacts;
pub mod error;
pub mod json;

pub use artifacts::{load_artifacts, ArtifactNames, ArtifactPaths, Artifacts};
pub use error::{ArtifactError, ArtifactKind};
