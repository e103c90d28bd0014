// JSON artifact reading

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{ArtifactError, ArtifactKind};

/// Read and deserialize one artifact file.
///
/// Syntax errors map to `Parse`; type or validation failures raised while
/// building the value (duplicate columns, broken trees) map to `Invalid`.
pub fn read_artifact<T: DeserializeOwned>(kind: ArtifactKind, path: &Path) -> Result<T, ArtifactError> {
    let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArtifactError::NotFound { kind, path: path.to_path_buf() },
        _ => ArtifactError::Read { kind, path: path.to_path_buf(), message: e.to_string() },
    })?;

    serde_json::from_str(&data).map_err(|e| {
        let message = e.to_string();
        let path = path.to_path_buf();
        match e.classify() {
            Category::Data => ArtifactError::Invalid { kind, path, message },
            Category::Io => ArtifactError::Read { kind, path, message },
            Category::Syntax | Category::Eof => ArtifactError::Parse { kind, path, message },
        }
    })
}
