// Training artifacts: model, label mapping, reference schema

use std::path::{Path, PathBuf};

use rxsales_core::{LabelMapping, ReferenceSchema};
use rxsales_engine::RandomForest;

use crate::error::{ArtifactError, ArtifactKind};
use crate::json::read_artifact;

pub const DEFAULT_MODEL_FILE: &str = "random_forest_model.json";
pub const DEFAULT_LABEL_MAPPING_FILE: &str = "label_encoder.json";
pub const DEFAULT_SCHEMA_FILE: &str = "data_columns.json";

/// File names of the three artifacts within a model directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub model: String,
    pub label_mapping: String,
    pub schema: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL_FILE.into(),
            label_mapping: DEFAULT_LABEL_MAPPING_FILE.into(),
            schema: DEFAULT_SCHEMA_FILE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub label_mapping: PathBuf,
    pub schema: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: &Path, names: &ArtifactNames) -> Self {
        Self {
            model: dir.join(&names.model),
            label_mapping: dir.join(&names.label_mapping),
            schema: dir.join(&names.schema),
        }
    }
}

/// Everything one training run produced. All three must come from the same run;
/// nothing here can tell whether they did.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: RandomForest,
    pub labels: LabelMapping,
    pub schema: ReferenceSchema,
}

/// Load model, label mapping and schema, in that order. Fails on the first
/// artifact that is missing or malformed.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<Artifacts, ArtifactError> {
    let model: RandomForest = read_artifact(ArtifactKind::Model, &paths.model)?;
    log::debug!("loaded model with {} tree(s) from {}", model.trees().len(), paths.model.display());

    let labels: LabelMapping = read_artifact(ArtifactKind::LabelMapping, &paths.label_mapping)?;
    log::debug!("loaded {} label class(es) from {}", labels.len(), paths.label_mapping.display());

    let schema: ReferenceSchema = read_artifact(ArtifactKind::Schema, &paths.schema)?;
    log::debug!("loaded {} schema column(s) from {}", schema.len(), paths.schema.display());

    Ok(Artifacts { model, labels, schema })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxsales_engine::Regressor;
    use std::fs;
    use tempfile::tempdir;

    const MODEL: &str = r#"{"n_features": 2, "trees": [{
        "children_left": [1, -1, -1],
        "children_right": [2, -1, -1],
        "feature": [1, -2, -2],
        "threshold": [0.5, -2.0, -2.0],
        "value": [0.0, 10.0, 20.0]
    }]}"#;

    fn write_all(dir: &Path) {
        fs::write(dir.join(DEFAULT_MODEL_FILE), MODEL).unwrap();
        fs::write(dir.join(DEFAULT_LABEL_MAPPING_FILE), r#"{"classes": ["A", "B"]}"#).unwrap();
        fs::write(dir.join(DEFAULT_SCHEMA_FILE), r#"["Product Name", "Year"]"#).unwrap();
    }

    #[test]
    fn loads_all_three() {
        let dir = tempdir().unwrap();
        write_all(dir.path());
        let artifacts = load_artifacts(&ArtifactPaths::in_dir(dir.path(), &ArtifactNames::default())).unwrap();
        assert_eq!(artifacts.model.n_features(), 2);
        assert_eq!(artifacts.labels.encode("B"), Some(1));
        assert_eq!(artifacts.schema.len(), 2);
    }

    #[test]
    fn each_missing_file_is_reported() {
        for (file, kind) in [
            (DEFAULT_MODEL_FILE, ArtifactKind::Model),
            (DEFAULT_LABEL_MAPPING_FILE, ArtifactKind::LabelMapping),
            (DEFAULT_SCHEMA_FILE, ArtifactKind::Schema),
        ] {
            let dir = tempdir().unwrap();
            write_all(dir.path());
            fs::remove_file(dir.path().join(file)).unwrap();

            let err = load_artifacts(&ArtifactPaths::in_dir(dir.path(), &ArtifactNames::default()))
                .unwrap_err();
            assert!(matches!(err, ArtifactError::NotFound { .. }), "{file}: {err}");
            assert_eq!(err.kind(), kind);
            assert!(err.to_string().contains(file));
        }
    }

    #[test]
    fn custom_names_are_joined_to_dir() {
        let names = ArtifactNames {
            model: "m.json".into(),
            label_mapping: "l.json".into(),
            schema: "s.json".into(),
        };
        let paths = ArtifactPaths::in_dir(Path::new("/srv/models"), &names);
        assert_eq!(paths.model, PathBuf::from("/srv/models/m.json"));
        assert_eq!(paths.schema, PathBuf::from("/srv/models/s.json"));
    }

    #[test]
    fn broken_tree_is_invalid_model() {
        let dir = tempdir().unwrap();
        write_all(dir.path());
        fs::write(dir.path().join(DEFAULT_MODEL_FILE), r#"{"n_features": 2, "trees": []}"#).unwrap();
        let err = load_artifacts(&ArtifactPaths::in_dir(dir.path(), &ArtifactNames::default())).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid { kind: ArtifactKind::Model, .. }), "got {err:?}");
    }
}
