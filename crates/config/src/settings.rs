// Prediction settings
// Loaded from ~/.config/rxsales/settings.toml

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rxsales_core::CategoryDefaults;
use rxsales_io::ArtifactNames;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    Read { path: PathBuf, message: String },
    /// TOML parse / deserialization error.
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "cannot read settings {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "cannot parse settings {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the training artifacts live. Unset names use the standard file names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactSettings {
    /// Model directory. Relative paths resolve against the settings file's directory.
    pub dir: Option<PathBuf>,
    pub model: Option<String>,
    pub label_mapping: Option<String>,
    pub schema: Option<String>,
}

impl ArtifactSettings {
    pub fn names(&self) -> ArtifactNames {
        let defaults = ArtifactNames::default();
        ArtifactNames {
            model: self.model.clone().unwrap_or(defaults.model),
            label_mapping: self.label_mapping.clone().unwrap_or(defaults.label_mapping),
            schema: self.schema.clone().unwrap_or(defaults.schema),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub artifacts: ArtifactSettings,
    pub defaults: CategoryDefaults,
}

impl Settings {
    /// Default settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rxsales");
        config_dir.join("settings.toml")
    }

    /// Load settings. An explicit path must exist; the default path is
    /// optional and falls back to built-in defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    log::debug!("no settings at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                Self::load_file(&path)
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: match e.kind() {
                ErrorKind::NotFound => "file not found".to_string(),
                _ => e.to_string(),
            },
        })?;
        let mut settings = Self::from_toml(&contents).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        if let (Some(dir), Some(base)) = (settings.artifacts.dir.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(input: &str) -> Result<Self, String> {
        toml::from_str(input).map_err(|e| e.to_string())
    }

    /// Artifact directory: `override_dir` if given, else `artifacts.dir`,
    /// else the directory of the running executable, else `.`.
    pub fn model_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir.to_path_buf();
        }
        if let Some(ref dir) = self.artifacts.dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
