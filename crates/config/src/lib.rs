// Configuration loading

pub mod settings;

pub use settings::{ArtifactSettings, ConfigError, Settings};
