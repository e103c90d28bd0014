// rxsales CLI - single-record sales prediction
//
// stdout carries exactly one value (the prediction) on success and nothing on
// failure. Diagnostics and logs go to stderr.

mod exit_codes;
mod predict;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use rxsales_core::LabelMapping;
use rxsales_engine::EngineError;
use rxsales_io::ArtifactError;
use rxsales_recon::ReconError;

#[derive(Parser, Debug)]
#[command(name = "predict")]
#[command(about = "Predict monthly sales for a product from a trained model")]
#[command(version, long_version = long_version())]
#[command(after_help = "\
Examples:
  predict Paracetamol 2023 march
  predict Ibuprofen 2024 sep --json
  predict Paracetamol 2023 march --model-dir /srv/models
  predict Amoxicillin 2023 7 --sales-category high --reason Promotion")]
pub struct Cli {
    /// Product name exactly as it appeared in the training data
    pub product_name: String,

    /// Calendar year (e.g. 2023)
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month name ("march"), abbreviation ("mar"), or number (3)
    pub month: String,

    /// Directory containing the model, label mapping and schema files
    #[arg(long, env = "RXSALES_MODEL_DIR", value_name = "DIR")]
    pub model_dir: Option<PathBuf>,

    /// Settings file (default: <config dir>/rxsales/settings.toml)
    #[arg(long, env = "RXSALES_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the default Sales Category
    #[arg(long, value_name = "VALUE")]
    pub sales_category: Option<String>,

    /// Override the default Reason
    #[arg(long, value_name = "VALUE")]
    pub reason: Option<String>,

    /// Override the default Medicine Type
    #[arg(long, value_name = "VALUE")]
    pub medicine_type: Option<String>,

    /// Override the default Medicine Category
    #[arg(long, value_name = "VALUE")]
    pub medicine_category: Option<String>,

    /// Print a JSON object instead of the bare number
    #[arg(long)]
    pub json: bool,

    /// Debug logging to stderr (RUST_LOG also honored)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
            "\nmodel:   random forest (json)",
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
            "\nmodel:   random forest (json)",
        )
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // `log` records from the library crates are bridged into this subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_SUCCESS),
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    init_logging(cli.verbose);

    match predict::cmd_predict(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

/// How many known products to list in an unknown-product hint.
const HINT_MAX_CLASSES: usize = 8;

impl CliError {
    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn config(err: rxsales_config::ConfigError) -> Self {
        Self::general(err.to_string())
    }

    pub fn artifact(err: ArtifactError) -> Self {
        let not_found = matches!(err, ArtifactError::NotFound { .. });
        let e = Self::general(err.to_string());
        if not_found {
            e.with_hint("pass --model-dir or set RXSALES_MODEL_DIR to the directory holding the model files")
        } else {
            e
        }
    }

    pub fn recon(err: ReconError, labels: &LabelMapping) -> Self {
        let hint = match &err {
            ReconError::UnknownCategory { .. } => {
                let classes = labels.classes();
                let shown: Vec<&str> = classes.iter().take(HINT_MAX_CLASSES).map(String::as_str).collect();
                let more = classes.len().saturating_sub(shown.len());
                Some(if more > 0 {
                    format!("known products include: {} (and {more} more)", shown.join(", "))
                } else {
                    format!("known products: {}", shown.join(", "))
                })
            }
            ReconError::InvalidDate { .. } => {
                Some("month must be a month name (march), abbreviation (mar), or number 1-12".to_string())
            }
        };
        Self { code: EXIT_ERROR, message: err.to_string(), hint }
    }

    pub fn engine(err: EngineError) -> Self {
        let hint = match err {
            EngineError::FeatureCountMismatch { .. } => {
                Some("model and schema files must come from the same training run".to_string())
            }
            _ => None,
        };
        Self { code: EXIT_ERROR, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
