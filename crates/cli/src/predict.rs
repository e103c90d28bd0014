//! `predict <product_name> <year> <month>` - one reconciled row, one inference.

use serde::Serialize;

use rxsales_config::Settings;
use rxsales_core::{CategoryDefaults, PartialRecord};
use rxsales_io::{load_artifacts, ArtifactPaths};

use crate::{Cli, CliError};

/// `--json` output.
#[derive(Debug, Serialize)]
struct PredictionOutput<'a> {
    product: &'a str,
    year: i32,
    month: &'a str,
    predicted_sales: f64,
}

/// Settings defaults with any command-line overrides applied.
fn effective_defaults(cli: &Cli, settings: &Settings) -> CategoryDefaults {
    let mut defaults = settings.defaults.clone();
    let overrides = [
        (&cli.sales_category, &mut defaults.sales_category),
        (&cli.reason, &mut defaults.reason),
        (&cli.medicine_type, &mut defaults.medicine_type),
        (&cli.medicine_category, &mut defaults.medicine_category),
    ];
    for (flag, slot) in overrides {
        if let Some(value) = flag {
            *slot = value.clone();
        }
    }
    defaults
}

pub fn cmd_predict(cli: &Cli) -> Result<(), CliError> {
    let settings = Settings::load(cli.config.as_deref()).map_err(CliError::config)?;

    let model_dir = settings.model_dir(cli.model_dir.as_deref());
    let paths = ArtifactPaths::in_dir(&model_dir, &settings.artifacts.names());
    log::debug!("model directory: {}", model_dir.display());

    let artifacts = load_artifacts(&paths).map_err(CliError::artifact)?;

    let defaults = effective_defaults(cli, &settings);
    let record = PartialRecord::with_defaults(&cli.product_name, cli.year, &cli.month, &defaults);

    let row = rxsales_recon::reconcile(&record, &artifacts.labels, &artifacts.schema)
        .map_err(|e| CliError::recon(e, &artifacts.labels))?;
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&row) {
            log::debug!("feature row: {json}");
        }
    }

    let predicted = rxsales_engine::predict_row(&artifacts.model, &row).map_err(CliError::engine)?;

    if cli.json {
        let output = PredictionOutput {
            product: &cli.product_name,
            year: cli.year,
            month: &record.month,
            predicted_sales: predicted,
        };
        let json = serde_json::to_string(&output)
            .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;
        println!("{json}");
    } else {
        println!("{predicted}");
    }

    Ok(())
}
