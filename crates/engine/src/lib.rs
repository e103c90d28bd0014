pub mod error;
pub mod forest;

pub use error::EngineError;
pub use forest::{RandomForest, RegressionTree};

use rxsales_core::FeatureRow;

/// A fitted model mapping one dense feature vector to one number.
pub trait Regressor {
    /// Width of the feature vector the model was fit on.
    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<f64, EngineError>;
}

/// Predict from a reconciled row (booleans become 0/1, schema order preserved).
pub fn predict_row(model: &dyn Regressor, row: &FeatureRow) -> Result<f64, EngineError> {
    let prediction = model.predict(&row.to_dense())?;
    log::debug!("prediction over {} feature(s): {prediction}", row.len());
    Ok(prediction)
}
