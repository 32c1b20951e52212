use crate::error::PredictionError;
use ndarray::Array2;

/// Seam between the HTTP handlers and the concrete classifier.
///
/// Takes a single-row feature matrix and returns the predicted class index.
/// The call is synchronous: inference is in-process and bounded.
pub trait ModelService: Send + Sync + 'static {
    fn predict(&self, input: Array2<f32>) -> Result<i64, PredictionError>;
}
