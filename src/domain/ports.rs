use crate::domain::clinical::FeatureRecord;
use crate::domain::errors::PredictionError;
use crate::domain::prediction::Prediction;
use async_trait::async_trait;

/// Remote classifier that turns one validated record into a prediction.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, record: &FeatureRecord) -> Result<Prediction, PredictionError>;
}
