use crate::application::validation::{RawClinicalInput, validate_input};
use crate::domain::clinical::FeatureRecord;
use crate::domain::errors::PredictError;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::Prediction;
use std::sync::Arc;
use tracing::info;

/// One complete predict action: validate, then a single request.
#[derive(Clone)]
pub struct PredictAction {
    service: Arc<dyn PredictionService>,
}

impl PredictAction {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self { service }
    }

    /// Validation failures return before the service is touched.
    pub async fn run(&self, input: &RawClinicalInput) -> Result<Prediction, PredictError> {
        let record = validate_input(input)?;
        self.run_record(&record).await
    }

    pub async fn run_record(&self, record: &FeatureRecord) -> Result<Prediction, PredictError> {
        let prediction = self.service.predict(record).await?;
        info!(
            "Prediction received: {} (p={:.4})",
            prediction.class, prediction.probability
        );
        Ok(prediction)
    }
}
