use crate::application::client::PredictionOutcome;
use crate::domain::errors::{ErrorKind, PredictError};
use crate::domain::prediction::DiagnosisClass;
use chrono::{DateTime, Utc};
use tracing::warn;

/// The three text outputs of the screen plus bookkeeping for the status line.
///
/// Owned by the UI thread; every mutation goes through the methods below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub result_text: String,
    pub probability_text: String,
    pub error_text: String,
    pub error_kind: Option<ErrorKind>,
    pub class: Option<DiagnosisClass>,
    pub in_flight: usize,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DisplayState {
    /// A new action clears the previous error; earlier results stay until replaced.
    pub fn begin_action(&mut self) {
        self.error_text.clear();
        self.error_kind = None;
    }

    pub fn request_sent(&mut self) {
        self.in_flight += 1;
    }

    pub fn show_error(&mut self, error: &PredictError) {
        self.error_text = error.to_string();
        self.error_kind = Some(error.kind());
    }

    pub fn apply(&mut self, outcome: PredictionOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.updated_at = Some(outcome.completed_at);

        match outcome.result {
            Ok(prediction) => {
                self.class = Some(prediction.class);
                self.result_text = prediction.result_text();
                self.probability_text = prediction.probability_text();
            }
            Err(error) => {
                warn!(
                    "Request {} failed ({}): {}",
                    outcome.request_id,
                    error.kind(),
                    error
                );
                self.show_error(&error);
            }
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight > 0
    }
}
