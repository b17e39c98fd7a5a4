use crate::application::client::PredictionClient;
use crate::application::display::DisplayState;
use crate::application::validation::{RawClinicalInput, validate_input};
use crate::domain::errors::PredictError;
use tracing::info;

/// Toolkit-independent state of the prediction screen.
pub struct PredictionScreen {
    pub form: RawClinicalInput,
    pub display: DisplayState,
    client: PredictionClient,
}

impl PredictionScreen {
    pub fn new(client: PredictionClient) -> Self {
        Self {
            form: RawClinicalInput::default(),
            display: DisplayState::default(),
            client,
        }
    }

    /// Handler for the Predict button. Invalid input never reaches the network.
    pub fn on_predict(&mut self) {
        self.display.begin_action();

        match validate_input(&self.form) {
            Ok(record) => {
                self.client.submit(record);
                self.display.request_sent();
            }
            Err(err) => {
                info!("Prediction blocked by validation: {}", err);
                self.display.show_error(&PredictError::from(err));
            }
        }
    }

    /// Drains finished requests into the display. Returns how many were applied.
    pub fn update(&mut self) -> usize {
        let mut applied = 0;
        while let Some(outcome) = self.client.poll_next() {
            self.display.apply(outcome);
            applied += 1;
        }
        applied
    }

    pub fn reset_form(&mut self) {
        self.form = RawClinicalInput::default();
    }
}
