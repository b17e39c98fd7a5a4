use crate::application::predict_action::PredictAction;
use crate::domain::clinical::FeatureRecord;
use crate::domain::errors::PredictError;
use crate::domain::prediction::Prediction;
use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};
use uuid::Uuid;

/// Resolution of one submitted request, delivered back to the UI thread.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub request_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub result: Result<Prediction, PredictError>,
}

/// Bridges the UI thread and the async runtime.
///
/// Each `submit` spawns one task on the runtime; that task sends exactly one
/// outcome on the channel. The UI thread is the only reader, so display state
/// is mutated from one place only. Overlapping submissions are allowed and
/// resolve independently, in completion order.
pub struct PredictionClient {
    runtime: Handle,
    action: PredictAction,
    outcome_tx: Sender<PredictionOutcome>,
    outcome_rx: Receiver<PredictionOutcome>,
}

impl PredictionClient {
    pub fn new(runtime: Handle, action: PredictAction) -> Self {
        let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
        Self {
            runtime,
            action,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn submit(&self, record: FeatureRecord) -> Uuid {
        let request_id = Uuid::new_v4();
        let action = self.action.clone();
        let tx = self.outcome_tx.clone();

        info!("Submitting prediction request {}", request_id);
        debug!("Request {} payload: {:?}", request_id, record);

        self.runtime.spawn(async move {
            let result = action.run_record(&record).await;
            let outcome = PredictionOutcome {
                request_id,
                completed_at: Utc::now(),
                result,
            };
            if tx.send(outcome).is_err() {
                debug!("Request {} finished after the screen closed", request_id);
            }
        });

        request_id
    }

    /// Non-blocking; call once per frame until it returns `None`.
    pub fn poll_next(&self) -> Option<PredictionOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Blocking wait for callers outside a UI loop
    pub fn wait_next(&self, timeout: Duration) -> Option<PredictionOutcome> {
        match self.outcome_rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
