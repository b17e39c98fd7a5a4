use crate::domain::clinical::FeatureRecord;
use crate::domain::errors::PredictionError;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::{DiagnosisClass, Prediction};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Scripted stand-in for the remote model.
///
/// Replies are served in order; once the script runs out the fallback reply
/// is repeated. Every record received is kept for inspection.
#[derive(Clone)]
pub struct MockPredictionService {
    script: Arc<RwLock<VecDeque<Result<Prediction, PredictionError>>>>,
    fallback: Result<Prediction, PredictionError>,
    received: Arc<RwLock<Vec<FeatureRecord>>>,
    latency: Option<Duration>,
}

impl MockPredictionService {
    pub fn new() -> Self {
        Self::always(Ok(Prediction::new(DiagnosisClass::NoHeartDisease, 0.1)))
    }

    pub fn always(reply: Result<Prediction, PredictionError>) -> Self {
        Self {
            script: Arc::new(RwLock::new(VecDeque::new())),
            fallback: reply,
            received: Arc::new(RwLock::new(Vec::new())),
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn push_reply(&self, reply: Result<Prediction, PredictionError>) {
        self.script.write().await.push_back(reply);
    }

    pub async fn received(&self) -> Vec<FeatureRecord> {
        self.received.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.received.read().await.len()
    }
}

impl Default for MockPredictionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(&self, record: &FeatureRecord) -> Result<Prediction, PredictionError> {
        self.received.write().await.push(record.clone());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let reply = self
            .script
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        debug!(
            "MockPredictionService: answering age={} with {}",
            record.age,
            match &reply {
                Ok(p) => p.class.label().to_string(),
                Err(e) => e.to_string(),
            }
        );
        reply
    }
}
