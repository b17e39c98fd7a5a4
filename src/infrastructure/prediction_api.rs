//! HTTP adapter for the remote heart-disease model.
//!
//! One `POST <endpoint>` per call with the feature record as a JSON object.
//! Replies are classified into network, server, and parse failures; nothing
//! is retried.

use crate::config::ClientEnvConfig;
use crate::domain::clinical::FeatureRecord;
use crate::domain::errors::PredictionError;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::{Prediction, PredictionResponse};
use crate::infrastructure::core::HttpClientFactory;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub struct HttpPredictionClient {
    client: Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    pub fn new(config: &ClientEnvConfig) -> Self {
        Self {
            client: HttpClientFactory::create_client(config),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict(&self, record: &FeatureRecord) -> Result<Prediction, PredictionError> {
        let body = record.to_json().map_err(|e| PredictionError::Parse {
            reason: format!("failed to encode request: {}", e),
        })?;
        debug!("Posting {} byte payload to {}", body.len(), self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;
        info!("Prediction server responded with {}", status);

        if !status.is_success() {
            warn!("Prediction server returned error status {}", status);
            return Err(PredictionError::Server {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_prediction_body(&text)
    }
}

/// Interprets the body of a 2xx reply.
///
/// The model server answers inference failures with `{"error": "..."}` and a
/// 200 status; that text is surfaced in the parse error.
pub fn parse_prediction_body(text: &str) -> Result<Prediction, PredictionError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| PredictionError::Parse {
            reason: e.to_string(),
        })?;

    if value.get("prediction").is_none()
        && let Some(server_error) = value.get("error").and_then(|e| e.as_str())
    {
        return Err(PredictionError::Parse {
            reason: format!("server reported: {}", server_error),
        });
    }

    let response: PredictionResponse =
        serde_json::from_value(value).map_err(|e| PredictionError::Parse {
            reason: e.to_string(),
        })?;

    Ok(response.into())
}

/// Flattens the reqwest error chain so the root cause (refused, DNS, ...) is visible.
fn network_error(err: reqwest::Error) -> PredictionError {
    let reason = format!("{:#}", anyhow::Error::new(err));
    warn!("Prediction request failed: {}", reason);
    PredictionError::Network { reason }
}
