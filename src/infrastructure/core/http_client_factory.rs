use crate::config::ClientEnvConfig;
use reqwest::Client;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for prediction requests.
    ///
    /// No retry middleware: each predict action maps to exactly one request.
    /// A timeout is only set when one is configured.
    pub fn create_client(config: &ClientEnvConfig) -> Client {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(2)
            .user_agent(config.user_agent.clone());

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
    }
}
