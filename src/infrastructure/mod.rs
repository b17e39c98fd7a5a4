pub mod core;
pub mod mock;
pub mod prediction_api;

pub use self::core::HttpClientFactory;
pub use mock::MockPredictionService;
pub use prediction_api::HttpPredictionClient;
