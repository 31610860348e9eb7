pub mod condition;
#[cfg(test)]
pub mod mock;
pub mod openweather;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;
use types::WeatherReport;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    /// True when the provider answered but the payload was not a usable report.
    pub fn is_data_shape(&self) -> bool {
        matches!(self, Self::JsonParsing(_) | Self::InvalidResponse(_))
    }
}

/// Source of current weather conditions for a named city.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
