use super::types::{CurrentWeatherResponse, WeatherReport};
use super::{WeatherError, WeatherProvider};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub struct OpenWeatherClient {
    client: Client,
    config: Config,
}

impl OpenWeatherClient {
    pub fn new(config: Config) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(concat!("WeatherBot/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.openweather_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub async fn get_current_weather(
        &self,
        city: &str,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        let url = format!(
            "{}{}",
            self.config.openweather_base_url, self.config.openweather_weather_path
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.openweather_api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(city.to_string())),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(WeatherError::ApiError(format!("HTTP {}: {}", status, error_text)))
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self.get_current_weather(city).await?;
        WeatherReport::try_from(response)
    }
}
