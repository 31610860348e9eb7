use super::condition::Condition;
use super::types::WeatherReport;
use super::{WeatherError, WeatherProvider};
use async_trait::async_trait;
use chrono::DateTime;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory provider that answers from a fixed table and records every
/// city it was asked about.
pub struct MockWeatherProvider {
    reports: Mutex<HashMap<String, WeatherReport>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<bool>,
}

impl MockWeatherProvider {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
        }
    }

    pub fn with_report(self, query: &str, report: WeatherReport) -> Self {
        self.reports.lock().unwrap().insert(query.to_string(), report);
        self
    }

    /// Makes every later call fail as if the provider were down.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        self.calls.lock().unwrap().push(city.to_string());

        if *self.failing.lock().unwrap() {
            return Err(WeatherError::ApiError("HTTP 500 Internal Server Error".to_string()));
        }

        self.reports
            .lock()
            .unwrap()
            .get(city)
            .cloned()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))
    }
}

pub fn mock_report(city: &str, condition: Condition) -> WeatherReport {
    WeatherReport {
        city: city.to_string(),
        temp_c: 18.5,
        humidity: 60.0,
        pressure_hpa: 1013.0,
        wind_ms: 3.2,
        sunrise: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        sunset: DateTime::from_timestamp(1_700_030_000, 0).unwrap(),
        condition,
    }
}
