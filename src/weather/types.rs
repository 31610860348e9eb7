use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::WeatherError;

// Wire format of GET /data/2.5/weather. Only the fields the bot reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub main: CurrentWeatherMain,
    pub weather: Vec<CurrentWeatherCondition>,
    pub wind: CurrentWeatherWind,
    pub sys: CurrentWeatherSys,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherMain {
    pub temp: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherCondition {
    pub main: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherWind {
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherSys {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temp_c: f64,
    pub humidity: f64,
    pub pressure_hpa: f64,
    pub wind_ms: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub condition: Condition,
}

impl WeatherReport {
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }
}

impl TryFrom<CurrentWeatherResponse> for WeatherReport {
    type Error = WeatherError;

    fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let condition = response
            .weather
            .first()
            .map(|w| Condition::from_code(&w.main))
            .ok_or_else(|| WeatherError::InvalidResponse("empty weather list".to_string()))?;

        Ok(Self {
            city: response.name,
            temp_c: response.main.temp,
            humidity: response.main.humidity,
            pressure_hpa: response.main.pressure,
            wind_ms: response.wind.speed,
            sunrise: from_epoch(response.sys.sunrise, "sunrise")?,
            sunset: from_epoch(response.sys.sunset, "sunset")?,
            condition,
        })
    }
}

fn from_epoch(secs: i64, field: &str) -> Result<DateTime<Utc>, WeatherError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| WeatherError::InvalidResponse(format!("{} out of range: {}", field, secs)))
}
