use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use crate::session::{SessionStore, UserId};
use crate::utils::{format_day_length, format_local_time, format_reply_timestamp};
use crate::weather::types::WeatherReport;
use crate::weather::WeatherProvider;

pub const COMMANDS: [&str; 2] = [
    "/start - Get weather information",
    "/suggestions - Get suggestions for things to do",
];

pub const CHECK_CITY_NAME: &str = "\u{2620} Check the city name \u{2620}";
pub const CITY_REQUIRED: &str = "Please send me a city name first, then ask for /suggestions again.";
pub const SUGGESTIONS_FAILED: &str = "Oops! Something went wrong while getting weather information.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Suggestions,
    /// Anything else: the whole text is a city name.
    Weather(String),
}

impl Command {
    /// `/start@OtherBot` addresses a different bot and is not treated as a
    /// command. Arguments after the command word are ignored.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Self {
        let Some(rest) = text.strip_prefix('/') else {
            return Self::Weather(text.to_string());
        };

        let word = rest.split_whitespace().next().unwrap_or_default();
        let (name, mention) = match word.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (word, None),
        };

        if let (Some(mention), Some(me)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(me) {
                return Self::Weather(text.to_string());
            }
        }

        match name.to_ascii_lowercase().as_str() {
            "start" => Self::Start,
            "suggestions" => Self::Suggestions,
            _ => Self::Weather(text.to_string()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Suggestions => "suggestions",
            Self::Weather(_) => "weather",
        }
    }
}

/// Turns one inbound text into exactly one reply.
pub struct WeatherBot {
    provider: Arc<dyn WeatherProvider>,
    sessions: Arc<dyn SessionStore>,
    timezone: Tz,
    bot_username: Option<String>,
}

impl WeatherBot {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        sessions: Arc<dyn SessionStore>,
        timezone: Tz,
    ) -> Self {
        Self {
            provider,
            sessions,
            timezone,
            bot_username: None,
        }
    }

    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub async fn handle_text(&self, user: UserId, text: &str) -> String {
        let command = Command::parse(text, self.bot_username.as_deref());
        tracing::debug!(user = %user, command = command.name(), "handling message");

        match command {
            Command::Start => self.start(),
            Command::Suggestions => self.suggestions(user).await,
            Command::Weather(city) => self.weather(user, &city).await,
        }
    }

    fn start(&self) -> String {
        format!(
            "Hey, which city would you like to know the weather for today?\n\nAvailable commands:\n{}",
            COMMANDS.join("\n")
        )
    }

    async fn weather(&self, user: UserId, city: &str) -> String {
        match self.provider.current_weather(city).await {
            Ok(report) => {
                self.sessions.remember_city(user, report.city.clone());
                format_weather_report(&report, Utc::now(), self.timezone)
            }
            Err(e) => {
                tracing::warn!(user = %user, city, data_shape = e.is_data_shape(), "weather lookup failed: {}", e);
                CHECK_CITY_NAME.to_string()
            }
        }
    }

    async fn suggestions(&self, user: UserId) -> String {
        let Some(city) = self.sessions.last_city(user) else {
            return CITY_REQUIRED.to_string();
        };

        match self.provider.current_weather(&city).await {
            Ok(report) => {
                if report.condition.activities().is_none() {
                    tracing::info!(condition = report.condition.code(), "no suggestions for condition");
                }
                report.condition.suggestions()
            }
            Err(e) => {
                tracing::warn!(user = %user, city = %city, "suggestions lookup failed: {}", e);
                SUGGESTIONS_FAILED.to_string()
            }
        }
    }
}

pub fn format_weather_report(report: &WeatherReport, generated_at: DateTime<Utc>, tz: Tz) -> String {
    format!(
        "***{}***\n\
         Weather in {}:\n\
         Temperature: {}°C {}\n\
         Humidity: {}%\n\
         Pressure: {} hPa\n\
         Wind: {} m/s\n\
         Sunrise: {}\n\
         Sunset: {}\n\
         Length of the day: {}\n\
         ***Have a nice day!***\n\n\
         Would you like me to suggest things to do today? Use the /suggestions command.",
        format_reply_timestamp(generated_at, tz),
        report.city,
        report.temp_c,
        report.condition.label(),
        report.humidity,
        report.pressure_hpa,
        report.wind_ms,
        format_local_time(report.sunrise, tz),
        format_local_time(report.sunset, tz),
        format_day_length(report.day_length()),
    )
}
