use chrono_tz::Tz;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_api_base_url: String,
    pub telegram_poll_timeout_secs: u64,
    pub telegram_webhook_url: Option<String>,
    pub telegram_webhook_secret: Option<String>,
    pub openweather_api_key: String,
    pub openweather_base_url: String,
    pub openweather_weather_path: String,
    pub openweather_timeout_secs: u64,
    pub bind_addr: String,
    pub app_timezone: Tz,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN not set"))?,
            telegram_api_base_url: env::var("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            telegram_poll_timeout_secs: parse_var("TELEGRAM_POLL_TIMEOUT_SECS", 30)?,
            telegram_webhook_url: optional_var("TELEGRAM_WEBHOOK_URL"),
            telegram_webhook_secret: optional_var("TELEGRAM_WEBHOOK_SECRET"),
            openweather_api_key: env::var("OPEN_WEATHER_TOKEN")
                .or_else(|_| env::var("OPENWEATHER_API_KEY"))
                .map_err(|_| anyhow::anyhow!("OPEN_WEATHER_TOKEN not set"))?,
            openweather_base_url: env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org".to_string()),
            openweather_weather_path: env::var("OPENWEATHER_WEATHER_PATH")
                .unwrap_or_else(|_| "/data/2.5/weather".to_string()),
            openweather_timeout_secs: parse_var("OPENWEATHER_TIMEOUT_SECS", 10)?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            app_timezone: parse_timezone(
                &env::var("APP_TIMEZONE").unwrap_or_else(|_| "UTC".to_string()),
            )?,
        })
    }

    #[cfg(test)]
    pub fn for_tests(openweather_base_url: &str, telegram_api_base_url: &str) -> Self {
        Config {
            telegram_bot_token: "test-token".to_string(),
            telegram_api_base_url: telegram_api_base_url.to_string(),
            telegram_poll_timeout_secs: 0,
            telegram_webhook_url: None,
            telegram_webhook_secret: None,
            openweather_api_key: "test-key".to_string(),
            openweather_base_url: openweather_base_url.to_string(),
            openweather_weather_path: "/data/2.5/weather".to_string(),
            openweather_timeout_secs: 1,
            bind_addr: "127.0.0.1:0".to_string(),
            app_timezone: Tz::UTC,
        }
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var(key: &str, default: u64) -> anyhow::Result<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} must be a whole number of seconds: {}", key, e)),
        Err(_) => Ok(default),
    }
}

pub fn parse_timezone(name: &str) -> anyhow::Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("APP_TIMEZONE {:?} is not a known timezone: {}", name, e))
}
