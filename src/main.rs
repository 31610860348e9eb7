use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod polling;
mod routes;
mod session;
mod telegram;
mod utils;
mod weather;

use bot::WeatherBot;
use config::Config;
use routes::{create_router, AppState};
use session::InMemorySessionStore;
use telegram::client::TelegramClient;
use weather::openweather::OpenWeatherClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let weather_client = Arc::new(OpenWeatherClient::new(config.clone())?);
    let telegram = Arc::new(TelegramClient::new(&config)?);

    let me = telegram.get_me().await?;
    let mut bot = WeatherBot::new(
        weather_client,
        Arc::new(InMemorySessionStore::new()),
        config.app_timezone,
    );
    if let Some(username) = me.username.as_deref() {
        bot = bot.with_bot_username(username);
    }
    let bot = Arc::new(bot);

    match config.telegram_webhook_url.as_deref() {
        Some(webhook_url) => {
            telegram
                .set_webhook(webhook_url, config.telegram_webhook_secret.as_deref())
                .await?;

            let state = AppState {
                bot,
                telegram,
                webhook_secret: config.telegram_webhook_secret.as_deref().map(Arc::from),
            };
            let app = create_router(state);

            let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
            tracing::info!(
                bot = me.username.as_deref().unwrap_or(&me.first_name),
                "Weather bot serving webhook on http://{}",
                config.bind_addr
            );

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        None => {
            telegram.delete_webhook().await?;
            tracing::info!(
                bot = me.username.as_deref().unwrap_or(&me.first_name),
                "Weather bot running in polling mode"
            );

            polling::run_polling(&bot, &telegram, shutdown_signal()).await;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
