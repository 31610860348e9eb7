pub mod client;
pub mod types;

use crate::bot::WeatherBot;
use crate::session::UserId;
use client::{TelegramClient, TelegramError};
use types::Update;

/// Runs one update through the bot and sends the reply back to its chat.
/// Updates without a text message from a user are ignored.
pub async fn handle_update(
    bot: &WeatherBot,
    telegram: &TelegramClient,
    update: &Update,
) -> Result<(), TelegramError> {
    let Some(message) = update.message.as_ref() else {
        tracing::debug!(update_id = update.update_id, "ignoring non-message update");
        return Ok(());
    };
    let (Some(from), Some(text)) = (message.from.as_ref(), message.text.as_deref()) else {
        tracing::debug!(update_id = update.update_id, "ignoring message without text");
        return Ok(());
    };

    let reply = bot.handle_text(UserId(from.id), text).await;
    telegram
        .send_message(message.chat.id, &reply, Some(message.message_id))
        .await?;
    Ok(())
}
