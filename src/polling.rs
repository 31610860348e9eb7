use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::bot::WeatherBot;
use crate::telegram::client::TelegramClient;
use crate::telegram::handle_update;
use crate::telegram::types::Update;

const ERROR_PAUSE: Duration = Duration::from_secs(5);

/// Long-polls Telegram until `shutdown` resolves. Updates within a batch are
/// handled in arrival order, so one user's messages are answered in sequence.
pub async fn run_polling(
    bot: &WeatherBot,
    telegram: &TelegramClient,
    shutdown: impl Future<Output = ()>,
) {
    tokio::pin!(shutdown);
    let mut offset = None;

    loop {
        let updates = tokio::select! {
            _ = &mut shutdown => break,
            result = telegram.get_updates(offset) => result,
        };

        match updates {
            Ok(updates) => {
                offset = next_offset(offset, &updates);
                for update in &updates {
                    if let Err(e) = handle_update(bot, telegram, update).await {
                        tracing::error!(update_id = update.update_id, "failed to send reply: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::error!("getUpdates failed: {}", e);
                tokio::select! {
                    _ = &mut shutdown => break,
                    _ = sleep(ERROR_PAUSE) => {}
                }
            }
        }
    }

    tracing::info!("polling stopped");
}

/// Acknowledges everything up to the newest update in the batch.
pub fn next_offset(current: Option<i64>, updates: &[Update]) -> Option<i64> {
    updates
        .iter()
        .map(|u| u.update_id + 1)
        .max()
        .max(current)
}
