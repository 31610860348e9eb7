use super::types::*;
use crate::config::Config;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

const ALLOWED_UPDATES: [&str; 1] = ["message"];

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

pub struct TelegramClient {
    client: Client,
    base_url: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .user_agent(concat!("WeatherBot/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            base_url: format!(
                "{}/bot{}",
                config.telegram_api_base_url.trim_end_matches('/'),
                config.telegram_bot_token
            ),
            poll_timeout_secs: config.telegram_poll_timeout_secs,
        })
    }

    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({}), None).await
    }

    /// Long-polls for new updates starting at `offset`.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
        let request = GetUpdates {
            offset,
            timeout: self.poll_timeout_secs,
            allowed_updates: ALLOWED_UPDATES.to_vec(),
        };
        // The server holds the request open for up to `timeout` seconds.
        let deadline = Duration::from_secs(self.poll_timeout_secs + 10);
        self.call("getUpdates", &request, Some(deadline)).await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<Message, TelegramError> {
        let request = SendMessage {
            chat_id,
            text,
            reply_to_message_id,
        };
        self.call("sendMessage", &request, None).await
    }

    pub async fn set_webhook(&self, url: &str, secret_token: Option<&str>) -> Result<bool, TelegramError> {
        let request = SetWebhook {
            url,
            secret_token,
            allowed_updates: ALLOWED_UPDATES.to_vec(),
        };
        self.call("setWebhook", &request, None).await
    }

    pub async fn delete_webhook(&self) -> Result<bool, TelegramError> {
        self.call("deleteWebhook", &serde_json::json!({}), None).await
    }

    async fn call<B, T>(&self, method: &str, body: &B, timeout: Option<Duration>) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, method);
        let mut request = self.client.post(&url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;

        match envelope {
            ApiResponse { ok: true, result: Some(result), .. } => Ok(result),
            ApiResponse { description, .. } => Err(TelegramError::ApiError(format!(
                "{} failed with HTTP {}: {}",
                method,
                status,
                description.unwrap_or_else(|| "no description".to_string())
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> TelegramClient {
        TelegramClient::new(&Config::for_tests("http://127.0.0.1:9", &server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_as_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "chat_id": 7,
                "text": "hello",
                "reply_to_message_id": 42
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": { "message_id": 43, "chat": { "id": 7 }, "text": "hello" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let sent = client_for(&server).await.send_message(7, "hello", Some(42)).await.unwrap();
        assert_eq!(sent.message_id, 43);
    }

    #[tokio::test]
    async fn test_get_updates_passes_offset() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/getUpdates"))
            .and(body_partial_json(serde_json::json!({ "offset": 11, "timeout": 0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": [
                    { "update_id": 11, "message": {
                        "message_id": 1,
                        "from": { "id": 5, "is_bot": false, "first_name": "Bo" },
                        "chat": { "id": 5 },
                        "text": "/start"
                    } }
                ]
            })))
            .mount(&server)
            .await;

        let updates = client_for(&server).await.get_updates(Some(11)).await.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].update_id, 11);
    }

    #[tokio::test]
    async fn test_api_error_carries_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 401,
                "description": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_me().await.unwrap_err();
        match err {
            TelegramError::ApiError(message) => {
                assert!(message.contains("getMe"));
                assert!(message.contains("Unauthorized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_webhook_sends_secret() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/setWebhook"))
            .and(body_partial_json(serde_json::json!({
                "url": "https://bot.example.com/telegram/webhook",
                "secret_token": "s3cret"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true, "result": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let registered = client_for(&server)
            .await
            .set_webhook("https://bot.example.com/telegram/webhook", Some("s3cret"))
            .await
            .unwrap();
        assert!(registered);
    }
}
