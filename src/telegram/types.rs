use serde::{Deserialize, Serialize};

/// Bot API response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SetWebhook<'a> {
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<&'a str>,
    pub allowed_updates: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_update() {
        let update: Update = serde_json::from_value(serde_json::json!({
            "update_id": 10,
            "message": {
                "message_id": 42,
                "date": 1700000000,
                "from": { "id": 7, "is_bot": false, "first_name": "Ada", "language_code": "en" },
                "chat": { "id": 7, "type": "private", "first_name": "Ada" },
                "text": "Paris"
            }
        }))
        .unwrap();

        let message = update.message.unwrap();
        assert_eq!(message.message_id, 42);
        assert_eq!(message.from.unwrap().id, 7);
        assert_eq!(message.text.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_non_message_update() {
        let update: Update = serde_json::from_value(serde_json::json!({
            "update_id": 11,
            "edited_message": { "message_id": 1, "chat": { "id": 1, "type": "private" }, "date": 0 }
        }))
        .unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn test_error_envelope() {
        let response: ApiResponse<bool> = serde_json::from_value(serde_json::json!({
            "ok": false,
            "error_code": 401,
            "description": "Unauthorized"
        }))
        .unwrap();
        assert!(!response.ok);
        assert!(response.result.is_none());
        assert_eq!(response.description.as_deref(), Some("Unauthorized"));
    }
}
