//! Plain message bodies returned by the HTTP API

use serde::{Deserialize, Serialize};

/// Body used for health checks and every error response.
///
/// `id` is kept for compatibility with existing clients and is empty unless
/// a caller has something to put there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(default)]
    pub id: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PING_MESSAGE;

    #[test]
    fn serializes_with_empty_id() {
        let body = serde_json::to_value(ApiMessage::new(PING_MESSAGE)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "Server is up and running", "id": ""})
        );
    }

    #[test]
    fn id_is_optional_when_reading() {
        let msg: ApiMessage = serde_json::from_str(r#"{"message":"Invalid ID"}"#).unwrap();
        assert_eq!(msg, ApiMessage::new("Invalid ID"));
    }
}
