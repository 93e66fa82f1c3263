use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::ApiDefinition;
use crate::providers::request::{ProviderRequest, ProviderRequestError};
use crate::MESSAGES_PATH;

// Enum for all supported Anthropic APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnthropicApi {
    Messages,
}

impl ApiDefinition for AnthropicApi {
    fn endpoint(&self) -> &'static str {
        match self {
            AnthropicApi::Messages => MESSAGES_PATH,
        }
    }

    fn from_endpoint(endpoint: &str) -> Option<Self> {
        match endpoint {
            MESSAGES_PATH => Some(AnthropicApi::Messages),
            _ => None,
        }
    }

    // The messages API rejects an empty `messages` array.
    fn requires_non_empty_history(&self) -> bool {
        match self {
            AnthropicApi::Messages => true,
        }
    }

    fn all_variants() -> Vec<Self> {
        vec![AnthropicApi::Messages]
    }
}

/// A conversation turn in the messages API. System instructions never
/// appear here; they travel in the separate `system` field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessagesMessage {
    pub role: String,
    pub content: String,
}

/// The split shape: every system instruction folded into one string, and
/// the turns on their own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessagesPayload {
    pub system: String,
    pub messages: Vec<MessagesMessage>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessagesRequest {
    pub model: String,
    pub system: Option<String>,
    pub messages: Vec<MessagesMessage>,
    pub max_tokens: i64,
}

impl MessagesRequest {
    /// Wraps a split payload into a request body. An empty system string is
    /// dropped from the body rather than sent as `""`.
    pub fn from_payload(
        model: impl Into<String>,
        payload: MessagesPayload,
        max_tokens: i64,
    ) -> Self {
        let system = Some(payload.system).filter(|s| !s.is_empty());
        Self {
            model: model.into(),
            system,
            messages: payload.messages,
            max_tokens,
        }
    }
}

impl ProviderRequest for MessagesRequest {
    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> i64 {
        self.max_tokens
    }

    fn extract_messages_text(&self) -> String {
        self.system
            .iter()
            .map(String::as_str)
            .chain(self.messages.iter().map(|m| m.content.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_bytes(&self) -> Result<Vec<u8>, ProviderRequestError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn turn(role: &str, content: &str) -> MessagesMessage {
        MessagesMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_messages_request_omits_empty_system() {
        let payload = MessagesPayload {
            system: String::new(),
            messages: vec![turn("user", "Let's begin.")],
        };
        let req = MessagesRequest::from_payload("claude-3-opus", payload, 1024);
        assert_eq!(req.system, None);

        let value: serde_json::Value = serde_json::from_slice(&req.to_bytes().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "claude-3-opus",
                "messages": [{"role": "user", "content": "Let's begin."}],
                "max_tokens": 1024
            })
        );
    }

    #[test]
    fn test_messages_request_keeps_system() {
        let payload = MessagesPayload {
            system: "a\n\nb".to_string(),
            messages: vec![turn("user", "hi"), turn("assistant", "hello")],
        };
        let req = MessagesRequest::from_payload("claude-3-sonnet", payload, 16384);

        assert_eq!(req.system.as_deref(), Some("a\n\nb"));
        assert_eq!(req.model(), "claude-3-sonnet");
        assert_eq!(req.max_tokens(), 16384);
        assert_eq!(req.extract_messages_text(), "a\n\nb hi hello");
    }
}
