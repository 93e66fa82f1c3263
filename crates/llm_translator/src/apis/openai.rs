use serde::{Deserialize, Serialize};

use super::ApiDefinition;
use crate::providers::request::{ProviderRequest, ProviderRequestError};
use crate::CHAT_COMPLETIONS_PATH;

// Enum for all supported OpenAI APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenAIApi {
    ChatCompletions,
}

impl ApiDefinition for OpenAIApi {
    fn endpoint(&self) -> &'static str {
        match self {
            OpenAIApi::ChatCompletions => CHAT_COMPLETIONS_PATH,
        }
    }

    fn from_endpoint(endpoint: &str) -> Option<Self> {
        match endpoint {
            CHAT_COMPLETIONS_PATH => Some(OpenAIApi::ChatCompletions),
            _ => None,
        }
    }

    fn requires_non_empty_history(&self) -> bool {
        match self {
            OpenAIApi::ChatCompletions => false,
        }
    }

    fn all_variants() -> Vec<Self> {
        vec![OpenAIApi::ChatCompletions]
    }
}

/// One record of the flat message list. System instructions and
/// conversation turns share this shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatCompletionsRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: i64,
}

impl ProviderRequest for ChatCompletionsRequest {
    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> i64 {
        self.max_tokens
    }

    fn extract_messages_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_bytes(&self) -> Result<Vec<u8>, ProviderRequestError> {
        Ok(serde_json::to_vec(self)?)
    }
}
