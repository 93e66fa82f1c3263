//! Target shape registry
//!
//! Maps a model name onto the request shape its provider family expects.
//! The mapping is a prefix match on the model name, decided once per call;
//! each shape then has a single pure formatter.
//!
//! # Examples
//!
//! ```rust
//! use llm_translator::clients::shapes::SupportedAPIs;
//!
//! assert!(SupportedAPIs::from_model("gpt-4").is_ok());
//! assert!(SupportedAPIs::from_model("claude-3-opus").is_ok());
//! assert!(SupportedAPIs::from_model("GPT-4").is_err());
//! ```

use serde::Serialize;
use std::fmt;

use crate::apis::anthropic::MessagesPayload;
use crate::apis::openai::Message;
use crate::apis::{AnthropicApi, ApiDefinition, OpenAIApi};
use crate::conversation::Conversation;
use crate::errors::UnsupportedModelError;
use crate::ProviderId;

pub const OPENAI_MODEL_PREFIX: &str = "gpt";
pub const ANTHROPIC_MODEL_PREFIX: &str = "claude";

/// Output of a formatter. Serializes to the bare wire shape, a JSON array for
/// chat completions and a `{system, messages}` object for the messages API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedMessages {
    ChatCompletions(Vec<Message>),
    Messages(MessagesPayload),
}

pub type Formatter = fn(&Conversation) -> FormattedMessages;

fn format_chat_completions(conversation: &Conversation) -> FormattedMessages {
    FormattedMessages::ChatCompletions(conversation.format_chat_completions())
}

fn format_messages(conversation: &Conversation) -> FormattedMessages {
    FormattedMessages::Messages(conversation.format_messages_api())
}

/// Unified enum representing every request shape we can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedAPIs {
    OpenAIChatCompletions(OpenAIApi),
    AnthropicMessagesAPI(AnthropicApi),
}

impl fmt::Display for SupportedAPIs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportedAPIs::OpenAIChatCompletions(api) => {
                write!(f, "OpenAI API ({})", api.endpoint())
            }
            SupportedAPIs::AnthropicMessagesAPI(api) => {
                write!(f, "Anthropic API ({})", api.endpoint())
            }
        }
    }
}

impl SupportedAPIs {
    /// Resolve the shape for a model name. Matching is case sensitive and
    /// looks at the prefix only.
    pub fn from_model(model: &str) -> Result<Self, UnsupportedModelError> {
        if model.starts_with(OPENAI_MODEL_PREFIX) {
            return Ok(SupportedAPIs::OpenAIChatCompletions(OpenAIApi::ChatCompletions));
        }

        if model.starts_with(ANTHROPIC_MODEL_PREFIX) {
            return Ok(SupportedAPIs::AnthropicMessagesAPI(AnthropicApi::Messages));
        }

        Err(UnsupportedModelError::new(model))
    }

    /// Create a SupportedAPIs from an endpoint path
    pub fn from_endpoint(endpoint: &str) -> Option<Self> {
        if let Some(openai_api) = OpenAIApi::from_endpoint(endpoint) {
            return Some(SupportedAPIs::OpenAIChatCompletions(openai_api));
        }

        if let Some(anthropic_api) = AnthropicApi::from_endpoint(endpoint) {
            return Some(SupportedAPIs::AnthropicMessagesAPI(anthropic_api));
        }

        None
    }

    /// Get the endpoint path for this API
    pub fn endpoint(&self) -> &'static str {
        match self {
            SupportedAPIs::OpenAIChatCompletions(api) => api.endpoint(),
            SupportedAPIs::AnthropicMessagesAPI(api) => api.endpoint(),
        }
    }

    pub fn provider(&self) -> ProviderId {
        match self {
            SupportedAPIs::OpenAIChatCompletions(_) => ProviderId::OpenAI,
            SupportedAPIs::AnthropicMessagesAPI(_) => ProviderId::Anthropic,
        }
    }

    pub fn requires_non_empty_history(&self) -> bool {
        match self {
            SupportedAPIs::OpenAIChatCompletions(api) => api.requires_non_empty_history(),
            SupportedAPIs::AnthropicMessagesAPI(api) => api.requires_non_empty_history(),
        }
    }

    pub fn formatter(&self) -> Formatter {
        match self {
            SupportedAPIs::OpenAIChatCompletions(OpenAIApi::ChatCompletions) => {
                format_chat_completions
            }
            SupportedAPIs::AnthropicMessagesAPI(AnthropicApi::Messages) => format_messages,
        }
    }
}
