//! llm_translator: renders one provider-agnostic conversation into the request
//! shapes of the OpenAI chat-completions and Anthropic messages APIs.

pub mod apis;
pub mod clients;
pub mod conversation;
pub mod errors;
pub mod providers;
pub mod tokens;
pub mod translator;

// Re-export important types and traits
pub use clients::shapes::{FormattedMessages, SupportedAPIs};
pub use conversation::{Conversation, HistoryGroup, Message};
pub use errors::{TranslatorError, UnsupportedModelError};
pub use providers::id::ProviderId;
pub use providers::models::{ModelAllowList, ModelAllowListError};
pub use providers::request::{ProviderRequest, ProviderRequestError, ProviderRequestType};
pub use tokens::{TokenCounter, WhitespaceTokenCounter};
pub use translator::Translator;

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const MESSAGES_PATH: &str = "/v1/messages";

/// Token budget given to a conversation when the caller does not pick one
pub const DEFAULT_MAX_TOKENS: i64 = 16384;

/// Content of the user turn injected when the messages API would otherwise
/// receive an empty history
pub const EMPTY_HISTORY_OPENER: &str = "Let's begin.";
