use crate::apis::anthropic::MessagesRequest;
use crate::apis::openai::ChatCompletionsRequest;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum ProviderRequestType {
    ChatCompletionsRequest(ChatCompletionsRequest),
    MessagesRequest(MessagesRequest),
}

pub trait ProviderRequest: Send + Sync {
    /// Extract the model name from the request
    fn model(&self) -> &str;

    /// Token budget carried in the request body
    fn max_tokens(&self) -> i64;

    /// Extract text content from messages for token counting
    fn extract_messages_text(&self) -> String;

    /// Convert the request to bytes for transmission
    fn to_bytes(&self) -> Result<Vec<u8>, ProviderRequestError>;
}

impl ProviderRequest for ProviderRequestType {
    fn model(&self) -> &str {
        match self {
            Self::ChatCompletionsRequest(r) => r.model(),
            Self::MessagesRequest(r) => r.model(),
        }
    }

    fn max_tokens(&self) -> i64 {
        match self {
            Self::ChatCompletionsRequest(r) => r.max_tokens(),
            Self::MessagesRequest(r) => r.max_tokens(),
        }
    }

    fn extract_messages_text(&self) -> String {
        match self {
            Self::ChatCompletionsRequest(r) => r.extract_messages_text(),
            Self::MessagesRequest(r) => r.extract_messages_text(),
        }
    }

    fn to_bytes(&self) -> Result<Vec<u8>, ProviderRequestError> {
        match self {
            Self::ChatCompletionsRequest(r) => r.to_bytes(),
            Self::MessagesRequest(r) => r.to_bytes(),
        }
    }
}

#[derive(Error, Debug)]
#[error("failed to serialize provider request: {source}")]
pub struct ProviderRequestError {
    #[from]
    source: serde_json::Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::anthropic::MessagesMessage;
    use crate::apis::openai::Message;

    #[test]
    fn test_dispatch_to_inner_request() {
        let chat = ProviderRequestType::ChatCompletionsRequest(ChatCompletionsRequest {
            model: "gpt-4".to_string(),
            messages: vec![Message::system("s")],
            max_tokens: 10,
        });
        let messages = ProviderRequestType::MessagesRequest(MessagesRequest {
            model: "claude-3-opus".to_string(),
            system: None,
            messages: vec![MessagesMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            max_tokens: -1,
        });

        assert_eq!(chat.model(), "gpt-4");
        assert_eq!(chat.max_tokens(), 10);
        assert_eq!(messages.model(), "claude-3-opus");
        assert_eq!(messages.max_tokens(), -1);
        assert_eq!(messages.extract_messages_text(), "hi");

        let bytes = messages.to_bytes().unwrap();
        let body = String::from_utf8(bytes).unwrap();
        assert!(body.contains("\"max_tokens\":-1"));
        assert!(!body.contains("system"));
    }
}
