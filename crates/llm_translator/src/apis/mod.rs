pub mod anthropic;
pub mod openai;

// Explicit exports to avoid naming conflicts
pub use anthropic::{AnthropicApi, MessagesMessage, MessagesPayload, MessagesRequest};
pub use openai::{ChatCompletionsRequest, OpenAIApi};
pub use openai::Message as OpenAIMessage;

pub trait ApiDefinition {
    /// Returns the endpoint path for this API
    fn endpoint(&self) -> &'static str;

    /// Creates an API instance from an endpoint path
    fn from_endpoint(endpoint: &str) -> Option<Self>
    where
        Self: Sized;

    /// Returns true when the API rejects a request with no conversation turns
    fn requires_non_empty_history(&self) -> bool;

    /// Returns all variants of this API enum
    fn all_variants() -> Vec<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CHAT_COMPLETIONS_PATH, MESSAGES_PATH};

    #[test]
    fn test_generic_api_functionality() {
        fn test_api<T: ApiDefinition>(api: &T) {
            let endpoint = api.endpoint();
            assert!(!endpoint.is_empty());
            assert!(endpoint.starts_with('/'));
        }

        test_api(&OpenAIApi::ChatCompletions);
        test_api(&AnthropicApi::Messages);
    }

    #[test]
    fn test_api_detection_from_endpoints() {
        let endpoints = vec![CHAT_COMPLETIONS_PATH, MESSAGES_PATH, "/v1/unknown"];

        let detected: Vec<String> = endpoints
            .into_iter()
            .map(|endpoint| {
                if let Some(api) = OpenAIApi::from_endpoint(endpoint) {
                    format!("OpenAI: {:?}", api)
                } else if let Some(api) = AnthropicApi::from_endpoint(endpoint) {
                    format!("Anthropic: {:?}", api)
                } else {
                    "Unknown API".to_string()
                }
            })
            .collect();

        assert_eq!(
            detected,
            vec![
                "OpenAI: ChatCompletions",
                "Anthropic: Messages",
                "Unknown API"
            ]
        );
    }

    #[test]
    fn test_only_messages_api_requires_history() {
        assert!(!OpenAIApi::ChatCompletions.requires_non_empty_history());
        assert!(AnthropicApi::Messages.requires_non_empty_history());
        assert_eq!(OpenAIApi::all_variants(), vec![OpenAIApi::ChatCompletions]);
        assert_eq!(AnthropicApi::all_variants(), vec![AnthropicApi::Messages]);
    }
}
