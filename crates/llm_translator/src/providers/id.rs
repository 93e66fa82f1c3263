use std::fmt::Display;

/// Provider families with a dedicated request shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAI,
    Anthropic,
}

impl ProviderId {
    /// Name used for this provider in the model allow-list
    pub fn name(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Anthropic => "anthropic",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "openai" => Some(ProviderId::OpenAI),
            "anthropic" => Some(ProviderId::Anthropic),
            _ => None,
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderId::OpenAI => write!(f, "OpenAI"),
            ProviderId::Anthropic => write!(f, "Anthropic"),
        }
    }
}
