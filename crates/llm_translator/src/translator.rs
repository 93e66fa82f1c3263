use log::debug;

use crate::conversation::{Conversation, HistoryGroup};
use crate::providers::models::ModelAllowList;

/// Entry point for building conversations and checking model names.
///
/// [`Translator::validate_model`] looks at the allow-list only, while
/// [`Conversation::get_formatted_messages`] looks at the model prefix only.
/// The two can disagree; callers that need both checks run both.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    allow_list: ModelAllowList,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_list(allow_list: ModelAllowList) -> Self {
        Self { allow_list }
    }

    pub fn allow_list(&self) -> &ModelAllowList {
        &self.allow_list
    }

    /// Builds a conversation and replays `conversation_history` into it,
    /// group by group and turn by turn, in the order given.
    pub fn create_conversation(
        &self,
        system_instructions: Vec<String>,
        conversation_history: Option<&[HistoryGroup]>,
        max_tokens: i64,
    ) -> Conversation {
        let mut conversation = Conversation::with_max_tokens(system_instructions, max_tokens);

        for group in conversation_history.unwrap_or_default() {
            debug!("replaying history group={} turns={}", group.id, group.messages.len());
            for message in &group.messages {
                conversation.add_message(message.role(), message.content());
            }
        }

        conversation
    }

    /// True if `model` is listed verbatim under any provider.
    pub fn validate_model(&self, model: &str) -> bool {
        let supported = self.allow_list.contains(model);
        if !supported {
            debug!("model={} is not in the allow-list", model);
        }
        supported
    }

    pub fn provider_for_model(&self, model: &str) -> Option<&str> {
        self.allow_list.provider_for(model)
    }
}
