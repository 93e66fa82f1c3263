//! Provider-agnostic conversation state.
//!
//! A [`Conversation`] holds a fixed list of system instructions and an
//! append-only list of turns, and renders both into either provider shape.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::apis::anthropic::{MessagesMessage, MessagesPayload, MessagesRequest};
use crate::apis::openai::{self, ChatCompletionsRequest};
use crate::clients::shapes::{FormattedMessages, SupportedAPIs};
use crate::errors::UnsupportedModelError;
use crate::providers::request::ProviderRequestType;
use crate::tokens::{TokenCounter, WhitespaceTokenCounter};
use crate::{DEFAULT_MAX_TOKENS, EMPTY_HISTORY_OPENER};

const SYSTEM_SEPARATOR: &str = "\n\n";

/// One role-tagged turn. Roles are free-form labels and are not validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: String,
    content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A batch of earlier turns replayed into a new conversation, e.g. one
/// session or one turn group. Groups are replayed in the order given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup {
    pub id: String,
    pub messages: Vec<Message>,
}

impl HistoryGroup {
    pub fn new(id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            id: id.into(),
            messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    system_instructions: Vec<String>,
    // Advisory only; appended turns are never checked against it.
    max_tokens: i64,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(system_instructions: Vec<String>) -> Self {
        Self::with_max_tokens(system_instructions, DEFAULT_MAX_TOKENS)
    }

    pub fn with_max_tokens(system_instructions: Vec<String>, max_tokens: i64) -> Self {
        Self {
            system_instructions,
            max_tokens,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, role: impl Into<String>, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    pub fn system_instructions(&self) -> &[String] {
        &self.system_instructions
    }

    pub fn max_tokens(&self) -> i64 {
        self.max_tokens
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a `user` turn with [`EMPTY_HISTORY_OPENER`] when there are no
    /// turns yet. The added turn stays in the conversation. Returns whether a
    /// turn was added.
    pub fn ensure_non_empty_history(&mut self) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        warn!("conversation has no turns, adding opener '{}'", EMPTY_HISTORY_OPENER);
        self.add_message("user", EMPTY_HISTORY_OPENER);
        true
    }

    /// Flat list: one `system` record per instruction, then every turn.
    pub fn format_chat_completions(&self) -> Vec<openai::Message> {
        self.system_instructions
            .iter()
            .map(openai::Message::system)
            .chain(self.messages.iter().map(|m| openai::Message {
                role: m.role.clone(),
                content: m.content.clone(),
            }))
            .collect()
    }

    /// Split shape: instructions joined by a blank line, turns kept apart.
    /// Does not add the empty-history opener; see
    /// [`Conversation::get_formatted_messages`].
    pub fn format_messages_api(&self) -> MessagesPayload {
        MessagesPayload {
            system: self.joined_system_instructions(),
            messages: self
                .messages
                .iter()
                .map(|m| MessagesMessage {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect(),
        }
    }

    /// Renders the conversation for `model`. Models starting with `gpt` get
    /// the flat list; models starting with `claude` get the split shape, and
    /// for those an empty conversation first receives the opener turn (see
    /// [`Conversation::ensure_non_empty_history`]).
    pub fn get_formatted_messages(
        &mut self,
        model: &str,
    ) -> Result<FormattedMessages, UnsupportedModelError> {
        let api = self.prepare_for(model)?;
        Ok(api.formatter()(&*self))
    }

    /// Same dispatch as [`Conversation::get_formatted_messages`], wrapped
    /// into a complete request body with `model` and `max_tokens` set.
    pub fn to_provider_request(
        &mut self,
        model: &str,
    ) -> Result<ProviderRequestType, UnsupportedModelError> {
        let api = self.prepare_for(model)?;
        let request = match api.formatter()(&*self) {
            FormattedMessages::ChatCompletions(messages) => {
                ProviderRequestType::ChatCompletionsRequest(ChatCompletionsRequest {
                    model: model.to_string(),
                    messages,
                    max_tokens: self.max_tokens,
                })
            }
            FormattedMessages::Messages(payload) => ProviderRequestType::MessagesRequest(
                MessagesRequest::from_payload(model, payload, self.max_tokens),
            ),
        };
        Ok(request)
    }

    pub fn system_token_estimate(&self) -> usize {
        self.system_token_estimate_with(&WhitespaceTokenCounter)
    }

    pub fn system_token_estimate_with(&self, counter: &dyn TokenCounter) -> usize {
        counter.count_tokens(&self.joined_system_instructions())
    }

    /// Estimate for instructions plus every turn, recomputed on each call.
    pub fn token_estimate(&self) -> usize {
        self.token_estimate_with(&WhitespaceTokenCounter)
    }

    pub fn token_estimate_with(&self, counter: &dyn TokenCounter) -> usize {
        self.system_token_estimate_with(counter)
            + self
                .messages
                .iter()
                .map(|m| counter.count_tokens(&m.content))
                .sum::<usize>()
    }

    fn prepare_for(&mut self, model: &str) -> Result<SupportedAPIs, UnsupportedModelError> {
        let api = SupportedAPIs::from_model(model)?;
        debug!("formatting {} turns for model={} as {}", self.messages.len(), model, api);
        if api.requires_non_empty_history() {
            self.ensure_non_empty_history();
        }
        Ok(api)
    }

    fn joined_system_instructions(&self) -> String {
        self.system_instructions.join(SYSTEM_SEPARATOR)
    }
}
