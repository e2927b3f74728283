//! Completion-backed replies with bounded conversation memory.

use std::sync::Arc;

use nina_core::{ChatMessage, LLMProvider, Role, texts};
use nina_session::{MemoryWindow, Session};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration for the conversation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model to use for completions
    pub model: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("completion failed: {0}")]
    Completion(#[from] anyhow::Error),
}

/// Produces replies for free conversation and flow follow-ups.
///
/// Every request is the fixed system prompt followed by the chat's memory,
/// which already ends with the new user message.
pub struct ConversationEngine<P = Arc<dyn LLMProvider>>
where
    P: Send + Sync,
{
    provider: P,
    config: EngineConfig,
}

impl<P> ConversationEngine<P>
where
    P: LLMProvider + Send + Sync,
{
    pub const fn new(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Reply to `input` and record the exchange in the session's memory.
    ///
    /// Never fails: a completion error yields the technical-difficulty
    /// apology and leaves memory exactly as it was.
    pub async fn reply(&self, session: &mut Session, input: &str) -> String {
        match self.try_reply(session, input).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("chat {}: {e}", session.chat_id);
                texts::TECHNICAL_ISSUE.to_string()
            }
        }
    }

    async fn try_reply(
        &self,
        session: &mut Session,
        input: &str,
    ) -> Result<String, ConversationError> {
        // Work on a copy so a failed call leaves no half-recorded turn.
        let mut staged = session.memory.clone();
        staged.push(Role::User, input);

        let messages = build_llm_messages(&staged);
        let response = self.provider.chat(&messages, &self.config.model).await?;

        let reply = match response.content.trim() {
            "" => {
                warn!("chat {}: empty completion, using fallback", session.chat_id);
                texts::EMPTY_REPLY.to_string()
            }
            trimmed => trimmed.to_string(),
        };

        if let Some(usage) = response.usage {
            debug!(
                "Tokens: {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        staged.push(Role::Assistant, reply.clone());
        session.memory = staged;
        session.touch();

        Ok(reply)
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// System prompt followed by the memory in chronological order.
fn build_llm_messages(memory: &MemoryWindow) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(memory.len() + 1);
    messages.push(ChatMessage::system(texts::SYSTEM_PROMPT));
    messages.extend(memory.iter().cloned());
    messages
}
