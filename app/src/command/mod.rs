//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use nina_config::Config;
use nina_conversation::{ConversationEngine, EngineConfig, Router};
use nina_core::LLMProvider;
use nina_providers::OpenAIProvider;
use nina_session::SessionStore;
use std::sync::Arc;
use tracing::info;

mod chat;
mod init;
mod telegram;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use telegram::{TelegramInput, TelegramStrategy};
pub use version::VersionStrategy;

/// Build the router shared by the Telegram and console front ends.
fn build_router(config: &Config, model: Option<String>) -> Router {
    let provider = OpenAIProvider::new(config.providers.openai.api_key.clone())
        .with_base_url(config.providers.openai.base_url.clone())
        .with_temperature(config.model.temperature)
        .with_max_tokens(config.model.max_tokens);
    let provider: Arc<dyn LLMProvider> = Arc::new(provider);

    let model = model.unwrap_or_else(|| config.model.name.clone());
    info!(
        "Model: {model}, memory limit: {}, summary limit: {}",
        config.session.memory_limit, config.session.summary_limit
    );

    let engine = ConversationEngine::new(provider, EngineConfig::default().with_model(model));
    Router::new(SessionStore::new(config.session.memory_limit), engine)
        .with_summary_limit(config.session.summary_limit)
}

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
