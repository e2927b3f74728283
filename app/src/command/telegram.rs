use crate::command::CommandStrategy;
use nina_config::Config;
use nina_telegram::TelegramBot;
use std::sync::Arc;
use tracing::info;

/// Input for Telegram bot command.
pub struct TelegramInput {
    /// Optional bot token (overrides config)
    pub token: Option<String>,
}

/// Strategy for running Telegram bot.
pub struct TelegramStrategy;

impl CommandStrategy for TelegramStrategy {
    type Input = TelegramInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let token = input.token.unwrap_or_else(|| config.telegram.token.clone());

        info!("Starting Telegram bot...");

        let router = Arc::new(super::build_router(&config, None));
        let bot = TelegramBot::new(token, router, &config)?;

        info!("Telegram bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
