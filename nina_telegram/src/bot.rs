use crate::{Error, Result, TelegramSink, bot_commands};
use nina_config::Config;
use nina_conversation::Router;
use std::{sync::Arc, time::Duration};
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Telegram Bot wired to the conversation router
#[derive(Clone)]
pub struct TelegramBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Shared router; holds every chat's session
    pub router: Arc<Router>,
    /// Outbound delivery with timeout
    pub sink: TelegramSink,
}

impl TelegramBot {
    /// Create a new Telegram bot
    pub fn new(token: String, router: Arc<Router>, config: &Config) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::Config(
                "Telegram bot token not configured. Set TELEGRAM_BOT_TOKEN or \"telegram.token\""
                    .into(),
            ));
        }

        let bot = Bot::new(token);
        let sink = TelegramSink::new(
            bot.clone(),
            Duration::from_secs(config.telegram.delivery_timeout_secs),
        );

        Ok(Self { bot, router, sink })
    }

    /// Test connection to Telegram API with backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(bot_user) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        bot_user
                            .user
                            .username
                            .unwrap_or_else(|| "no username".to_string()),
                        bot_user.user.id
                    );
                    return;
                }
                Err(e) => {
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);

                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                        warn!("  - Telegram API being temporarily unavailable");
                    }

                    sleep(Duration::from_secs(delay_secs)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Publish the command menu; a failure only costs the menu.
    async fn register_commands(&self) {
        match self.bot.set_my_commands(bot_commands()).await {
            Ok(_) => info!("Registered bot command menu"),
            Err(e) => warn!("Failed to register bot commands: {e}"),
        }
    }

    /// Run the bot
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.test_connection().await;
        self.register_commands().await;

        let bot = self.bot.clone();

        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: teloxide::types::Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
