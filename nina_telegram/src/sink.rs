use std::time::Duration;

use async_trait::async_trait;
use nina_core::{DeliveryError, MessageSink};
use teloxide::prelude::*;
use tokio::time::timeout;

/// Delivers replies with `sendMessage`, bounded by a timeout.
#[derive(Clone)]
pub struct TelegramSink {
    bot: Bot,
    timeout: Duration,
}

impl TelegramSink {
    #[must_use]
    pub const fn new(bot: Bot, timeout: Duration) -> Self {
        Self { bot, timeout }
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    async fn deliver(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError> {
        let send = self.bot.send_message(ChatId(chat_id), text.to_string());

        match timeout(self.timeout, send).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(DeliveryError::Transport {
                chat_id,
                reason: e.to_string(),
            }),
            Err(_) => Err(DeliveryError::Timeout {
                chat_id,
                secs: self.timeout.as_secs(),
            }),
        }
    }
}
