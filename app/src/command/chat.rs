//! Terminal front end for the router.
//!
//! Runs the same turn handling as the Telegram bot, printing replies to
//! stdout instead of sending them.

use async_trait::async_trait;
use nina_config::Config;
use nina_conversation::run_turn;
use nina_core::{DeliveryError, MessageSink};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Chat identifier for the local session
    pub chat_id: i64,
    /// Optional model override
    pub model: Option<String>,
}

/// Prints replies to stdout.
struct ConsoleSink;

#[async_trait]
impl MessageSink for ConsoleSink {
    async fn deliver(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "\n{text}\n").map_err(|e| DeliveryError::Transport {
            chat_id,
            reason: e.to_string(),
        })
    }
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let router = super::build_router(&config, input.model);
        let sink = ConsoleSink;

        if let Some(msg) = input.message {
            run_turn(&router, &sink, input.chat_id, &msg).await;
            return Ok(());
        }

        info!("Starting local session for chat {}", input.chat_id);
        println!("=== Nina (chat {}) ===", input.chat_id);
        println!("Type 'exit', 'quit', or Ctrl+C to end the session.\n");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();

            if matches!(line, "exit" | "quit" | "q") {
                break;
            }

            run_turn(&router, &sink, input.chat_id, line).await;
        }

        println!("\nSession ended.");
        Ok(())
    }
}
