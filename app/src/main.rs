#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, InitStrategy, TelegramInput, TelegramStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "nina")]
#[command(about = "Nina, a supportive assistant for people living with lupus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot
    Telegram {
        /// Bot token (overrides config and TELEGRAM_BOT_TOKEN)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Talk to the bot from the terminal
    Chat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Chat identifier to use for the local session
        #[arg(long, default_value_t = 1)]
        chat_id: i64,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Telegram { token } => {
            TelegramStrategy
                .execute(TelegramInput { token })
                .await?;
        }
        Commands::Chat {
            message,
            chat_id,
            model,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    message,
                    chat_id,
                    model,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
