use nina_config::Config;

/// Strategy for writing the default configuration to `~/nina/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Add your OpenAI API key (or export OPENAI_API_KEY)");
        println!("   2. Add your Telegram bot token (or export TELEGRAM_BOT_TOKEN)");
        println!("   3. Run 'nina telegram' to start the bot, or 'nina chat' to try it locally");
        Ok(())
    }
}
