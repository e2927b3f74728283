use nina_conversation::Command;
use teloxide::types::BotCommand;

/// Command menu shown by Telegram clients.
#[must_use]
pub fn bot_commands() -> Vec<BotCommand> {
    Command::all()
        .into_iter()
        .map(|cmd| BotCommand::new(cmd.name(), cmd.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_command() {
        let commands = bot_commands();
        let names: Vec<_> = commands.iter().map(|c| c.command.as_str()).collect();
        assert_eq!(
            names,
            [
                "start",
                "checkin",
                "diario",
                "resumo",
                "fadiga",
                "sono",
                "ansiedade",
                "mitos"
            ]
        );
        assert!(commands.iter().all(|c| !c.description.is_empty()));
    }
}
