use nina_conversation::{Command, run_turn};
use teloxide::{
    requests::Requester,
    types::{ChatAction, Message},
};
use tracing::debug;

use crate::{Result, TelegramBot};

/// Handle any message (commands, flow answers or free text).
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id.0;
    // Stickers, voice notes and the like arrive without text.
    let text = msg.text().or_else(|| msg.caption()).unwrap_or_default();

    debug!("[chat {chat_id}] Message: {text}");

    if !text.trim().is_empty() && Command::parse_from_text(text).is_none() {
        if let Err(e) = bot.bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
            debug!("[chat {chat_id}] Typing indicator failed: {e}");
        }
    }

    run_turn(&bot.router, &bot.sink, chat_id, text).await;

    Ok(())
}
