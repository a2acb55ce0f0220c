use crate::{Command, Error, QuizBot, Result};
use lingo_core::{Keyboard, ReplyPlan};
use teloxide::{
    payloads::SendMessageSetters,
    requests::Requester,
    types::{ChatId, KeyboardButton, KeyboardMarkup, Message},
};
use tracing::{info, warn};

/// Render one of the engine's canned keyboards as Telegram markup.
fn markup_for(keyboard: Keyboard) -> KeyboardMarkup {
    let rows = keyboard.rows().iter().map(|row| {
        row.iter()
            .map(|label| KeyboardButton::new(*label))
            .collect::<Vec<_>>()
    });

    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Sender's username for logging, falling back for anonymous senders.
fn username_of(msg: &Message) -> &str {
    msg.from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown")
}

/// Send a reply plan to a chat, attaching markup when present.
async fn send_plan(bot: &QuizBot, chat_id: ChatId, plan: ReplyPlan) -> Result<()> {
    match plan.keyboard {
        Some(keyboard) => {
            bot.bot
                .send_message(chat_id, plan.text)
                .reply_markup(markup_for(keyboard))
                .await?;
        }
        None => {
            bot.bot.send_message(chat_id, plan.text).await?;
        }
    }

    Ok(())
}

/// Handle bot commands
async fn handle_command(bot: QuizBot, msg: Message, cmd: Command) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let username = username_of(&msg);

    match cmd {
        // Both route through the engine's reset branch so the session
        // and the greeting stay in one place.
        Command::Start | Command::Reset => {
            info!("[@{username}] Command: /start");
            let plan = bot.process_text(chat_id, "/start").await;
            send_plan(&bot, msg.chat.id, plan).await?;
        }
        Command::Help => {
            info!("[@{username}] Command: /help");
            bot.bot
                .send_message(msg.chat.id, Command::help_text())
                .await?;
        }
    }

    Ok(())
}

/// Handle any message (commands or regular text)
pub async fn handle_message(bot: QuizBot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id.0;

    // Messages with no text payload (stickers, photos, ...) are ignored.
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if !bot.is_allowed(chat_id) {
        warn!("Rejecting message from unauthorized chat {chat_id}");
        return Err(Error::Unauthorized(chat_id));
    }

    if let Some(cmd) = Command::parse_from_text(text, "") {
        return handle_command(bot, msg, cmd).await;
    }

    let username = username_of(&msg);
    info!("[@{username}] Message: {text}");

    // Show typing indicator
    bot.bot
        .send_chat_action(msg.chat.id, teloxide::types::ChatAction::Typing)
        .await?;

    let plan = bot.process_text(chat_id, text).await;

    info!("[@{username}] Reply: {}", plan.text);

    send_plan(&bot, msg.chat.id, plan).await?;

    Ok(())
}
