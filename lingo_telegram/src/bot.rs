use crate::{Error, Result};
use lingo_core::{Engine, ReplyPlan};
use lingo_session::SessionStore;
use std::{sync::Arc, time::Duration};
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Telegram bot driving the scripted language quiz.
#[derive(Clone)]
pub struct QuizBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Per-chat session store
    pub store: Arc<SessionStore>,
    /// Quiz state machine
    engine: Engine,
    /// Allowed chat IDs; empty means open access
    allowed_chats: Vec<i64>,
}

impl QuizBot {
    /// Create a new quiz bot.
    pub fn new(token: String, allowed_chats: &[String]) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::Config("empty bot token".to_string()));
        }

        // Parse allowed chat IDs
        let allowed_chats = allowed_chats
            .iter()
            .filter_map(|s| s.parse::<i64>().ok())
            .collect();

        let bot = Bot::new(token);

        Ok(Self {
            bot,
            store: Arc::new(SessionStore::new()),
            engine: Engine::new(),
            allowed_chats,
        })
    }

    /// Check if a chat is allowed
    #[must_use]
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat_id)
    }

    /// Run one inbound text through the engine under the chat's session
    /// lock, serializing same-chat turns.
    pub async fn process_text(&self, chat_id: i64, text: &str) -> ReplyPlan {
        let handle = self.store.get_or_create(chat_id).await;
        let mut session = handle.lock().await;
        self.engine.handle(&mut session, text)
    }

    /// Test connection to Telegram API with backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) -> Result<()> {
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
                    return Ok(());
                }
                Err(e) => {
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);
                    let delay = Duration::from_secs(delay_secs);

                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    // Only show detailed help on first failure
                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                        warn!("  - Telegram API being temporarily unavailable");
                    }

                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Register the command menu and run the long-polling dispatcher.
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        // Test connection with backoff retry before starting dispatcher
        self.test_connection().await?;

        if let Err(e) = self
            .bot
            .set_my_commands(crate::Command::bot_commands())
            .await
        {
            warn!("Failed to register bot commands: {e}");
        }

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
