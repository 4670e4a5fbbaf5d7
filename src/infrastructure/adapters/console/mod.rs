//! Console adapter for development/testing

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::application::services::PresenceUpdater;
use crate::domain::entities::{Payload, User};
use crate::domain::traits::{Bot, BotInfo, Session};

const CONSOLE_CHAT: &str = "console";

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "OlympusBot".to_string(),
                username: "console".to_string(),
            },
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendering of a payload for a terminal
pub fn render_payload(payload: &Payload) -> String {
    match payload {
        Payload::PlainText(text) => text.clone(),
        Payload::Card(card) => {
            let mut out = format!("== {} ==\n{}", card.title, card.body);
            for field in &card.fields {
                out.push_str(&format!("\n{}: {}", field.name, field.value));
            }
            if let Some(footer) = &card.footer {
                out.push_str(&format!("\n-- {}", footer));
            }
            out
        }
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn send_payload(&self, _chat_id: &str, payload: &Payload) -> Result<(), BotError> {
        println!("[BOT] {}", render_payload(payload));
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

/// No gateway behind the console, so the bot is in zero communities
pub struct ConsoleSession;

impl Session for ConsoleSession {
    fn community_count(&self) -> usize {
        0
    }

    fn set_presence(&self, status: &str) {
        tracing::debug!("Presence: {}", status);
    }
}

/// Read commands from stdin until EOF
pub async fn run(dispatcher: Arc<MessageDispatcher>, presence: Arc<PresenceUpdater>) -> Result<(), BotError> {
    let bot = ConsoleAdapter::new();
    tracing::info!("Starting console bot (dev mode): @{}", bot.bot_info().username);
    tracing::info!("The bot is ready");
    presence.start(Arc::new(ConsoleSession));

    println!("Commands:\n{}", dispatcher.commands().describe());

    let user = User::new("console").with_username("console");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let message = dispatcher
            .parser()
            .parse(CONSOLE_CHAT, line, Some(user.clone()))
            .with_platform("console");
        if let Err(e) = dispatcher.dispatch(&bot, &message).await {
            tracing::error!("Failed to send reply: {}", e);
        }
    }

    tracing::info!("stdin closed, stopping console bot");
    Ok(())
}
