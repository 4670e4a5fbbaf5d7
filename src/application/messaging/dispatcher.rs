//! Message dispatcher - Routes command messages to handlers and sends the reply

use crate::application::errors::BotError;
use crate::application::services::CommandService;
use crate::domain::entities::{Message, User};
use crate::domain::traits::Bot;
use super::parser::MessageParser;

/// Outcome of dispatching one inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The named command ran and its payload was sent
    Sent(String),
    /// Not a command, unknown command, or a bot author. Nothing was sent.
    Ignored,
}

/// Message dispatcher - parses, resolves, and replies.
///
/// Holds no mutable state, so one instance is shared across all events.
pub struct MessageDispatcher {
    parser: MessageParser,
    commands: CommandService,
}

impl MessageDispatcher {
    pub fn new(commands: CommandService) -> Self {
        Self {
            parser: MessageParser::new(commands.prefix()),
            commands,
        }
    }

    pub fn parser(&self) -> &MessageParser {
        &self.parser
    }

    pub fn commands(&self) -> &CommandService {
        &self.commands
    }

    /// Parse raw text and dispatch it
    pub async fn dispatch_text<B: Bot + ?Sized>(
        &self,
        bot: &B,
        chat_id: impl Into<String>,
        text: impl Into<String>,
        sender: Option<User>,
    ) -> Result<Dispatch, BotError> {
        let message = self.parser.parse(chat_id, text, sender);
        self.dispatch(bot, &message).await
    }

    /// Send exactly one payload for a known command, zero otherwise.
    ///
    /// Send failures are returned as-is; there is no retry and no error reply.
    pub async fn dispatch<B: Bot + ?Sized>(&self, bot: &B, message: &Message) -> Result<Dispatch, BotError> {
        if message.from_bot() {
            return Ok(Dispatch::Ignored);
        }

        let Some(payload) = self.commands.handle(message) else {
            return Ok(Dispatch::Ignored);
        };

        let name = message.content.command_name().unwrap_or_default().to_string();
        tracing::debug!(
            "[{}] Dispatching {}{} (message {} via {}, received {})",
            message.chat_id,
            self.parser.prefix(),
            name,
            message.id,
            message.platform,
            message.timestamp.to_rfc3339(),
        );

        bot.send_payload(&message.chat_id, &payload).await?;
        Ok(Dispatch::Sent(name))
    }
}
