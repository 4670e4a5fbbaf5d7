//! Message parser - Parses raw messages into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses incoming text into command or plain-text messages
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>, sender: Option<User>) -> Message {
        let text = text.into();
        let content = self.parse_content(&text);
        Message::new(chat_id, content).with_sender_opt(sender)
    }

    /// Split `<prefix><name> [args...]`.
    ///
    /// The prefix is stripped exactly once and the name is everything up to
    /// the first whitespace, so `+ ip` gives an empty name and `++ip` gives `+ip`.
    pub fn parse_content(&self, text: &str) -> Content {
        if text.is_empty() {
            return Content::Empty;
        }
        let Some(rest) = text.strip_prefix(self.command_prefix.as_str()) else {
            return Content::Text(text.to_string());
        };

        let name = rest.split(char::is_whitespace).next().unwrap_or("");
        let args = rest[name.len()..]
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Content::Command {
            name: name.to_string(),
            args,
        }
    }
}
