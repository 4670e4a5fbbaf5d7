use super::User;
use chrono::{DateTime, Utc};

/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Command { name: String, args: Vec<String> },
    Empty,
}

impl Content {
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Content::Command { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// An inbound message, already parsed against the command prefix
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender: Option<User>,
    pub content: Content,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, content: Content) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            sender: None,
            content,
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    pub fn from_text(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(chat_id, Content::Text(text.into()))
    }

    pub fn from_command(chat_id: impl Into<String>, name: impl Into<String>, args: Vec<String>) -> Self {
        Self::new(chat_id, Content::Command { name: name.into(), args })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_sender(mut self, user: User) -> Self {
        self.sender = Some(user);
        self
    }

    pub fn with_sender_opt(mut self, user: Option<User>) -> Self {
        if let Some(u) = user {
            self.sender = Some(u);
        }
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// True when the author is another bot account
    pub fn from_bot(&self) -> bool {
        self.sender.as_ref().is_some_and(|u| u.is_bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_gets_unique_id_and_unknown_platform() {
        let a = Message::from_text("1", "hi");
        let b = Message::from_text("1", "hi");
        assert_ne!(a.id, b.id);
        assert_eq!(a.platform, "unknown");
        assert!(a.timestamp <= Utc::now());
    }

    #[test]
    fn test_platform_id_overrides() {
        let msg = Message::from_command("1", "ip", vec![])
            .with_id("1150")
            .with_platform("discord");
        assert_eq!(msg.id, "1150");
        assert_eq!(msg.platform, "discord");
        assert_eq!(msg.content.command_name(), Some("ip"));
    }

    #[test]
    fn test_from_bot() {
        assert!(!Message::from_text("1", "x").from_bot());
        assert!(!Message::from_text("1", "x").with_sender(User::new("2")).from_bot());
        assert!(Message::from_text("1", "x").with_sender(User::new("2").as_bot()).from_bot());
    }
}
