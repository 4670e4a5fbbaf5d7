use crate::application::catalog::ReplyCatalog;
use crate::domain::entities::{Command, CommandRegistry, Content, Message, Payload};

/// Service for managing and executing commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    /// One command per catalog entry, each answering with its entry's payload
    pub fn from_catalog(prefix: impl Into<String>, catalog: &ReplyCatalog) -> Self {
        let mut service = Self::new(prefix);
        service.register_catalog(catalog);
        service
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_catalog(&mut self, catalog: &ReplyCatalog) {
        for entry in catalog.entries() {
            self.register(
                Command::new(&entry.identifier)
                    .with_description(&entry.summary)
                    .with_reply(entry.payload.clone()),
            );
        }
    }

    /// Resolve and run the handler for a command message.
    ///
    /// Returns `None` for non-command messages and unknown names.
    pub fn handle(&self, message: &Message) -> Option<Payload> {
        let Content::Command { name, .. } = &message.content else {
            return None;
        };

        let Some(cmd) = self.registry.get(name) else {
            tracing::debug!("Ignoring unknown command: {:?}", name);
            return None;
        };

        cmd.invoke(message)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// One `<prefix><name> - <description>` line per command, sorted by name
    pub fn describe(&self) -> String {
        self.registry
            .names()
            .into_iter()
            .filter_map(|name| self.registry.get(name))
            .map(|cmd| match &cmd.description {
                Some(desc) => format!("{}{} - {}", self.prefix, cmd.name, desc),
                None => format!("{}{}", self.prefix, cmd.name),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_commands_are_registered() {
        let service = CommandService::from_catalog("+", &ReplyCatalog::olympus());
        assert_eq!(service.command_names().len(), 11);
        assert!(service.is_registered("clans"));
        assert!(!service.is_registered("clan"));
        assert_eq!(service.prefix(), "+");
    }

    #[test]
    fn test_handle_returns_catalog_payload() {
        let catalog = ReplyCatalog::olympus();
        let service = CommandService::from_catalog("+", &catalog);
        let msg = Message::from_command("1", "a", vec![]);
        assert_eq!(service.handle(&msg).as_ref(), catalog.get("a"));
    }

    #[test]
    fn test_handle_ignores_unknown_and_text() {
        let service = CommandService::from_catalog("+", &ReplyCatalog::olympus());
        assert!(service.handle(&Message::from_command("1", "ban", vec![])).is_none());
        assert!(service.handle(&Message::from_command("1", "", vec![])).is_none());
        assert!(service.handle(&Message::from_text("1", "ip")).is_none());
    }

    #[test]
    fn test_describe_uses_catalog_summaries() {
        let service = CommandService::from_catalog("+", &ReplyCatalog::olympus());
        let listing = service.describe();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "+a - Check that the bot is responding");
        assert!(lines.contains(&"+clans - Clan rules"));
        assert!(lines.contains(&"+ip - Minecraft server address"));
    }

    #[test]
    fn test_describe_without_description() {
        let mut service = CommandService::new("!");
        service.register(Command::new("ping"));
        assert_eq!(service.describe(), "!ping");
    }

    #[test]
    fn test_custom_handler_sees_message() {
        let mut service = CommandService::new("+");
        service.register(
            Command::new("where").with_handler(|msg| Payload::text(format!("chat {}", msg.chat_id))),
        );
        let msg = Message::from_command("99", "where", vec![]);
        assert_eq!(service.handle(&msg), Some(Payload::text("chat 99")));
    }
}
