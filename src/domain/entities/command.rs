use std::collections::HashMap;

use super::{Message, Payload};

/// Command handler function type
pub type CommandHandler = Box<dyn Fn(&Message) -> Payload + Send + Sync>;

/// Represents a bot command
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub handler: Option<CommandHandler>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            handler: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Message) -> Payload + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Handler that always answers with the same payload
    pub fn with_reply(self, payload: Payload) -> Self {
        self.with_handler(move |_| payload.clone())
    }

    /// Case-sensitive, exact match. No aliases.
    pub fn matches(&self, input: &str) -> bool {
        self.name == input
    }

    pub fn invoke(&self, message: &Message) -> Option<Payload> {
        self.handler.as_ref().map(|handler| handler(message))
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Command registry for managing available commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering a name twice replaces the earlier command
    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.name.clone(), command);
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("ip").with_reply(Payload::text("addr")));

        assert!(registry.get("ip").is_some());
        assert!(registry.get("IP").is_none());
        assert!(registry.get("i").is_none());
        assert!(!registry.get("ip").map(|c| c.matches("Ip")).unwrap_or(true));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("a").with_reply(Payload::text("old")));
        registry.register(Command::new("a").with_reply(Payload::text("new")));

        assert_eq!(registry.len(), 1);
        let msg = Message::from_command("c", "a", vec![]);
        assert_eq!(registry.get("a").and_then(|c| c.invoke(&msg)), Some(Payload::text("new")));
    }

    #[test]
    fn test_command_without_handler_yields_nothing() {
        let cmd = Command::new("empty").with_description("nothing here");
        let msg = Message::from_command("c", "empty", vec![]);
        assert!(cmd.invoke(&msg).is_none());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = CommandRegistry::new();
        for name in ["store", "a", "ip"] {
            registry.register(Command::new(name));
        }
        assert_eq!(registry.names(), vec!["a", "ip", "store"]);
    }
}
