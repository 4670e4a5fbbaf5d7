use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::Payload;

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Send a payload to the channel identified by `chat_id`
    async fn send_payload(&self, chat_id: &str, payload: &Payload) -> Result<(), BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
