//! Discord adapter
//!
//! Gateway session, event handler and reply sending via serenity. Connection,
//! reconnection and auth are left entirely to serenity.

use std::num::NonZeroU64;
use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{ActivityData, Colour};
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::http::Http;
use serenity::model::channel::Message as DiscordMessage;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::{Client, Context, EventHandler};
use tracing::{debug, error, info};

use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::application::services::PresenceUpdater;
use crate::domain::entities::{Card, Payload, User};
use crate::domain::traits::{Bot, BotInfo, Session};

/// Sends payloads through serenity's HTTP client
pub struct DiscordAdapter {
    http: Arc<Http>,
    info: BotInfo,
}

impl DiscordAdapter {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            info: BotInfo {
                id: "unknown".to_string(),
                name: "OlympusBot".to_string(),
                username: "olympusbot".to_string(),
            },
        }
    }

    pub fn with_info(mut self, info: BotInfo) -> Self {
        self.info = info;
        self
    }
}

#[async_trait]
impl Bot for DiscordAdapter {
    async fn send_payload(&self, chat_id: &str, payload: &Payload) -> Result<(), BotError> {
        let channel = parse_channel_id(chat_id)?;
        channel
            .send_message(&*self.http, create_message(payload))
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

/// The running gateway session seen through the `Session` trait
pub struct DiscordSession {
    ctx: Context,
}

impl DiscordSession {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl Session for DiscordSession {
    fn community_count(&self) -> usize {
        self.ctx.cache.guild_count()
    }

    fn set_presence(&self, status: &str) {
        self.ctx.set_activity(Some(ActivityData::playing(status)));
    }
}

pub fn parse_channel_id(chat_id: &str) -> Result<ChannelId, BotError> {
    let id: NonZeroU64 = chat_id
        .parse()
        .map_err(|_| BotError::Parse(format!("invalid channel id: {:?}", chat_id)))?;
    Ok(ChannelId::new(id.get()))
}

pub fn create_embed(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&card.title)
        .description(&card.body)
        .colour(Colour::new(card.color.value()));
    for field in &card.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &card.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}

pub fn create_message(payload: &Payload) -> CreateMessage {
    match payload {
        Payload::PlainText(text) => CreateMessage::new().content(text),
        Payload::Card(card) => CreateMessage::new().embed(create_embed(card)),
    }
}

/// Guilds listed in `Ready` arrive as unavailable and only count once the
/// cache has filled, so the first status waits for `cache_ready` unless
/// there is nothing to wait for.
pub fn presence_starts_on_ready(ready_guilds: usize) -> bool {
    ready_guilds == 0
}

/// Serenity event handler
pub struct Handler {
    dispatcher: Arc<MessageDispatcher>,
    presence: Arc<PresenceUpdater>,
}

impl Handler {
    pub fn new(dispatcher: Arc<MessageDispatcher>, presence: Arc<PresenceUpdater>) -> Self {
        Self { dispatcher, presence }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Connected as {}", ready.user.name);
        info!("The bot is ready");
        if presence_starts_on_ready(ready.guilds.len()) {
            self.presence.start(Arc::new(DiscordSession::new(ctx)));
        }
    }

    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        debug!("Guild cache filled with {} guilds", guilds.len());
        self.presence.start(Arc::new(DiscordSession::new(ctx)));
    }

    async fn message(&self, ctx: Context, msg: DiscordMessage) {
        let sender = User::new(msg.author.id.to_string())
            .with_username(msg.author.name.clone());
        let sender = if msg.author.bot { sender.as_bot() } else { sender };

        let message = self
            .dispatcher
            .parser()
            .parse(msg.channel_id.to_string(), msg.content.clone(), Some(sender))
            .with_id(msg.id.to_string())
            .with_platform("discord");

        let bot = DiscordAdapter::new(ctx.http.clone());
        if let Err(e) = self.dispatcher.dispatch(&bot, &message).await {
            error!("[{}] Failed to send reply: {}", message.chat_id, e);
        }
    }
}

pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Connect and run the gateway session until shutdown or a fatal error
pub async fn run(
    token: &str,
    dispatcher: Arc<MessageDispatcher>,
    presence: Arc<PresenceUpdater>,
) -> Result<(), BotError> {
    let mut client = Client::builder(token, intents())
        .event_handler(Handler::new(dispatcher, presence))
        .await
        .map_err(|e| BotError::Gateway(format!("Failed to create Discord client: {}", e)))?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, stopping Discord client...");
            shard_manager.shutdown_all().await;
        }
    });

    info!("Starting Discord gateway connection...");
    client
        .start()
        .await
        .map_err(|e| BotError::Gateway(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::ReplyCatalog;

    #[test]
    fn test_parse_channel_id() {
        assert_eq!(parse_channel_id("381870553235193857").unwrap().get(), 381870553235193857);
        assert!(matches!(parse_channel_id("0"), Err(BotError::Parse(_))));
        assert!(matches!(parse_channel_id("console"), Err(BotError::Parse(_))));
        assert!(matches!(parse_channel_id(""), Err(BotError::Parse(_))));
    }

    #[test]
    fn test_help_card_embed_keeps_every_part() {
        let catalog = ReplyCatalog::olympus();
        let help = catalog.get("help").and_then(Payload::as_card).expect("help card");
        let json = serde_json::to_value(create_embed(help)).unwrap();

        assert_eq!(json["title"], "Commands");
        assert_eq!(json["description"], help.body.as_str());
        assert_eq!(json["color"], 0x9B59B6);
        assert_eq!(json["footer"]["text"], "For hiring, contact Paulidex#9510.");

        let fields = json["fields"].as_array().expect("fields array");
        assert_eq!(fields.len(), help.fields.len());
        for (sent, expected) in fields.iter().zip(&help.fields) {
            assert_eq!(sent["name"], expected.name.as_str());
            assert_eq!(sent["value"], expected.value.as_str());
            assert_eq!(sent["inline"], false);
        }
        assert_eq!(fields[6]["name"], "`+clans`");
    }

    #[test]
    fn test_card_without_footer_or_fields() {
        let card = Card::new("Title", "Body");
        let json = serde_json::to_value(create_embed(&card)).unwrap();
        assert_eq!(json["title"], "Title");
        assert!(json["footer"].is_null());
        assert!(json["fields"].as_array().map_or(true, |f| f.is_empty()));
    }

    #[test]
    fn test_plain_text_message_sets_content() {
        let payload = Payload::text("The bot is working correctly");
        let json = serde_json::to_value(create_message(&payload)).unwrap();
        assert_eq!(json["content"], "The bot is working correctly");
        assert!(json["embeds"].as_array().map_or(true, |e| e.is_empty()));
    }

    #[test]
    fn test_card_message_carries_one_embed() {
        let catalog = ReplyCatalog::olympus();
        let ip = catalog.get("ip").expect("ip entry");
        let json = serde_json::to_value(create_message(ip)).unwrap();
        let embeds = json["embeds"].as_array().expect("embeds array");
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0]["title"], "Minecraft Java Server");
        assert_eq!(embeds[0]["description"], "Version 1.16.5 - 1.17.1: play.olympusland.xyz");
        assert_eq!(embeds[0]["footer"]["text"], "To see more commands, type +help");
        assert!(json["content"].is_null());
    }

    #[test]
    fn test_presence_waits_for_cache_when_guilds_pending() {
        assert!(presence_starts_on_ready(0));
        assert!(!presence_starts_on_ready(1));
        assert!(!presence_starts_on_ready(40));
    }

    #[test]
    fn test_intents_include_message_content() {
        assert!(intents().contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents().contains(GatewayIntents::GUILDS));
    }
}
