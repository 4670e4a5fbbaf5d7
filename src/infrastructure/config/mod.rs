//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub discord: DiscordConfig,
    pub presence: PresenceConfig,
    pub liveness: LivenessConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiscordConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PresenceConfig {
    pub interval_seconds: u64,
}

/// Uptime-monitor endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LivenessConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "OlympusBot".to_string(),
            prefix: "+".to_string(),
        }
    }
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self { interval_seconds: 10 }
    }
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Overlay `DISCORD_TOKEN` (or `BOT_TOKEN`), `BOT_PREFIX` and `LIVENESS_PORT`
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN").or_else(|| lookup("BOT_TOKEN")) {
            if !token.trim().is_empty() {
                self.discord.token = Some(token);
            }
        }

        if let Some(prefix) = lookup("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }

        if let Some(port) = lookup("LIVENESS_PORT") {
            match port.parse() {
                Ok(port) => self.liveness.port = port,
                Err(_) => tracing::warn!("Ignoring invalid LIVENESS_PORT: {}", port),
            }
        }

        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.is_empty() {
            return Err(ConfigError::MissingField("bot.prefix".to_string()));
        }
        if self.presence.interval_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "presence.interval-seconds must be greater than zero".to_string(),
            ));
        }
        self.liveness_addr()?;
        Ok(())
    }

    pub fn presence_interval(&self) -> Duration {
        Duration::from_secs(self.presence.interval_seconds)
    }

    pub fn liveness_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.liveness.host, self.liveness.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("liveness address: {}", e)))
    }

    pub fn token(&self) -> Option<&str> {
        self.discord.token.as_deref().filter(|t| !t.is_empty())
    }
}
