use std::sync::Arc;

use clap::{Parser, Subcommand};

use olympus_bot::application::catalog::ReplyCatalog;
use olympus_bot::application::errors::BotError;
use olympus_bot::application::messaging::MessageDispatcher;
use olympus_bot::application::services::{CommandService, PresenceUpdater};
use olympus_bot::infrastructure::adapters::{console, discord};
use olympus_bot::infrastructure::config::Config;
use olympus_bot::infrastructure::liveness;

#[derive(Parser)]
#[command(name = "olympus-bot")]
#[command(about = "Discord command bot for the OlympusLand server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Discord bot token (overrides config and environment)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            if let Err(e) = run_bot(&cli.config, cli.token) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("olympus-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            if let Err(e) = init_config() {
                eprintln!("Failed to render config: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if !std::path::Path::new(config_path).exists() {
        return Config::load_env();
    }
    match Config::load(config_path) {
        Ok(config) => config.with_env(|key| std::env::var(key).ok()),
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let mut config = load_config(config_path);
    if let Some(token) = token_override {
        config.discord.token = Some(token);
    }
    config.validate()?;

    tracing::info!("Starting {} with prefix {:?}", config.bot.name, config.bot.prefix);

    let catalog = ReplyCatalog::olympus();
    let commands = CommandService::from_catalog(&config.bot.prefix, &catalog);
    tracing::info!("Registered {} commands", commands.command_names().len());

    let dispatcher = Arc::new(MessageDispatcher::new(commands));
    let presence = Arc::new(PresenceUpdater::new(&config.bot.prefix, config.presence_interval()));

    let liveness_addr = config.liveness_addr()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        if config.liveness.enabled {
            tokio::spawn(async move {
                if let Err(e) = liveness::start_liveness_server(liveness_addr).await {
                    tracing::error!("{}", e);
                }
            });
        }

        match config.token() {
            Some(token) => discord::run(token, dispatcher, presence).await,
            None => {
                tracing::warn!("No Discord token configured, running console bot");
                console::run(dispatcher, presence).await
            }
        }
    })
}

fn init_config() -> Result<(), serde_yaml::Error> {
    let yaml = serde_yaml::to_string(&Config::default())?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
