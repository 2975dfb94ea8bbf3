use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

use verifier_bot::config::{self, DEFAULT_CONFIG_PATH};
use verifier_bot::handler::Handler;

/// Discord member verification bot.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Create or overwrite the `/admin` slash command on the configured guild.
    #[arg(long)]
    update_command: bool,

    /// Path of the JSON config; written from the bundled default if missing.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG may come from an optional .env next to config.json.
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let config = config::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::debug!(?config, "configuration loaded");

    // GUILD_MEMBERS keeps the bot's own member cached for the role hierarchy check.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(config.token(), intents)
        .event_handler(Handler::new(&config, cli.update_command))
        .await
        .context("error creating the Discord client")?;

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
        return Err(why.into());
    }
    Ok(())
}
