//! File-backed bot configuration.
//!
//! The document lives next to the binary as `config.json`. On first run it is seeded
//! from the default bundled into the binary; the seeded placeholders are rejected on
//! load so an unedited file never reaches the gateway.
use serde::Deserialize;
use serenity::model::id::{GuildId, RoleId};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

const BUNDLED_DEFAULT: &str = include_str!("../resources/config.json");

const KEY_TOKEN: &str = "bot-token";
const KEY_GUILD: &str = "guild-id";
const KEY_ROLE: &str = "grant-role-id";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not write default config to {path}: {source}")]
    Seed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config is not a valid JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("key/value \"{0}\" not found in the config")]
    MissingKey(&'static str),

    #[error("invalid value for \"{key}\": {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Discord ids are 64-bit snowflakes and often quoted in hand-written JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snowflake {
    Number(u64),
    Text(String),
}

impl Snowflake {
    fn resolve(self, key: &'static str) -> Result<u64, ConfigError> {
        let value = match self {
            Snowflake::Number(n) => n,
            Snowflake::Text(s) => s.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key,
                reason: format!("'{s}' is not a numeric id"),
            })?,
        };
        if value == 0 {
            return Err(ConfigError::Invalid {
                key,
                reason: "id must be non-zero (fill in config.json)".into(),
            });
        }
        Ok(value)
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "bot-token")]
    bot_token: Option<String>,
    #[serde(rename = "guild-id")]
    guild_id: Option<Snowflake>,
    #[serde(rename = "grant-role-id")]
    grant_role_id: Option<Snowflake>,
}

/// Immutable process-wide settings.
#[derive(Clone)]
pub struct BotConfig {
    token: String,
    guild_id: GuildId,
    grant_role_id: RoleId,
}

impl BotConfig {
    /// Build a config from already-validated parts. Ids must be non-zero.
    pub fn new(token: impl Into<String>, guild_id: GuildId, grant_role_id: RoleId) -> Self {
        Self {
            token: token.into(),
            guild_id,
            grant_role_id,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(raw)?;
        let token = raw.bot_token.ok_or(ConfigError::MissingKey(KEY_TOKEN))?;
        if token.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: KEY_TOKEN,
                reason: "token is empty (fill in config.json)".into(),
            });
        }
        let guild_id = raw
            .guild_id
            .ok_or(ConfigError::MissingKey(KEY_GUILD))?
            .resolve(KEY_GUILD)?;
        let grant_role_id = raw
            .grant_role_id
            .ok_or(ConfigError::MissingKey(KEY_ROLE))?
            .resolve(KEY_ROLE)?;
        Ok(Self {
            token: token.trim().to_string(),
            guild_id: GuildId::new(guild_id),
            grant_role_id: RoleId::new(grant_role_id),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    pub fn grant_role_id(&self) -> RoleId {
        self.grant_role_id
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("grant_role_id", &self.grant_role_id)
            .finish()
    }
}

/// Write the bundled default to `path` unless a file already exists there.
/// Returns whether a new file was written.
pub fn seed_if_missing(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, BUNDLED_DEFAULT).map_err(|source| ConfigError::Seed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(target: "config", path = %path.display(), "wrote default config");
    Ok(true)
}

/// Seed (first run only), read and validate the config document at `path`.
pub fn load(path: &Path) -> Result<BotConfig, ConfigError> {
    seed_if_missing(path)?;
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    BotConfig::from_json(&raw)
}
