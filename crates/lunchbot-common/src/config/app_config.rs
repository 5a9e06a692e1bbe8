//! Application configuration structs
//!
//! Loads configuration from environment variables (with optional .env file).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub recommend: RecommendConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Chat bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub token: String,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

/// File storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_recommend_log_path")]
    pub recommend_log_path: String,
}

/// Recommendation behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
}

// Default value functions
fn default_app_name() -> String {
    "lunchbot".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_catalog_path() -> String {
    "restaurants.json".to_string()
}

fn default_recommend_log_path() -> String {
    "recommend_log.jsonl".to_string()
}

fn default_leaderboard_size() -> usize {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            bot: BotConfig {
                token: env::var("DISCORD_BOT_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_BOT_TOKEN"))?,
                command_prefix: env::var("COMMAND_PREFIX")
                    .unwrap_or_else(|_| default_command_prefix()),
            },
            storage: StorageConfig {
                catalog_path: env::var("CATALOG_PATH").unwrap_or_else(|_| default_catalog_path()),
                recommend_log_path: env::var("RECOMMEND_LOG_PATH")
                    .unwrap_or_else(|_| default_recommend_log_path()),
            },
            recommend: RecommendConfig {
                leaderboard_size: env::var("LEADERBOARD_SIZE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_leaderboard_size),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
