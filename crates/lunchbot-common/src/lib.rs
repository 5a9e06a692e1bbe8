//! # lunchbot-common
//!
//! Shared utilities: environment-based configuration and telemetry setup.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, BotConfig, ConfigError, Environment, RecommendConfig, StorageConfig,
};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
