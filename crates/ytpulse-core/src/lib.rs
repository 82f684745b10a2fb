//! Shared domain types, session state, and configuration for ytpulse.

pub mod app_config;
pub mod config;
pub mod records;
pub mod session;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{LabeledRecord, Record, Sentiment, SourceKind};
pub use session::{CollectionResult, SessionOrigin, SessionStore};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
