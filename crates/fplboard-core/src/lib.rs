//! Shared configuration and limit constants for the fplboard workspace.

mod app_config;
mod config;
pub mod limits;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
