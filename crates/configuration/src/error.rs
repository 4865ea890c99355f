use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration sources: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration value for '{key}': {reason}")]
    Invalid { key: String, reason: String },
}
