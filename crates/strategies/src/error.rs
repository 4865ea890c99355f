use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid parameters for strategy '{strategy}': {reason}")]
    InvalidParameters { strategy: String, reason: String },
}
