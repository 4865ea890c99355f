use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to parse sales dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Running totals for seller '{seller_id}' overflowed")]
    Overflow { seller_id: String },
}
