use core_types::LookupKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Invalid strategies: {0}")]
    InvalidStrategy(String),

    #[error("Purchase record references unknown {kind} '{key}'")]
    LookupFailure { kind: LookupKind, key: String },

    #[error("Totals for seller '{seller_id}' do not fit in a Decimal")]
    Overflow { seller_id: String },
}
