use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which pricing model turns a line item into revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategyId {
    /// `sale_price * quantity * (1 - discount / 100)`.
    #[default]
    Simple,
}

/// Identifies which incentive policy assigns bonuses to ranked sellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategyId {
    /// Tiered percentage of profit by rank, nothing for last place.
    #[default]
    ProfitTiered,
}

/// The kind of reference a purchase record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Seller,
    Product,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Seller => write!(f, "seller"),
            LookupKind::Product => write!(f, "product"),
        }
    }
}
