use crate::error::ConfigError;
use core_types::{BonusStrategyId, RevenueStrategyId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing sections fall back to
/// the standard policy (simple discounted revenue, 15/10/5/0 bonus tiers,
/// top ten products).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub strategies: StrategySettings,
}

impl Config {
    /// Rejects settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.top_products_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "analysis.top_products_limit".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Parameters for the aggregation pipeline itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisSettings {
    /// How many best-selling skus to keep per seller.
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: usize,
}

fn default_top_products_limit() -> usize {
    10
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_products_limit: default_top_products_limit(),
        }
    }
}

/// Selects the pricing and bonus policies and holds their parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StrategySettings {
    #[serde(default)]
    pub revenue: RevenueStrategyId,
    #[serde(default)]
    pub bonus: BonusStrategyId,
    #[serde(default)]
    pub profit_tiered: ProfitTieredParams,
}

/// Rates for the rank-tiered bonus policy, as fractions of profit.
///
/// The last-ranked seller always receives nothing, so it has no rate here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfitTieredParams {
    /// Rank 0.
    pub top_rate: Decimal,
    /// Ranks 1 and 2.
    pub runner_up_rate: Decimal,
    /// Everyone else except last place.
    pub middle_rate: Decimal,
}

impl Default for ProfitTieredParams {
    fn default() -> Self {
        Self {
            top_rate: dec!(0.15),
            runner_up_rate: dec!(0.10),
            middle_rate: dec!(0.05),
        }
    }
}
