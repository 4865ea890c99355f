use crate::error::StrategyError;
use crate::profit_tiered_bonus::ProfitTieredBonus;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::StrategySettings;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates the pricing strategy identified by `id`.
pub fn create_revenue_strategy(
    id: RevenueStrategyId,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    // The compiler will error if a new RevenueStrategyId is added but not handled here.
    match id {
        RevenueStrategyId::Simple => Ok(Box::new(SimpleRevenue::new())),
    }
}

/// Creates the bonus strategy identified by `id`, taking its parameters from `settings`.
pub fn create_bonus_strategy(
    id: BonusStrategyId,
    settings: &StrategySettings,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    match id {
        BonusStrategyId::ProfitTiered => {
            let params = settings.profit_tiered.clone();
            Ok(Box::new(ProfitTieredBonus::new(params)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::ProfitTieredParams;
    use rust_decimal_macros::dec;

    #[test]
    fn creates_simple_revenue() {
        let strategy = create_revenue_strategy(RevenueStrategyId::Simple).unwrap();
        assert_eq!(strategy.name(), "simple");
    }

    #[test]
    fn invalid_tier_rates_surface_from_factory() {
        let settings = StrategySettings {
            profit_tiered: ProfitTieredParams {
                runner_up_rate: dec!(2),
                ..ProfitTieredParams::default()
            },
            ..StrategySettings::default()
        };
        let result = create_bonus_strategy(BonusStrategyId::ProfitTiered, &settings);
        assert!(matches!(result, Err(StrategyError::InvalidParameters { .. })));
    }
}
