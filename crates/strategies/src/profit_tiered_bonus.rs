use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::ProfitTieredParams;
use core_types::SellerAccumulator;
use rust_decimal::Decimal;

/// Rank-tiered bonus as a share of the seller's profit.
///
/// Rules are checked in a fixed order and the first match wins:
///
/// | rank                 | bonus                   |
/// |----------------------|-------------------------|
/// | 0                    | `profit * top_rate`     |
/// | 1 or 2               | `profit * runner_up_rate` |
/// | `total - 1`          | 0                       |
/// | anything else        | `profit * middle_rate`  |
///
/// Because rank 0 is checked first, a lone seller gets the top rate even
/// though it is also last.
#[derive(Debug, Clone, Default)]
pub struct ProfitTieredBonus {
    params: ProfitTieredParams,
}

impl ProfitTieredBonus {
    /// Creates a new `ProfitTieredBonus` with the given rates.
    ///
    /// Every rate must be a fraction in `[0, 1]`.
    pub fn new(params: ProfitTieredParams) -> Result<Self, StrategyError> {
        let rates = [
            ("top_rate", params.top_rate),
            ("runner_up_rate", params.runner_up_rate),
            ("middle_rate", params.middle_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(StrategyError::InvalidParameters {
                    strategy: "profit_tiered".to_string(),
                    reason: format!("{field} must be between 0 and 1, got {rate}"),
                });
            }
        }
        Ok(Self { params })
    }
}

impl BonusStrategy for ProfitTieredBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        let profit = seller.profit();
        let bonus = if rank == 0 {
            profit * self.params.top_rate
        } else if rank == 1 || rank == 2 {
            profit * self.params.runner_up_rate
        } else if rank + 1 == total {
            Decimal::ZERO
        } else {
            profit * self.params.middle_rate
        };

        tracing::trace!("ProfitTieredBonus: rank {}/{} seller {} -> {}", rank, total, seller.id(), bonus);
        bonus
    }

    fn name(&self) -> &str {
        "profit_tiered"
    }
}
