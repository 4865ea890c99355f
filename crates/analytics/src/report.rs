use core_types::{SellerAccumulator, TopProduct};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places money values are reported with.
pub const MONEY_DP: u32 = 2;

/// One seller's finished line in the sales report.
///
/// Money fields are rounded to two decimal places, halves away from zero.
/// Rows are produced in profit rank order by `SalesAnalyzer::analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    /// Number of purchase records, not line items.
    pub sales_count: u64,
    /// Best sellers by quantity, largest first.
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal,
}

impl From<SellerAccumulator> for ReportRow {
    fn from(seller: SellerAccumulator) -> Self {
        Self {
            seller_id: seller.id().to_string(),
            name: seller.name().to_string(),
            revenue: round_money(seller.revenue()),
            profit: round_money(seller.profit()),
            sales_count: seller.sales_count(),
            top_products: seller.top_products().to_vec(),
            bonus: round_money(seller.bonus()),
        }
    }
}

/// Rounds to cents. Exact midpoints go away from zero: 1.005 -> 1.01, -1.005 -> -1.01.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}
