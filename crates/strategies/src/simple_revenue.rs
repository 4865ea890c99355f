use crate::RevenueStrategy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Discounted line revenue: `sale_price * quantity * (1 - discount / 100)`.
///
/// The product is not consulted. A discount outside `[0, 100]` is applied as
/// given, so 150 yields negative revenue and -10 a surcharge. Returns `None`
/// when the line total does not fit in a `Decimal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        let discount = item.discount.checked_div(dec!(100))?;
        let gross = item.sale_price.checked_mul(Decimal::from(item.quantity))?;
        gross.checked_mul(Decimal::ONE.checked_sub(discount)?)
    }

    fn name(&self) -> &str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            sku: "SKU_001".to_string(),
            purchase_price: dec!(50),
            name: None,
            category: None,
            sale_price: None,
        }
    }

    fn item(sale_price: Decimal, quantity: u32, discount: Decimal) -> LineItem {
        LineItem {
            sku: "SKU_001".to_string(),
            sale_price,
            quantity,
            discount,
        }
    }

    #[test]
    fn applies_percentage_discount_to_line_total() {
        let revenue = SimpleRevenue.revenue(&item(dec!(100), 3, dec!(10)), &product()).unwrap();
        assert_eq!(revenue, dec!(270.00));
    }

    #[test]
    fn zero_discount_is_full_price() {
        let revenue = SimpleRevenue.revenue(&item(dec!(19.99), 2, dec!(0)), &product()).unwrap();
        assert_eq!(revenue, dec!(39.98));
    }

    #[test]
    fn full_discount_yields_nothing() {
        let revenue = SimpleRevenue.revenue(&item(dec!(42), 5, dec!(100)), &product()).unwrap();
        assert_eq!(revenue, Decimal::ZERO);
    }

    #[test]
    fn out_of_range_discount_passes_through() {
        let revenue = SimpleRevenue.revenue(&item(dec!(10), 1, dec!(150)), &product()).unwrap();
        assert_eq!(revenue, dec!(-5));
    }

    #[test]
    fn line_total_overflow_yields_none() {
        let huge = Decimal::MAX / dec!(2);
        assert_eq!(SimpleRevenue.revenue(&item(huge, 4, dec!(0)), &product()), None);
    }

    #[test]
    fn keeps_full_precision() {
        let revenue = SimpleRevenue.revenue(&item(dec!(10.01), 3, dec!(3.5)), &product()).unwrap();
        assert_eq!(revenue, dec!(28.97895));
    }
}
