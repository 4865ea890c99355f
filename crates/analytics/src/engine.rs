use crate::error::AnalyticsError;
use crate::report::ReportRow;
use configuration::AnalysisSettings;
use core_types::{
    LookupKind, Product, PurchaseRecord, SalesData, Seller, SellerAccumulator, TopProduct,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use strategies::{BonusStrategy, RevenueStrategy, Strategies};

/// A stateless calculator that ranks sellers by profit and assigns bonuses.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyzer {
    settings: AnalysisSettings,
}

impl SalesAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// The main entry point for the sales analysis.
    ///
    /// # Arguments
    ///
    /// * `data` - The product catalog, seller roster and purchase records. All
    ///   three must be present and non-empty.
    /// * `strategies` - The pricing and bonus policies. Both must be set.
    ///
    /// # Returns
    ///
    /// One `ReportRow` per seller, ordered by profit from highest to lowest.
    /// Sellers with equal profit keep their roster order.
    ///
    /// # Errors
    ///
    /// * `AnalyticsError::InvalidInput` - a collection is missing or empty, or
    ///   a seller id or sku appears twice in the reference data.
    /// * `AnalyticsError::InvalidStrategy` - a strategy slot is empty.
    /// * `AnalyticsError::LookupFailure` - a purchase record names a seller or
    ///   a line item names a sku that does not exist. Nothing is returned.
    /// * `AnalyticsError::Overflow` - a line total or a seller's running total
    ///   does not fit in a `Decimal`.
    pub fn analyze(
        &self,
        data: &SalesData,
        strategies: &Strategies,
    ) -> Result<Vec<ReportRow>, AnalyticsError> {
        let (products, sellers, records) = validate_data(data)?;
        let (revenue_strategy, bonus_strategy) = validate_strategies(strategies)?;

        let product_index = index_products(products)?;
        let (mut accumulators, seller_index) = init_accumulators(sellers)?;

        let line_items = fold_records(
            records,
            &product_index,
            &seller_index,
            &mut accumulators,
            revenue_strategy,
        )?;

        // Stable: equal profits keep roster order.
        accumulators.sort_by(|a, b| b.profit().cmp(&a.profit()));
        tracing::debug!("Ranked {} sellers by profit", accumulators.len());

        let total = accumulators.len();
        for (rank, seller) in accumulators.iter_mut().enumerate() {
            let bonus = bonus_strategy.bonus(rank, total, seller);
            let top = top_products(seller.products_sold(), self.settings.top_products_limit);
            seller.set_bonus(bonus);
            seller.set_top_products(top);
        }

        tracing::info!(
            "Sales analysis complete: {} sellers, {} purchase records, {} line items (revenue: {}, bonus: {})",
            total,
            records.len(),
            line_items,
            revenue_strategy.name(),
            bonus_strategy.name(),
        );

        Ok(accumulators.into_iter().map(ReportRow::from).collect())
    }
}

/// Checks that all three collections are present and non-empty.
fn validate_data(
    data: &SalesData,
) -> Result<(&[Product], &[Seller], &[PurchaseRecord]), AnalyticsError> {
    let products = require_collection("products", data.products.as_deref())?;
    let sellers = require_collection("sellers", data.sellers.as_deref())?;
    let records = require_collection("purchase_records", data.purchase_records.as_deref())?;
    Ok((products, sellers, records))
}

fn require_collection<'a, T>(
    field: &str,
    collection: Option<&'a [T]>,
) -> Result<&'a [T], AnalyticsError> {
    match collection {
        None => {
            tracing::warn!("Rejecting sales data: '{}' is missing", field);
            Err(AnalyticsError::InvalidInput(format!("'{field}' is missing")))
        }
        Some([]) => {
            tracing::warn!("Rejecting sales data: '{}' is empty", field);
            Err(AnalyticsError::InvalidInput(format!("'{field}' is empty")))
        }
        Some(items) => Ok(items),
    }
}

fn validate_strategies(
    strategies: &Strategies,
) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy), AnalyticsError> {
    match (strategies.revenue.as_deref(), strategies.bonus.as_deref()) {
        (Some(revenue), Some(bonus)) => Ok((revenue, bonus)),
        (revenue, bonus) => {
            let mut missing = Vec::new();
            if revenue.is_none() {
                missing.push("revenue");
            }
            if bonus.is_none() {
                missing.push("bonus");
            }
            tracing::warn!("Rejecting strategies: missing {:?}", missing);
            Err(AnalyticsError::InvalidStrategy(format!(
                "missing {} strategy",
                missing.join(" and ")
            )))
        }
    }
}

/// Maps sku to product, refusing duplicate skus.
fn index_products(products: &[Product]) -> Result<HashMap<&str, &Product>, AnalyticsError> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        match index.entry(product.sku.as_str()) {
            Entry::Occupied(_) => {
                return Err(AnalyticsError::InvalidInput(format!(
                    "duplicate product sku '{}'",
                    product.sku
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(product);
            }
        }
    }
    Ok(index)
}

/// Creates one zeroed accumulator per seller, in roster order, plus an id index into them.
fn init_accumulators(
    sellers: &[Seller],
) -> Result<(Vec<SellerAccumulator>, HashMap<&str, usize>), AnalyticsError> {
    let mut accumulators = Vec::with_capacity(sellers.len());
    let mut index = HashMap::with_capacity(sellers.len());
    for seller in sellers {
        match index.entry(seller.id.as_str()) {
            Entry::Occupied(_) => {
                return Err(AnalyticsError::InvalidInput(format!(
                    "duplicate seller id '{}'",
                    seller.id
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(accumulators.len());
                accumulators.push(SellerAccumulator::new(seller));
            }
        }
    }
    Ok((accumulators, index))
}

/// Folds every purchase record into its seller's accumulator, in input order.
///
/// Returns the number of line items processed.
fn fold_records(
    records: &[PurchaseRecord],
    product_index: &HashMap<&str, &Product>,
    seller_index: &HashMap<&str, usize>,
    accumulators: &mut [SellerAccumulator],
    revenue_strategy: &dyn RevenueStrategy,
) -> Result<usize, AnalyticsError> {
    let mut line_items = 0;

    for record in records {
        let &position = seller_index
            .get(record.seller_id.as_str())
            .ok_or_else(|| lookup_failure(LookupKind::Seller, &record.seller_id))?;
        let seller = &mut accumulators[position];
        seller.record_sale();

        for item in &record.items {
            let product = product_index
                .get(item.sku.as_str())
                .ok_or_else(|| lookup_failure(LookupKind::Product, &item.sku))?;

            let priced = revenue_strategy.revenue(item, product).and_then(|revenue| {
                let cost = product
                    .purchase_price
                    .checked_mul(Decimal::from(item.quantity))?;
                Some((revenue, revenue.checked_sub(cost)?))
            });
            let Some((revenue, profit)) = priced else {
                return Err(overflow(&record.seller_id, &item.sku));
            };
            seller
                .add_line_item(&item.sku, item.quantity, revenue, profit)
                .map_err(|_| overflow(&record.seller_id, &item.sku))?;
            line_items += 1;
        }
    }

    Ok(line_items)
}

fn lookup_failure(kind: LookupKind, key: &str) -> AnalyticsError {
    tracing::warn!("Aborting analysis: unknown {} '{}'", kind, key);
    AnalyticsError::LookupFailure {
        kind,
        key: key.to_string(),
    }
}

fn overflow(seller_id: &str, sku: &str) -> AnalyticsError {
    tracing::warn!("Aborting analysis: totals for seller '{}' overflowed at sku '{}'", seller_id, sku);
    AnalyticsError::Overflow {
        seller_id: seller_id.to_string(),
    }
}

/// The `limit` largest quantities, largest first. Ties keep first-sold order.
fn top_products(products_sold: &[TopProduct], limit: usize) -> Vec<TopProduct> {
    let mut ranked = products_sold.to_vec();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::LineItem;
    use rust_decimal_macros::dec;

    fn product(sku: &str, purchase_price: Decimal) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: "First".to_string(),
            last_name: id.to_string(),
            start_date: None,
            position: None,
        }
    }

    fn item(sku: &str, sale_price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            sale_price,
            quantity,
            discount: Decimal::ZERO,
        }
    }

    fn record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            items,
            receipt_id: None,
            date: None,
            customer_id: None,
            total_amount: None,
            total_discount: None,
        }
    }

    fn tally(sku: &str, quantity: u64) -> TopProduct {
        TopProduct {
            sku: sku.to_string(),
            quantity,
        }
    }

    #[test]
    fn top_products_sorts_descending_and_truncates() {
        let sold = vec![tally("a", 1), tally("b", 5), tally("c", 3), tally("d", 5)];
        let top = top_products(&sold, 3);
        assert_eq!(top, vec![tally("b", 5), tally("d", 5), tally("c", 3)]);
    }

    #[test]
    fn missing_collection_is_reported_by_name() {
        let data = SalesData {
            products: Some(vec![product("SKU_001", dec!(1))]),
            sellers: None,
            purchase_records: Some(vec![]),
        };
        let err = validate_data(&data).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(msg) if msg.contains("sellers")));
    }

    #[test]
    fn empty_strategy_slots_are_named() {
        let err = validate_strategies(&Strategies::default()).err().unwrap();
        assert!(
            matches!(err, AnalyticsError::InvalidStrategy(msg) if msg == "missing revenue and bonus strategy")
        );
    }

    #[test]
    fn duplicate_seller_ids_are_rejected() {
        let err = init_accumulators(&[seller("s1"), seller("s1")]).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(msg) if msg.contains("s1")));
    }

    #[test]
    fn duplicate_skus_are_rejected() {
        let products = [product("SKU_001", dec!(1)), product("SKU_001", dec!(2))];
        let err = index_products(&products).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(msg) if msg.contains("SKU_001")));
    }

    #[test]
    fn fold_accumulates_profit_as_revenue_minus_cost() {
        let products = [product("SKU_001", dec!(6)), product("SKU_002", dec!(1.5))];
        let sellers = [seller("s1")];
        let records = [
            record("s1", vec![item("SKU_001", dec!(10), 2), item("SKU_002", dec!(3), 4)]),
            record("s1", vec![item("SKU_001", dec!(10), 1)]),
        ];
        let product_index = index_products(&products).unwrap();
        let (mut accumulators, seller_index) = init_accumulators(&sellers).unwrap();
        let revenue = strategies::SimpleRevenue::new();

        let line_items = fold_records(
            &records,
            &product_index,
            &seller_index,
            &mut accumulators,
            &revenue,
        )
        .unwrap();

        let acc = &accumulators[0];
        assert_eq!(line_items, 3);
        assert_eq!(acc.sales_count(), 2);
        assert_eq!(acc.revenue(), dec!(42));
        // (20 - 12) + (12 - 6) + (10 - 6)
        assert_eq!(acc.profit(), dec!(18));
        assert_eq!(acc.quantity_sold("SKU_001"), 3);
        assert_eq!(acc.quantity_sold("SKU_002"), 4);
    }

    #[test]
    fn top_products_limit_comes_from_settings() {
        let products: Vec<_> = (0..5).map(|i| product(&format!("SKU_{i}"), dec!(1))).collect();
        let items: Vec<_> = (0..5)
            .map(|i| item(&format!("SKU_{i}"), dec!(2), i + 1))
            .collect();
        let data = SalesData::new(products, vec![seller("s1")], vec![record("s1", items)]);
        let analyzer = SalesAnalyzer::new(AnalysisSettings {
            top_products_limit: 2,
        });

        let report = analyzer.analyze(&data, &Strategies::standard()).unwrap();
        assert_eq!(report[0].top_products, vec![tally("SKU_4", 5), tally("SKU_3", 4)]);
    }
}
