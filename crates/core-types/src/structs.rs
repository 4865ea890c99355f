use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==============================================================================
// Reference Data
// ==============================================================================

/// A catalog entry. Only `sku` and `purchase_price` take part in the analysis;
/// the remaining fields are carried along when present in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// What the business paid per unit. The cost side of profit.
    pub purchase_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Catalog list price. Revenue uses the price on the line item instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
}

/// A member of the sales team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Seller {
    /// The display name used in reports: first name, a space, last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ==============================================================================
// Transactions
// ==============================================================================

/// One product entry inside a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    /// Per-unit price charged to the customer, before discount.
    pub sale_price: Decimal,
    pub quantity: u32,
    /// Percentage in `[0, 100]`. Not range-checked here.
    #[serde(default)]
    pub discount: Decimal,
}

/// A single receipt: one seller, one or more line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<Decimal>,
}

/// The three input collections of a sales analysis.
///
/// Each collection is optional so that a dataset missing one of them can be
/// told apart from one where it is present but empty. The analyzer rejects both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub sellers: Option<Vec<Seller>>,
    #[serde(default)]
    pub purchase_records: Option<Vec<PurchaseRecord>>,
}

impl SalesData {
    /// Builds a dataset where all three collections are present.
    pub fn new(
        products: Vec<Product>,
        sellers: Vec<Seller>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            products: Some(products),
            sellers: Some(sellers),
            purchase_records: Some(purchase_records),
        }
    }

    /// Parses a dataset from a JSON document with `products`, `sellers` and
    /// `purchase_records` arrays.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let data = serde_json::from_str::<SalesData>(json)?;
        tracing::debug!(
            "Parsed dataset: {} products, {} sellers, {} purchase records",
            data.products.as_ref().map_or(0, Vec::len),
            data.sellers.as_ref().map_or(0, Vec::len),
            data.purchase_records.as_ref().map_or(0, Vec::len),
        );
        Ok(data)
    }
}

// ==============================================================================
// Per-Seller Aggregation State
// ==============================================================================

/// A sku and the total quantity a seller moved of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Running totals for one seller while purchase records are folded in.
///
/// Values are kept at full precision; rounding happens only when a report row
/// is produced from the finished accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    id: String,
    name: String,
    revenue: Decimal,
    profit: Decimal,
    sales_count: u64,
    // Quantities in first-seen order, with a position index for lookups.
    products_sold: Vec<TopProduct>,
    sku_positions: HashMap<String, usize>,
    bonus: Decimal,
    top_products: Vec<TopProduct>,
}

impl SellerAccumulator {
    /// Creates a zeroed accumulator for the given seller.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_positions: HashMap::new(),
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    pub fn profit(&self) -> Decimal {
        self.profit
    }

    /// Number of purchase records attributed to this seller.
    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    pub fn bonus(&self) -> Decimal {
        self.bonus
    }

    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }

    /// Cumulative quantities per sku, in the order each sku was first sold.
    pub fn products_sold(&self) -> &[TopProduct] {
        &self.products_sold
    }

    /// Total quantity sold of `sku`, or zero if the seller never sold it.
    pub fn quantity_sold(&self, sku: &str) -> u64 {
        self.sku_positions
            .get(sku)
            .map_or(0, |&pos| self.products_sold[pos].quantity)
    }

    /// Counts one purchase record, regardless of how many line items it has.
    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// Folds one priced line item into the running totals.
    ///
    /// On overflow the accumulator is left unchanged.
    pub fn add_line_item(
        &mut self,
        sku: &str,
        quantity: u32,
        revenue: Decimal,
        profit: Decimal,
    ) -> Result<(), CoreError> {
        let (Some(total_revenue), Some(total_profit)) = (
            self.revenue.checked_add(revenue),
            self.profit.checked_add(profit),
        ) else {
            return Err(CoreError::Overflow {
                seller_id: self.id.clone(),
            });
        };
        self.revenue = total_revenue;
        self.profit = total_profit;

        match self.sku_positions.get(sku) {
            Some(&pos) => self.products_sold[pos].quantity += u64::from(quantity),
            None => {
                self.sku_positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(TopProduct {
                    sku: sku.to_string(),
                    quantity: u64::from(quantity),
                });
            }
        }
        Ok(())
    }

    pub fn set_bonus(&mut self, bonus: Decimal) {
        self.bonus = bonus;
    }

    pub fn set_top_products(&mut self, top_products: Vec<TopProduct>) {
        self.top_products = top_products;
    }
}
