//! # Salesboard Strategy Library
//!
//! This crate holds the policy surface of the sales analysis: how a line item is
//! priced into revenue, and how a ranked seller is paid a bonus. It defines one
//! trait for each and provides the standard implementations.
//!
//! ## Architectural Principles
//!
//! - **Pure Policy:** Strategies are stateless functions of their inputs. They
//!   know nothing about how data is loaded or how reports are rendered.
//! - **Aggregator Agnostic:** The analyzer only sees `dyn RevenueStrategy` and
//!   `dyn BonusStrategy`, so a new pricing or incentive model never touches it.
//! - **Plain Functions Welcome:** Any `Fn` with the right signature is already a
//!   strategy, which keeps ad-hoc policies and tests free of boilerplate.
//!
//! ## Public API
//!
//! - `RevenueStrategy`, `BonusStrategy`: the two policy traits.
//! - `Strategies`: the pair of policies handed to the analyzer.
//! - `create_revenue_strategy`, `create_bonus_strategy`: factories driven by configuration.
//! - `SimpleRevenue`, `ProfitTieredBonus`: the standard policies.

// Declare all the modules that constitute this crate.
pub mod error;
pub mod factory;
pub mod profit_tiered_bonus;
pub mod simple_revenue;

// Re-export the key components to create a clean, public-facing API.
pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use profit_tiered_bonus::ProfitTieredBonus;
pub use simple_revenue::SimpleRevenue;

// Re-export the strategy identifiers from core_types
pub use core_types::{BonusStrategyId, RevenueStrategyId};

use configuration::StrategySettings;
use core_types::{LineItem, Product, SellerAccumulator};
use rust_decimal::Decimal;
use std::fmt;

/// Turns one purchased line item into a revenue amount.
///
/// The `Send + Sync` bounds let a strategy set be shared by callers that run
/// several analyses side by side.
pub trait RevenueStrategy: Send + Sync {
    /// Revenue earned by `item`. `product` is the catalog entry for its sku.
    ///
    /// `None` means the amount overflowed `Decimal`; the analysis is aborted.
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal>;

    /// A short identifier for logs.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Decides the bonus for a seller once all sellers are ranked by profit.
pub trait BonusStrategy: Send + Sync {
    /// Bonus for the seller at 0-based `rank` out of `total` sellers.
    ///
    /// `seller` holds final revenue and profit totals when this is called.
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal;

    /// A short identifier for logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal> + Send + Sync,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> Decimal + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        self(rank, total, seller)
    }
}

/// The pricing and bonus policies for one analysis.
///
/// Either slot may be empty; the analyzer refuses to run until both are filled.
#[derive(Default)]
pub struct Strategies {
    pub revenue: Option<Box<dyn RevenueStrategy>>,
    pub bonus: Option<Box<dyn BonusStrategy>>,
}

impl Strategies {
    /// Creates a complete strategy set.
    pub fn new(
        revenue: impl RevenueStrategy + 'static,
        bonus: impl BonusStrategy + 'static,
    ) -> Self {
        Self {
            revenue: Some(Box::new(revenue)),
            bonus: Some(Box::new(bonus)),
        }
    }

    /// The standard policies: `SimpleRevenue` and the default `ProfitTieredBonus`.
    pub fn standard() -> Self {
        Self::new(SimpleRevenue::new(), ProfitTieredBonus::default())
    }

    /// Builds both policies from the `[strategies]` configuration section.
    pub fn from_settings(settings: &StrategySettings) -> Result<Self, StrategyError> {
        Ok(Self {
            revenue: Some(create_revenue_strategy(settings.revenue)?),
            bonus: Some(create_bonus_strategy(settings.bonus, settings)?),
        })
    }

    pub fn with_revenue(mut self, revenue: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Box::new(revenue));
        self
    }

    pub fn with_bonus(mut self, bonus: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Box::new(bonus));
        self
    }
}

impl fmt::Debug for Strategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategies")
            .field("revenue", &self.revenue.as_ref().map(|s| s.name()))
            .field("bonus", &self.bonus.as_ref().map(|s| s.name()))
            .finish()
    }
}
