pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusStrategyId, LookupKind, RevenueStrategyId};
pub use error::CoreError;
pub use structs::{
    LineItem, Product, PurchaseRecord, SalesData, Seller, SellerAccumulator, TopProduct,
};
