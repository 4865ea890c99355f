//! # Salesboard Analytics Engine
//!
//! This crate turns a product catalog, a seller roster and a stream of purchase
//! records into a ranked per-seller performance report with bonuses.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. It depends only on `core-types`, `strategies` and
//!   `configuration`.
//! - **Single Fold:** Every purchase record is visited exactly once, in input
//!   order, and folded into one accumulator per seller.
//! - **Deterministic Ranking:** Sellers are ordered with a stable sort on profit,
//!   so equal profits keep roster order and repeated runs agree exactly.
//!
//! ## Public API
//!
//! - `SalesAnalyzer`: runs the pipeline.
//! - `ReportRow`: one finished, rounded line of the report.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesAnalyzer;
pub use error::AnalyticsError;
pub use report::ReportRow;
