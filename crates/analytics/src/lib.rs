//! # GBCE Analytics
//!
//! This crate provides the valuation and aggregation calculations for the
//! stock market utility.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   the filesystem or the CLI. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every function takes its inputs explicitly
//!   (a stock descriptor, a price, a slice of trades, a clock reading) and
//!   returns a value. This makes the crate trivially testable.
//!
//! ## Public API
//!
//! - `dividend_yield` / `pe_ratio`: per-stock valuation from a quoted price.
//! - `volume_weighted_price` / `geometric_mean`: aggregates over the trade log.
//! - `PeRatio` / `VolumeWeightedPrice`: tagged results whose special variants
//!   replace the sentinel strings of older implementations.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod aggregation;
pub mod error;
pub mod valuation;

// Re-export the key components to create a clean, public-facing API.
pub use aggregation::{geometric_mean, volume_weighted_price, VolumeWeightedPrice};
pub use error::AnalyticsError;
pub use valuation::{dividend_yield, pe_ratio, PeRatio};
