//! # GBCE Trade Log Store
//!
//! This crate is the persistence adapter for the trade log. It is the only
//! part of the system that touches the filesystem.
//!
//! ## Architectural Principles
//!
//! - **Whole-file persistence:** The log is a single JSON array of
//!   `TradeRecord`, loaded and saved wholesale on every operation. At the
//!   expected data volume (thousands of rows at most) the O(n) rewrite per
//!   trade is acceptable.
//! - **Single writer:** There is no locking and no atomic rename. Concurrent
//!   invocations race on the read-modify-write cycle; the system assumes a
//!   single user running one invocation at a time.
//!
//! ## Public API
//!
//! - `TradeStore`: the handle bound to a backing file, providing `load`,
//!   `save`, and `record_trade`.
//! - `StoreError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod trade_log;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use trade_log::TradeStore;
