use crate::error::AnalyticsError;
use chrono::{DateTime, Duration, Utc};
use core_types::TradeRecord;
use std::fmt;

/// Trailing window for the volume-weighted stock price.
const WINDOW_MINUTES: i64 = 15;

/// Result of the volume-weighted price calculation over the trailing window.
///
/// An empty window is a legitimate answer, not an error, so callers get a
/// tagged variant instead of a sentinel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeWeightedPrice {
    Price(i64),
    NoTradesInWindow,
}

impl fmt::Display for VolumeWeightedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeWeightedPrice::Price(price) => write!(f, "{price}"),
            VolumeWeightedPrice::NoTradesInWindow => write!(f, "There are no trades recorded"),
        }
    }
}

/// Computes the volume-weighted stock price over trades stamped strictly
/// inside the past 15 minutes. A trade at exactly `now - 15min` is excluded.
///
/// The per-trade cost term is `price + quantity`, carried over verbatim from
/// the reference implementation and pinned by its test suite, even though
/// its own documentation describes `price * quantity`. Likely a defect in
/// the original; see DESIGN.md before changing it.
pub fn volume_weighted_price(trades: &[TradeRecord], now: DateTime<Utc>) -> VolumeWeightedPrice {
    let cutoff = now - Duration::minutes(WINDOW_MINUTES);
    let recent: Vec<&TradeRecord> = trades.iter().filter(|t| t.timestamp > cutoff).collect();

    if recent.is_empty() {
        return VolumeWeightedPrice::NoTradesInWindow;
    }

    let total_cost: i64 = recent.iter().map(|t| t.price + t.quantity).sum();
    let total_quantity: i64 = recent.iter().map(|t| t.quantity).sum();
    tracing::debug!(
        trades = recent.len(),
        total_cost,
        total_quantity,
        "Aggregating volume-weighted price."
    );

    // A window whose quantities sum to zero carries no volume to weight by.
    match total_cost.checked_div(total_quantity) {
        Some(price) => VolumeWeightedPrice::Price(price),
        None => VolumeWeightedPrice::NoTradesInWindow,
    }
}

/// Computes the geometric mean of the traded price across the entire log.
///
/// Unlike the volume-weighted price this is deliberately not time-windowed;
/// it feeds the all-share index over the full trading history.
pub fn geometric_mean(trades: &[TradeRecord]) -> Result<f64, AnalyticsError> {
    if trades.is_empty() {
        return Err(AnalyticsError::EmptyLog);
    }

    // Log-sum-exp keeps the product from overflowing for long logs.
    let log_sum: f64 = trades.iter().map(|t| (t.price as f64).ln()).sum();
    Ok((log_sum / trades.len() as f64).exp())
}
