use crate::enums::{StockClass, TradeSide};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable reference data for a single listed stock.
///
/// `fixed_dividend_rate` is populated for `Preferred` stocks only; common
/// stocks carry their payout in `last_dividend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDescriptor {
    /// Ticker symbol, stored upper-case (e.g. "GIN").
    pub symbol: String,
    pub class: StockClass,
    pub last_dividend: i64,
    pub fixed_dividend_rate: Option<Decimal>,
    pub par_value: i64,
}

/// A single recorded trade. Immutable once written to the trade log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    /// Stamped by the store at record time, never user-supplied.
    pub timestamp: DateTime<Utc>,
    pub quantity: i64,
    pub side: TradeSide,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_record_json_shape_is_stable() {
        let record = TradeRecord {
            symbol: "TEA".to_string(),
            timestamp: "2026-01-02T03:04:05Z".parse().unwrap(),
            quantity: 88,
            side: TradeSide::Buy,
            price: 108,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["symbol"], "TEA");
        assert_eq!(json["quantity"], 88);
        assert_eq!(json["side"], "Buy");
        assert_eq!(json["price"], 108);
    }
}
