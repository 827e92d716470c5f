use crate::error::StoreError;
use chrono::Utc;
use core_types::{TradeRecord, TradeSide};
use std::fs;
use std::path::{Path, PathBuf};

/// The `TradeStore` provides a high-level interface to the persisted trade
/// log. It encapsulates all filesystem access and the JSON wire format.
#[derive(Debug, Clone)]
pub struct TradeStore {
    path: PathBuf,
}

impl TradeStore {
    /// Binds a store to a backing file. The file is not created until the
    /// first trade is recorded; an absent file reads as an empty log.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full trade log in insertion order.
    pub fn load(&self) -> Result<Vec<TradeRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| StoreError::ReadFailure {
            path: self.path.clone(),
            source: e.into(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| StoreError::ReadFailure {
            path: self.path.clone(),
            source: e.into(),
        })
    }

    /// Persists the full trade log, replacing the previous file contents.
    pub fn save(&self, trades: &[TradeRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(trades).map_err(|e| StoreError::WriteFailure {
            path: self.path.clone(),
            source: e.into(),
        })?;

        fs::write(&self.path, json).map_err(|e| StoreError::WriteFailure {
            path: self.path.clone(),
            source: e.into(),
        })
    }

    /// Stamps the current wall-clock time on a new trade, appends it to the
    /// log, persists the whole collection, and returns the updated log.
    pub fn record_trade(
        &self,
        symbol: &str,
        quantity: i64,
        side: TradeSide,
        price: i64,
    ) -> Result<Vec<TradeRecord>, StoreError> {
        let mut trades = self.load()?;

        trades.push(TradeRecord {
            symbol: symbol.trim().to_ascii_uppercase(),
            timestamp: Utc::now(),
            quantity,
            side,
            price,
        });

        self.save(&trades)?;
        tracing::info!(
            path = %self.path.display(),
            total = trades.len(),
            "Recorded trade and rewrote the log."
        );

        Ok(trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TradeStore {
        TradeStore::open(dir.path().join("recorded_trades.json"))
    }

    #[test]
    fn absent_file_reads_as_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn recorded_trades_survive_a_reload_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.record_trade("tea", 88, TradeSide::Buy, 108).unwrap();
        store.record_trade("gin", 44, TradeSide::Sell, 40).unwrap();
        store.record_trade("pop", 88, TradeSide::Buy, 99).unwrap();

        let log = store.load().unwrap();
        assert_eq!(log.len(), 3);

        let rows: Vec<(&str, i64, TradeSide, i64)> = log
            .iter()
            .map(|t| (t.symbol.as_str(), t.quantity, t.side, t.price))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("TEA", 88, TradeSide::Buy, 108),
                ("GIN", 44, TradeSide::Sell, 40),
                ("POP", 88, TradeSide::Buy, 99),
            ]
        );
    }

    #[test]
    fn load_then_save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.record_trade("ale", 10, TradeSide::Buy, 60).unwrap();
        store.record_trade("joe", 5, TradeSide::Sell, 250).unwrap();
        let before = fs::read(store.path()).unwrap();

        let log = store.load().unwrap();
        store.save(&log).unwrap();
        let after = fs::read(store.path()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn malformed_file_is_a_read_failure_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"not json at all").unwrap();

        match store.load() {
            Err(StoreError::ReadFailure { path, .. }) => assert_eq!(path, store.path()),
            other => panic!("expected ReadFailure, got {other:?}"),
        }
    }

    #[test]
    fn record_trade_returns_the_updated_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let log = store.record_trade("TEA", 1, TradeSide::Buy, 10).unwrap();
        assert_eq!(log.len(), 1);
        let log = store.record_trade("TEA", 2, TradeSide::Sell, 11).unwrap();
        assert_eq!(log.len(), 2);
    }
}
