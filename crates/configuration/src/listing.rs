use crate::error::ConfigError;
use core_types::{StockClass, StockDescriptor};
use rust_decimal_macros::dec;

/// The immutable stock reference table.
///
/// Constructed once at startup and passed by reference into every valuation
/// call; deliberately not a module-level global.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    stocks: Vec<StockDescriptor>,
}

impl ReferenceTable {
    /// The fixed GBCE sample listing.
    pub fn gbce() -> Self {
        let stocks = vec![
            common("TEA", 0, 100),
            common("POP", 8, 100),
            common("ALE", 23, 60),
            StockDescriptor {
                symbol: "GIN".to_string(),
                class: StockClass::Preferred,
                last_dividend: 8,
                fixed_dividend_rate: Some(dec!(0.02)),
                par_value: 100,
            },
            common("JOE", 13, 250),
        ];
        Self { stocks }
    }

    /// Case-insensitive lookup by ticker symbol.
    pub fn get(&self, symbol: &str) -> Result<&StockDescriptor, ConfigError> {
        self.stocks
            .iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(symbol.trim()))
            .ok_or_else(|| ConfigError::UnknownSymbol(symbol.to_string()))
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

fn common(symbol: &str, last_dividend: i64, par_value: i64) -> StockDescriptor {
    StockDescriptor {
        symbol: symbol.to_string(),
        class: StockClass::Common,
        last_dividend,
        fixed_dividend_rate: None,
        par_value,
    }
}
