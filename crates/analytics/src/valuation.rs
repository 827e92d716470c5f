use crate::error::AnalyticsError;
use core_types::{StockClass, StockDescriptor};
use rust_decimal::Decimal;
use std::fmt;

/// Result of a P/E calculation.
///
/// A zero dividend yield makes the ratio undefined; that outcome is a
/// legitimate answer, not an error, so callers get a tagged variant instead
/// of a sentinel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeRatio {
    Ratio(Decimal),
    UndefinedZeroDividend,
}

impl fmt::Display for PeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeRatio::Ratio(ratio) => write!(f, "{ratio}"),
            PeRatio::UndefinedZeroDividend => write!(f, "Last dividend is zero"),
        }
    }
}

/// Computes the dividend yield for a stock at the given quoted price.
///
/// Common stocks: `last_dividend / price`. Preferred stocks:
/// `fixed_dividend_rate * par_value / price`.
pub fn dividend_yield(
    descriptor: &StockDescriptor,
    price: Decimal,
) -> Result<Decimal, AnalyticsError> {
    if price <= Decimal::ZERO {
        return Err(AnalyticsError::NonPositivePrice(price));
    }

    let annual_dividend = match descriptor.class {
        StockClass::Common => Decimal::from(descriptor.last_dividend),
        StockClass::Preferred => {
            // A preferred stock without a rate pays nothing.
            let rate = descriptor.fixed_dividend_rate.unwrap_or(Decimal::ZERO);
            rate * Decimal::from(descriptor.par_value)
        }
    };

    let yield_ = annual_dividend / price;
    tracing::debug!(symbol = %descriptor.symbol, %price, %yield_, "Computed dividend yield.");
    Ok(yield_)
}

/// Computes the P/E ratio (`price / dividend_yield`) for a stock at the
/// given quoted price.
pub fn pe_ratio(descriptor: &StockDescriptor, price: Decimal) -> Result<PeRatio, AnalyticsError> {
    let yield_ = dividend_yield(descriptor, price)?;

    if yield_.is_zero() {
        return Ok(PeRatio::UndefinedZeroDividend);
    }

    Ok(PeRatio::Ratio(price / yield_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ale() -> StockDescriptor {
        StockDescriptor {
            symbol: "ALE".to_string(),
            class: StockClass::Common,
            last_dividend: 23,
            fixed_dividend_rate: None,
            par_value: 60,
        }
    }

    fn gin() -> StockDescriptor {
        StockDescriptor {
            symbol: "GIN".to_string(),
            class: StockClass::Preferred,
            last_dividend: 8,
            fixed_dividend_rate: Some(dec!(0.02)),
            par_value: 100,
        }
    }

    fn tea() -> StockDescriptor {
        StockDescriptor {
            symbol: "TEA".to_string(),
            class: StockClass::Common,
            last_dividend: 0,
            fixed_dividend_rate: None,
            par_value: 100,
        }
    }

    #[test]
    fn common_yield_is_last_dividend_over_price() {
        let yield_ = dividend_yield(&ale(), dec!(10)).unwrap();
        assert_eq!(yield_, dec!(2.3));
    }

    #[test]
    fn preferred_yield_uses_fixed_rate_and_par_value() {
        let yield_ = dividend_yield(&gin(), dec!(5)).unwrap();
        assert_eq!(yield_, dec!(0.4));
    }

    #[test]
    fn preferred_pe_ratio_matches_reference_value() {
        let ratio = pe_ratio(&gin(), dec!(5)).unwrap();
        assert_eq!(ratio, PeRatio::Ratio(dec!(12.5)));
    }

    #[test]
    fn zero_dividend_makes_the_pe_ratio_undefined() {
        let ratio = pe_ratio(&tea(), dec!(100)).unwrap();
        assert_eq!(ratio, PeRatio::UndefinedZeroDividend);
        assert_eq!(ratio.to_string(), "Last dividend is zero");
    }

    #[test]
    fn zero_or_negative_price_is_rejected() {
        assert!(matches!(
            dividend_yield(&ale(), Decimal::ZERO),
            Err(AnalyticsError::NonPositivePrice(_))
        ));
        assert!(matches!(
            pe_ratio(&ale(), dec!(-1)),
            Err(AnalyticsError::NonPositivePrice(_))
        ));
    }
}
