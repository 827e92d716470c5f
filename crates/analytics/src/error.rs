use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("The trade log is empty; nothing to aggregate")]
    EmptyLog,
}
