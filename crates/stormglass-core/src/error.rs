use thiserror::Error;

use crate::domain::AlertMetric;

/// Validation and contract errors exposed by `stormglass-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("weight {value} is outside the 0-100 percent range")]
    WeightOutOfRange { value: f64 },
    #[error("risk score {value} is outside the 0-100 range")]
    RiskOutOfRange { value: f64 },
    #[error("severity {value} is outside the 1-100 range")]
    SeverityOutOfRange { value: u8 },

    #[error("quantity must be positive, got {value}")]
    NonPositiveQuantity { value: f64 },
    #[error("ticker {ticker} is already in the portfolio")]
    DuplicateTicker { ticker: String },
    #[error("a holding needs a quantity or a weight")]
    EmptyHolding,
    #[error("portfolio '{name}' mixes quantity-based and weight-based holdings")]
    MixedHoldings { name: String },

    #[error("threshold {value} is invalid for {metric}: expected {expected}")]
    ThresholdOutOfRange {
        metric: AlertMetric,
        value: f64,
        expected: &'static str,
    },
    #[error("notification target cannot be blank")]
    BlankNotificationTarget,

    #[error("unknown historical event '{id}'")]
    UnknownEvent { id: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
}
