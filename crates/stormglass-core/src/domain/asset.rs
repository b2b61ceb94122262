use serde::{Deserialize, Serialize};

use crate::{Sector, Ticker, ValidationError};

/// A weighted asset in the dashboard's working universe.
///
/// `weight` is a portfolio percentage (0-100) and `risk` a 0-100 score; both
/// are validated at construction so the calculators never see out-of-range
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub ticker: Ticker,
    pub name: String,
    pub weight: f64,
    pub sector: Sector,
    pub risk: f64,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        ticker: Ticker,
        name: impl Into<String>,
        weight: f64,
        sector: Sector,
        risk: f64,
    ) -> Result<Self, ValidationError> {
        validate_percent("weight", weight)?;
        validate_score("risk", risk)?;

        Ok(Self {
            id: id.into(),
            ticker,
            name: name.into(),
            weight,
            sector,
            risk,
        })
    }
}

fn validate_percent(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::WeightOutOfRange { value });
    }
    Ok(())
}

fn validate_score(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::RiskOutOfRange { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_weight() {
        let ticker = Ticker::parse("AAPL").expect("ticker");
        let result = Asset::new("aapl", ticker, "Apple Inc.", 120.0, Sector::Technology, 65.0);
        assert!(matches!(
            result,
            Err(ValidationError::WeightOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_risk() {
        let ticker = Ticker::parse("AAPL").expect("ticker");
        let result = Asset::new(
            "aapl",
            ticker,
            "Apple Inc.",
            15.0,
            Sector::Technology,
            f64::NAN,
        );
        assert!(matches!(
            result,
            Err(ValidationError::NonFiniteValue { field: "risk" })
        ));
    }
}
