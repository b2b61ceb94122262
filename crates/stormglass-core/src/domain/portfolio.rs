use serde::{Deserialize, Serialize};

use crate::{Sector, Ticker, ValidationError};

/// One holding in a portfolio.
///
/// A holding carries either a share `quantity` or a percentage `weight`
/// (sometimes both, straight from a CSV). Normalization requires that a whole
/// portfolio is consistently one or the other; see
/// [`crate::compare::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPortfolioStock")]
pub struct PortfolioStock {
    pub ticker: Ticker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
}

/// Unvalidated wire shape; `PortfolioStock` deserializes through it so stored
/// JSON goes through the same checks as the constructors.
#[derive(Deserialize)]
struct RawPortfolioStock {
    ticker: Ticker,
    #[serde(default)]
    quantity: Option<f64>,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    sector: Option<Sector>,
}

impl TryFrom<RawPortfolioStock> for PortfolioStock {
    type Error = ValidationError;

    fn try_from(raw: RawPortfolioStock) -> Result<Self, Self::Error> {
        Self::new(raw.ticker, raw.quantity, raw.weight, raw.sector)
    }
}

impl PortfolioStock {
    pub fn new(
        ticker: Ticker,
        quantity: Option<f64>,
        weight: Option<f64>,
        sector: Option<Sector>,
    ) -> Result<Self, ValidationError> {
        if quantity.is_none() && weight.is_none() {
            return Err(ValidationError::EmptyHolding);
        }
        if let Some(quantity) = quantity {
            validate_quantity(quantity)?;
        }
        if let Some(weight) = weight {
            validate_weight(weight)?;
        }

        Ok(Self {
            ticker,
            quantity,
            weight,
            sector,
        })
    }

    pub fn from_quantity(
        ticker: Ticker,
        quantity: f64,
        sector: Option<Sector>,
    ) -> Result<Self, ValidationError> {
        Self::new(ticker, Some(quantity), None, sector)
    }

    pub fn from_weight(
        ticker: Ticker,
        weight: f64,
        sector: Option<Sector>,
    ) -> Result<Self, ValidationError> {
        Self::new(ticker, None, Some(weight), sector)
    }
}

/// A named collection of holdings.
///
/// Mutation mirrors the manual builder rules: duplicate tickers are rejected
/// and failed operations leave the portfolio untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub stocks: Vec<PortfolioStock>,
}

impl Portfolio {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stocks: Vec::new(),
        }
    }

    pub fn with_stocks(name: impl Into<String>, stocks: Vec<PortfolioStock>) -> Self {
        Self {
            name: name.into(),
            stocks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.stocks.iter().any(|stock| &stock.ticker == ticker)
    }

    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.stocks.iter().map(|stock| &stock.ticker)
    }

    /// Add a holding, rejecting duplicates.
    pub fn add(&mut self, stock: PortfolioStock) -> Result<(), ValidationError> {
        if self.contains(&stock.ticker) {
            return Err(ValidationError::DuplicateTicker {
                ticker: stock.ticker.to_string(),
            });
        }
        self.stocks.push(stock);
        Ok(())
    }

    /// Remove a holding by ticker, returning it if present.
    pub fn remove(&mut self, ticker: &Ticker) -> Option<PortfolioStock> {
        let index = self
            .stocks
            .iter()
            .position(|stock| &stock.ticker == ticker)?;
        Some(self.stocks.remove(index))
    }
}

fn validate_quantity(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field: "quantity" });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity { value });
    }
    Ok(())
}

fn validate_weight(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field: "weight" });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::WeightOutOfRange { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(raw: &str) -> Ticker {
        Ticker::parse(raw).expect("ticker")
    }

    #[test]
    fn add_rejects_duplicate_ticker_without_mutation() {
        let mut portfolio = Portfolio::new("Manual");
        portfolio
            .add(PortfolioStock::from_quantity(ticker("AAPL"), 10.0, None).expect("stock"))
            .expect("first add");

        let duplicate = PortfolioStock::from_quantity(ticker("aapl"), 5.0, None).expect("stock");
        let error = portfolio.add(duplicate).expect_err("duplicate must fail");
        assert!(matches!(error, ValidationError::DuplicateTicker { .. }));
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let error = PortfolioStock::from_quantity(ticker("MSFT"), 0.0, None)
            .expect_err("zero quantity must fail");
        assert!(matches!(
            error,
            ValidationError::NonPositiveQuantity { .. }
        ));
    }

    #[test]
    fn rejects_holding_with_neither_quantity_nor_weight() {
        let error = PortfolioStock::new(ticker("MSFT"), None, None, None)
            .expect_err("empty holding must fail");
        assert_eq!(error, ValidationError::EmptyHolding);
    }

    #[test]
    fn deserialization_enforces_constructor_rules() {
        let overweight: Result<PortfolioStock, _> =
            serde_json::from_str(r#"{"ticker":"AAPL","weight":500.0}"#);
        assert!(overweight.is_err());

        let negative: Result<PortfolioStock, _> =
            serde_json::from_str(r#"{"ticker":"AAPL","quantity":-5.0}"#);
        assert!(negative.is_err());

        let empty: Result<PortfolioStock, _> = serde_json::from_str(r#"{"ticker":"AAPL"}"#);
        assert!(empty.is_err());

        let valid: PortfolioStock =
            serde_json::from_str(r#"{"ticker":"aapl","quantity":10.0}"#).expect("valid holding");
        assert_eq!(valid.ticker.as_str(), "AAPL");
    }

    #[test]
    fn remove_returns_the_holding() {
        let mut portfolio = Portfolio::new("Manual");
        portfolio
            .add(PortfolioStock::from_weight(ticker("JNJ"), 10.0, Some(Sector::Healthcare)).expect("stock"))
            .expect("add");

        let removed = portfolio.remove(&ticker("JNJ")).expect("holding present");
        assert_eq!(removed.weight, Some(10.0));
        assert!(portfolio.is_empty());
    }
}
