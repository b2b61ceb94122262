//! Portfolio weight normalization, comparison, and overlap scoring.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Portfolio, Ticker, ValidationError};

/// Normalized percentage weights per ticker.
pub type WeightMap = BTreeMap<Ticker, f64>;

/// Convert a portfolio into comparable percentage weights.
///
/// All-weight portfolios pass through unchanged. All-quantity portfolios
/// treat quantity as value (an admitted approximation; correct weights need
/// price data) and scale to 100. Anything else is a user-input error.
pub fn normalize(portfolio: &Portfolio) -> Result<WeightMap, ValidationError> {
    let all_weighted = portfolio.stocks.iter().all(|stock| stock.weight.is_some());
    if all_weighted {
        return Ok(portfolio
            .stocks
            .iter()
            .map(|stock| (stock.ticker.clone(), stock.weight.unwrap_or(0.0)))
            .collect());
    }

    let all_quantified = portfolio
        .stocks
        .iter()
        .all(|stock| stock.quantity.is_some() && stock.weight.is_none());
    if all_quantified {
        let total: f64 = portfolio
            .stocks
            .iter()
            .filter_map(|stock| stock.quantity)
            .sum();
        return Ok(portfolio
            .stocks
            .iter()
            .map(|stock| {
                let quantity = stock.quantity.unwrap_or(0.0);
                (stock.ticker.clone(), quantity / total * 100.0)
            })
            .collect());
    }

    Err(ValidationError::MixedHoldings {
        name: portfolio.name.clone(),
    })
}

/// One row of the side-by-side weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDelta {
    pub ticker: Ticker,
    pub weight_a: f64,
    pub weight_b: f64,
    /// `weight_b - weight_a`; positive means B is overweight.
    pub difference: f64,
}

/// Jaccard overlap and unique-asset delta between two portfolios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapSummary {
    /// Shared tickers as a percentage of the union, 0-100.
    pub overlap_score: f64,
    /// Relative change in unique-asset count from A to B, in percent.
    /// `None` when A holds nothing.
    pub diversification_delta: Option<f64>,
}

/// Full comparison between two portfolios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub portfolio_a: String,
    pub portfolio_b: String,
    /// Union-of-tickers rows, sorted by combined weight descending.
    pub rows: Vec<WeightDelta>,
    pub overlap: OverlapSummary,
    /// Normalization problems; the affected side degrades to zero weights.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Comparison {
    pub fn between(a: &Portfolio, b: &Portfolio) -> Self {
        let mut warnings = Vec::new();

        let weights_a = normalize(a).unwrap_or_else(|error| {
            warnings.push(error.to_string());
            WeightMap::new()
        });
        let weights_b = normalize(b).unwrap_or_else(|error| {
            warnings.push(error.to_string());
            WeightMap::new()
        });

        let mut tickers: BTreeSet<Ticker> = weights_a.keys().cloned().collect();
        tickers.extend(weights_b.keys().cloned());

        let mut rows: Vec<WeightDelta> = tickers
            .into_iter()
            .map(|ticker| {
                let weight_a = weights_a.get(&ticker).copied().unwrap_or(0.0);
                let weight_b = weights_b.get(&ticker).copied().unwrap_or(0.0);
                WeightDelta {
                    ticker,
                    weight_a,
                    weight_b,
                    difference: weight_b - weight_a,
                }
            })
            .collect();
        rows.sort_by(|left, right| {
            let combined_left = left.weight_a + left.weight_b;
            let combined_right = right.weight_a + right.weight_b;
            combined_right
                .partial_cmp(&combined_left)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            portfolio_a: a.name.clone(),
            portfolio_b: b.name.clone(),
            rows,
            overlap: overlap(a, b),
            warnings,
        }
    }

    /// Rows ranked by absolute weight difference, largest first.
    pub fn top_differences(&self, limit: usize) -> Vec<WeightDelta> {
        let mut ranked = self.rows.clone();
        ranked.sort_by(|left, right| {
            right
                .difference
                .abs()
                .partial_cmp(&left.difference.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }
}

/// Jaccard similarity of the two ticker sets, plus the unique-asset delta.
pub fn overlap(a: &Portfolio, b: &Portfolio) -> OverlapSummary {
    let tickers_a: BTreeSet<&Ticker> = a.tickers().collect();
    let tickers_b: BTreeSet<&Ticker> = b.tickers().collect();

    let intersection = tickers_a.intersection(&tickers_b).count();
    let union = tickers_a.union(&tickers_b).count();

    let overlap_score = if union > 0 {
        intersection as f64 / union as f64 * 100.0
    } else {
        0.0
    };

    let diversification_delta = if tickers_a.is_empty() {
        None
    } else {
        let size_a = tickers_a.len() as f64;
        let size_b = tickers_b.len() as f64;
        Some((size_b - size_a) / size_a * 100.0)
    };

    OverlapSummary {
        overlap_score,
        diversification_delta,
    }
}
