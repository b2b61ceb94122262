//! Behavior-driven tests for portfolio normalization and comparison
//!
//! These tests verify the user-visible comparison table: normalized weights,
//! overlap scoring, and how mixed portfolios degrade.

use stormglass_core::{compare, fixtures, Comparison, Portfolio, PortfolioStock, Ticker};

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("ticker")
}

fn weighted(name: &str, entries: &[(&str, f64)]) -> Portfolio {
    let stocks = entries
        .iter()
        .map(|(raw, weight)| PortfolioStock::from_weight(ticker(raw), *weight, None).expect("stock"))
        .collect();
    Portfolio::with_stocks(name, stocks)
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn quantity_portfolios_normalize_to_percentages_summing_to_one_hundred() {
    // Given: The quantity-based sample portfolio (AAPL 10, MSFT 5, TSLA 8, JPM 15)
    let samples = fixtures::sample_portfolios();
    let manual = &samples[0];

    // When: It is normalized
    let weights = compare::normalize(manual).expect("normalize");

    // Then: Weights are value-proportional and total 100
    let total: f64 = weights.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!((weights[&ticker("JPM")] - 15.0 / 38.0 * 100.0).abs() < 1e-9);
}

#[test]
fn weight_portfolios_pass_through_unchanged() {
    let samples = fixtures::sample_portfolios();
    let aggressive = &samples[2];

    let weights = compare::normalize(aggressive).expect("normalize");
    assert_eq!(weights[&ticker("TSLA")], 30.0);
    assert_eq!(weights[&ticker("PLTR")], 10.0);
}

#[test]
fn mixing_quantity_and_weight_is_a_user_input_error() {
    let stocks = vec![
        PortfolioStock::from_quantity(ticker("AAPL"), 10.0, None).expect("stock"),
        PortfolioStock::from_weight(ticker("MSFT"), 15.0, None).expect("stock"),
    ];
    let mixed = Portfolio::with_stocks("Mixed", stocks);

    assert!(compare::normalize(&mixed).is_err());
}

// =============================================================================
// Comparison and Overlap
// =============================================================================

#[test]
fn comparison_rows_cover_every_ticker_from_both_sides() {
    let samples = fixtures::sample_portfolios();
    let comparison = Comparison::between(&samples[1], &samples[2]);

    let mut union: Vec<&str> = samples[1]
        .tickers()
        .chain(samples[2].tickers())
        .map(Ticker::as_str)
        .collect();
    union.sort_unstable();
    union.dedup();

    assert_eq!(comparison.rows.len(), union.len());
    assert!(comparison.warnings.is_empty());
}

#[test]
fn one_shared_ticker_out_of_three_scores_a_third_overlap() {
    let a = weighted("A", &[("AAA", 50.0), ("BBB", 50.0)]);
    let b = weighted("B", &[("BBB", 50.0), ("CCC", 50.0)]);

    let overlap = compare::overlap(&a, &b);
    assert!((overlap.overlap_score - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn moving_to_a_larger_universe_shows_a_positive_diversification_delta() {
    let a = weighted("A", &[("AAA", 100.0)]);
    let b = weighted("B", &[("AAA", 50.0), ("BBB", 30.0), ("CCC", 20.0)]);

    let overlap = compare::overlap(&a, &b);
    assert_eq!(overlap.diversification_delta, Some(200.0));
}

#[test]
fn an_empty_baseline_has_no_defined_diversification_delta() {
    let a = Portfolio::new("Empty");
    let b = weighted("B", &[("AAPL", 100.0)]);

    let overlap = compare::overlap(&a, &b);
    assert_eq!(overlap.diversification_delta, None);
    assert_eq!(overlap.overlap_score, 0.0);
}

#[test]
fn top_differences_surface_the_largest_absolute_deltas_first() {
    let a = weighted("A", &[("AAPL", 60.0), ("MSFT", 40.0)]);
    let b = weighted("B", &[("AAPL", 58.0), ("TSLA", 42.0)]);

    let comparison = Comparison::between(&a, &b);
    let top = comparison.top_differences(2);

    // TSLA (+42) and MSFT (-40) dominate the AAPL wiggle (-2).
    assert_eq!(top[0].ticker, ticker("TSLA"));
    assert_eq!(top[1].ticker, ticker("MSFT"));
}

#[test]
fn a_mixed_side_degrades_to_zero_weights_with_a_warning() {
    let stocks = vec![
        PortfolioStock::from_quantity(ticker("AAPL"), 10.0, None).expect("stock"),
        PortfolioStock::from_weight(ticker("MSFT"), 15.0, None).expect("stock"),
    ];
    let mixed = Portfolio::with_stocks("Mixed", stocks);
    let clean = weighted("Clean", &[("JNJ", 100.0)]);

    let comparison = Comparison::between(&mixed, &clean);
    assert_eq!(comparison.warnings.len(), 1);
    assert_eq!(comparison.rows.len(), 1);
    assert_eq!(comparison.rows[0].ticker, ticker("JNJ"));
}
