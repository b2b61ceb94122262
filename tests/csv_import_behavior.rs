//! Behavior-driven tests for CSV import and export
//!
//! These tests exercise the tolerant import path end to end: header
//! detection, row skipping, and the round trip back to CSV.

use stormglass_core::{csv, CsvError, Sector};

// =============================================================================
// Import: Happy Path
// =============================================================================

#[test]
fn the_bundled_sample_file_imports_every_row() {
    let report = csv::import(csv::SAMPLE_CSV).expect("sample parses");

    assert_eq!(report.stocks.len(), 5);
    assert!(report.warnings.is_empty());

    // AAPL is quantity-based, MSFT weight-based; both survive side by side.
    assert_eq!(report.stocks[0].quantity, Some(10.0));
    assert_eq!(report.stocks[0].weight, None);
    assert_eq!(report.stocks[1].quantity, None);
    assert_eq!(report.stocks[1].weight, Some(15.0));
}

#[test]
fn tickers_are_uppercased_and_sectors_canonicalized() {
    let report =
        csv::import("ticker,weight,sector\naapl,25,technology\nmsft,15,Deep Sea Mining\n")
            .expect("parses");

    assert_eq!(report.stocks[0].ticker.as_str(), "AAPL");
    assert_eq!(report.stocks[0].sector, Some(Sector::Technology));
    assert_eq!(report.stocks[1].sector, Some(Sector::Other));
}

#[test]
fn columns_may_appear_in_any_order() {
    let report = csv::import("sector,weight,ticker\nHealthcare,10,JNJ\n").expect("parses");
    assert_eq!(report.stocks[0].ticker.as_str(), "JNJ");
    assert_eq!(report.stocks[0].weight, Some(10.0));
}

// =============================================================================
// Import: Structural Errors
// =============================================================================

#[test]
fn a_file_without_a_ticker_column_is_rejected_outright() {
    assert!(matches!(
        csv::import("symbol,weight\nAAPL,25\n"),
        Err(CsvError::MissingTickerColumn)
    ));
}

#[test]
fn a_file_with_neither_quantity_nor_weight_is_rejected() {
    assert!(matches!(
        csv::import("ticker,sector\nAAPL,Technology\n"),
        Err(CsvError::MissingHoldingColumn)
    ));
}

#[test]
fn a_header_only_file_is_rejected() {
    assert!(matches!(
        csv::import("ticker,quantity,weight,sector\n"),
        Err(CsvError::NoDataRows)
    ));
}

// =============================================================================
// Import: Tolerant Row Skipping
// =============================================================================

#[test]
fn bad_rows_are_skipped_without_discarding_the_good_ones() {
    let input = "ticker,quantity,weight\nAAPL,10,\n,,\nMSFT,-5,\nJNJ,,40\n";
    let report = csv::import(input).expect("good rows survive");

    assert_eq!(report.stocks.len(), 2);
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(report.stocks[0].ticker.as_str(), "AAPL");
    assert_eq!(report.stocks[1].ticker.as_str(), "JNJ");
}

#[test]
fn a_file_where_every_row_is_bad_is_an_error() {
    assert!(matches!(
        csv::import("ticker,weight\n,\n,\n"),
        Err(CsvError::NoValidRows)
    ));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn exported_csv_reimports_to_the_same_holdings() {
    let report = csv::import(csv::SAMPLE_CSV).expect("sample parses");
    let portfolio = report.into_portfolio("Sample");

    let rendered = csv::export(&portfolio).expect("export");
    let again = csv::import(&rendered).expect("re-import");

    assert_eq!(again.stocks, portfolio.stocks);
    assert!(again.warnings.is_empty());
}
