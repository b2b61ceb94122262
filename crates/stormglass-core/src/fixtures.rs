//! Built-in catalog data.
//!
//! Everything the dashboard shows before any user input comes from here: the
//! seed asset universe, the historical event templates, the sample
//! portfolios, and the risk-journey display data. Collecting the catalogs in
//! one module keeps the numbers from drifting between views.

use crate::{
    Achievement, Asset, HistoricalEvent, PeerMetric, Portfolio, PortfolioStock, Sector,
    StabilityScore, Ticker,
};

/// Current portfolio metric snapshot used when evaluating alerts.
pub mod current_metrics {
    pub const PORTFOLIO_BETA: f64 = 1.05;
    pub const VALUE_AT_RISK: f64 = 25_000.0;
    pub const MAX_CORRELATION: f64 = 0.78;
}

/// The ten-asset universe the cauldron starts from.
pub fn seed_assets() -> Vec<Asset> {
    let rows: [(&str, &str, &str, f64, Sector, f64); 10] = [
        ("aapl", "AAPL", "Apple Inc.", 15.0, Sector::Technology, 65.0),
        ("msft", "MSFT", "Microsoft Corp.", 12.0, Sector::Technology, 60.0),
        (
            "amzn",
            "AMZN",
            "Amazon.com Inc.",
            10.0,
            Sector::ConsumerCyclical,
            75.0,
        ),
        (
            "googl",
            "GOOGL",
            "Alphabet Inc.",
            8.0,
            Sector::CommunicationServices,
            70.0,
        ),
        (
            "brk-b",
            "BRK.B",
            "Berkshire Hathaway",
            7.0,
            Sector::FinancialServices,
            45.0,
        ),
        ("jnj", "JNJ", "Johnson & Johnson", 6.0, Sector::Healthcare, 30.0),
        (
            "pg",
            "PG",
            "Procter & Gamble",
            5.0,
            Sector::ConsumerDefensive,
            25.0,
        ),
        ("v", "V", "Visa Inc.", 5.0, Sector::FinancialServices, 50.0),
        ("unh", "UNH", "UnitedHealth Group", 4.0, Sector::Healthcare, 40.0),
        ("hd", "HD", "Home Depot Inc.", 4.0, Sector::ConsumerCyclical, 55.0),
    ];

    rows.into_iter()
        .map(|(id, symbol, name, weight, sector, risk)| {
            let ticker = Ticker::parse(symbol).expect("catalog ticker is valid");
            Asset::new(id, ticker, name, weight, sector, risk).expect("catalog asset is valid")
        })
        .collect()
}

/// Historical crisis templates available to the stress simulator.
pub fn historical_events() -> Vec<HistoricalEvent> {
    vec![
        HistoricalEvent::template(
            "2008-crisis",
            "2008 Financial Crisis",
            -56.8,
            517,
            "Global financial crisis triggered by the collapse of the housing market and banking system.",
        ),
        HistoricalEvent::template(
            "covid-crash",
            "COVID-19 Crash",
            -33.9,
            33,
            "Rapid market collapse due to the global pandemic and economic shutdown.",
        ),
        HistoricalEvent::template(
            "dotcom-bubble",
            "Dotcom Bubble",
            -49.1,
            929,
            "Tech stock implosion after the speculative internet company boom of the late 1990s.",
        ),
        HistoricalEvent::template(
            "black-monday",
            "Black Monday (1987)",
            -22.6,
            101,
            "Single-day market crash driven by program trading and market psychology.",
        ),
        HistoricalEvent::template(
            "2018-correction",
            "2018 Market Correction",
            -19.8,
            95,
            "Late 2018 selloff caused by interest rate hikes and trade tensions.",
        ),
    ]
}

/// Look up an event template by id.
pub fn find_event(id: &str) -> Option<HistoricalEvent> {
    historical_events().into_iter().find(|event| event.id == id)
}

/// Demo portfolios offered by the comparator when the user has saved none.
pub fn sample_portfolios() -> Vec<Portfolio> {
    vec![
        Portfolio::with_stocks(
            "My Manual Portfolio",
            quantity_stocks(&[
                ("AAPL", 10.0, Sector::Technology),
                ("MSFT", 5.0, Sector::Technology),
                ("TSLA", 8.0, Sector::ConsumerCyclical),
                ("JPM", 15.0, Sector::FinancialServices),
            ]),
        ),
        Portfolio::with_stocks(
            "Imported CSV Portfolio",
            weight_stocks(&[
                ("AAPL", 25.0, Sector::Technology),
                ("MSFT", 15.0, Sector::Technology),
                ("AMZN", 10.0, Sector::ConsumerCyclical),
                ("GOOGL", 5.0, Sector::CommunicationServices),
                ("JNJ", 10.0, Sector::Healthcare),
            ]),
        ),
        Portfolio::with_stocks(
            "Aggressive Growth",
            weight_stocks(&[
                ("TSLA", 30.0, Sector::ConsumerCyclical),
                ("NVDA", 25.0, Sector::Technology),
                ("AMD", 20.0, Sector::Technology),
                ("SQ", 15.0, Sector::Technology),
                ("PLTR", 10.0, Sector::Technology),
            ]),
        ),
    ]
}

/// Risk-journey achievement badges.
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "diversification-master".to_owned(),
            title: "Diversification Master".to_owned(),
            description: "Maintained a portfolio with assets across 8+ sectors".to_owned(),
            earned: true,
            earned_on: Some("2023-11-15".to_owned()),
            progress: None,
        },
        Achievement {
            id: "crisis-survivor".to_owned(),
            title: "Crisis Survivor".to_owned(),
            description: "Portfolio recovered from a 20%+ drawdown".to_owned(),
            earned: true,
            earned_on: Some("2023-08-22".to_owned()),
            progress: None,
        },
        Achievement {
            id: "steady-growth".to_owned(),
            title: "Steady Growth".to_owned(),
            description: "Maintained positive returns for 12 consecutive months".to_owned(),
            earned: false,
            earned_on: None,
            progress: Some(75),
        },
        Achievement {
            id: "risk-optimizer".to_owned(),
            title: "Risk Optimizer".to_owned(),
            description: "Achieved 15%+ returns with below-market volatility".to_owned(),
            earned: true,
            earned_on: Some("2024-01-10".to_owned()),
            progress: None,
        },
        Achievement {
            id: "market-timer".to_owned(),
            title: "Market Timer".to_owned(),
            description: "Successfully avoided 3 major market corrections".to_owned(),
            earned: false,
            earned_on: None,
            progress: Some(33),
        },
    ]
}

/// Portfolio stability score with a seven-month history.
pub fn stability_score() -> StabilityScore {
    StabilityScore {
        current: 78,
        target: 85,
        history: vec![65, 68, 72, 70, 75, 73, 78],
    }
}

/// Percentile standings against the peer cohort.
pub fn peer_comparison() -> Vec<PeerMetric> {
    [
        ("Risk-Adjusted Return", 82, 65),
        ("Drawdown Protection", 75, 60),
        ("Diversification Score", 90, 72),
        ("Volatility Management", 68, 58),
    ]
    .into_iter()
    .map(|(metric, percentile, average)| PeerMetric {
        metric: metric.to_owned(),
        percentile,
        average,
    })
    .collect()
}

fn quantity_stocks(rows: &[(&str, f64, Sector)]) -> Vec<PortfolioStock> {
    rows.iter()
        .map(|(symbol, quantity, sector)| {
            let ticker = Ticker::parse(symbol).expect("catalog ticker is valid");
            PortfolioStock::from_quantity(ticker, *quantity, Some(*sector))
                .expect("catalog holding is valid")
        })
        .collect()
}

fn weight_stocks(rows: &[(&str, f64, Sector)]) -> Vec<PortfolioStock> {
    rows.iter()
        .map(|(symbol, weight, sector)| {
            let ticker = Ticker::parse(symbol).expect("catalog ticker is valid");
            PortfolioStock::from_weight(ticker, *weight, Some(*sector))
                .expect("catalog holding is valid")
        })
        .collect()
}
