//! Core contracts for stormglass.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The risk cauldron calculators (temperature, volatility, diversification)
//! - The synthetic stress-test simulator
//! - Portfolio normalization, comparison, and CSV import/export
//! - Dashboard scan heuristics and the scripted assistant
//! - The built-in fixture catalogs

pub mod assistant;
pub mod cauldron;
pub mod compare;
pub mod csv;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod pacing;
pub mod simulate;

pub use cauldron::{Cauldron, CauldronReading, TemperatureBand};
pub use compare::{Comparison, OverlapSummary, WeightDelta, WeightMap};
pub use csv::{CsvError, ImportReport, SAMPLE_CSV};
pub use dashboard::{
    CorrelationGrid, CrisisExposure, HealthGrade, RiskWarningLevel, ScanReport, ASSET_CLASSES,
};
pub use domain::{
    Achievement, AlertCondition, AlertMetric, AlertStatus, Asset, HistoricalEvent, PeerMetric,
    Portfolio, PortfolioStock, RiskAlert, Sector, StabilityScore, Ticker, UtcDateTime,
};
pub use error::ValidationError;
pub use pacing::Pacing;
pub use simulate::{StressRun, DATA_POINTS};
