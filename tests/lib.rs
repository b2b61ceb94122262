// Shared imports for the stormglass behavior tests.
pub use stormglass_core::{
    compare, csv, fixtures, Asset, Cauldron, CauldronReading, Comparison, Pacing, Portfolio,
    PortfolioStock, RiskAlert, Sector, StressRun, TemperatureBand, Ticker, DATA_POINTS,
};
pub use stormglass_store::{config_at, Dataset, Store};
