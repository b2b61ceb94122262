//! Domain models shared across the stormglass crates.

mod alert;
mod asset;
mod event;
mod journey;
mod portfolio;
mod sector;
mod ticker;
mod timestamp;

pub use alert::{AlertCondition, AlertMetric, AlertStatus, RiskAlert};
pub use asset::Asset;
pub use event::HistoricalEvent;
pub use journey::{Achievement, PeerMetric, StabilityScore};
pub use portfolio::{Portfolio, PortfolioStock};
pub use sector::Sector;
pub use ticker::Ticker;
pub use timestamp::UtcDateTime;
