//! Synthetic stress-test series generation.
//!
//! Given a historical event template and a severity dial, produce two parallel
//! percentage-deviation series (market proxy vs. portfolio) shaped like a
//! drawdown that deepens mid-event. Randomness comes from a caller-supplied
//! [`fastrand::Rng`], so a fixed seed reproduces the run exactly.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{HistoricalEvent, ValidationError};

/// Number of samples in every generated series.
pub const DATA_POINTS: usize = 100;

/// Severity midpoint; severity / 50 gives a 0-2 scaling factor.
const SEVERITY_PIVOT: f64 = 50.0;

/// Above this severity the portfolio loses its defensive edge and
/// underperforms the market.
const UNDERPERFORM_THRESHOLD: u8 = 75;

/// The two series produced by one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressRun {
    pub event_id: String,
    pub severity: u8,
    /// Market percentage deviation per sample, length [`DATA_POINTS`].
    pub market: Vec<f64>,
    /// Portfolio percentage deviation per sample, length [`DATA_POINTS`].
    pub portfolio: Vec<f64>,
}

impl StressRun {
    /// Generate both series for `event` at the given severity (1-100).
    pub fn simulate(
        event: &HistoricalEvent,
        severity: u8,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, ValidationError> {
        if severity == 0 || severity > 100 {
            return Err(ValidationError::SeverityOutOfRange { value: severity });
        }

        let severity_factor = f64::from(severity) / SEVERITY_PIVOT;
        // Defensive edge shrinks linearly as severity rises: up to 40% at 0.
        let portfolio_advantage = (100.0 - f64::from(severity)) / 100.0 * 0.4;

        let mut market = Vec::with_capacity(DATA_POINTS);
        let mut portfolio = Vec::with_capacity(DATA_POINTS);

        for i in 0..DATA_POINTS {
            let progress = i as f64 / DATA_POINTS as f64;

            // Sine hump scaled by progress gives a drawdown that is deepest
            // past the midpoint of the event.
            let market_value =
                (progress * PI).sin() * event.max_drawdown_pct * severity_factor * progress;

            // +/-10% uniform noise on the charted market line only.
            market.push(market_value * (1.0 + (rng.f64() * 0.2 - 0.1)));

            let portfolio_value = if severity > UNDERPERFORM_THRESHOLD {
                market_value * (1.0 + rng.f64() * 0.3)
            } else {
                market_value * (1.0 - portfolio_advantage + (rng.f64() * 0.3 - 0.15))
            };
            portfolio.push(portfolio_value);
        }

        Ok(Self {
            event_id: event.id.clone(),
            severity,
            market,
            portfolio,
        })
    }

    /// Deepest market deviation in the run.
    pub fn market_trough(&self) -> f64 {
        self.market.iter().copied().fold(0.0, f64::min)
    }

    /// Deepest portfolio deviation in the run.
    pub fn portfolio_trough(&self) -> f64 {
        self.portfolio.iter().copied().fold(0.0, f64::min)
    }
}
