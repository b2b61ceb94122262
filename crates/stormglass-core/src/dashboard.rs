//! Dashboard overview: health grade, correlation storm indicator, crisis
//! exposure, and the quick environment scan.
//!
//! These are presentation heuristics, not analytics. The grade and exposure
//! level are coarse classifications of a cauldron reading; the scan verdict
//! and the heatmap cells draw on the caller's random source.

use serde::{Deserialize, Serialize};

use crate::{CauldronReading, Pacing};

/// Letter grade for overall portfolio health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthGrade {
    A,
    B,
    C,
    D,
    F,
}

impl HealthGrade {
    /// Grade a risk temperature. The A/B boundaries follow the temperature
    /// bands (cool below 30, elevated below 60); the critical range splits
    /// into C, D, and F at 75 and 90.
    pub const fn from_temperature(temperature: u8) -> Self {
        match temperature {
            0..=29 => HealthGrade::A,
            30..=59 => HealthGrade::B,
            60..=74 => HealthGrade::C,
            75..=89 => HealthGrade::D,
            _ => HealthGrade::F,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            HealthGrade::A => "Excellent health with minimal risk",
            HealthGrade::B => "Good health with manageable risk",
            HealthGrade::C => "Average health with moderate risk",
            HealthGrade::D => "Poor health with significant risk",
            HealthGrade::F => "Critical health with extreme risk",
        }
    }

    pub const fn letter(&self) -> &'static str {
        match self {
            HealthGrade::A => "A",
            HealthGrade::B => "B",
            HealthGrade::C => "C",
            HealthGrade::D => "D",
            HealthGrade::F => "F",
        }
    }
}

/// Crisis-exposure severity, named after the historical analog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrisisExposure {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Dotcom-level")]
    DotcomLevel,
    #[serde(rename = "Covid-level")]
    CovidLevel,
    #[serde(rename = "08-level")]
    FinancialCrisisLevel,
}

impl CrisisExposure {
    /// Classify exposure from the risk temperature and the correlation storm
    /// state. A storm on top of an elevated temperature reads as 2008-grade;
    /// either alone reads as 2020-grade; a merely warm pot as dotcom-grade.
    pub const fn classify(temperature: u8, storm: bool) -> Self {
        if storm && temperature >= 50 {
            CrisisExposure::FinancialCrisisLevel
        } else if storm || temperature >= 50 {
            CrisisExposure::CovidLevel
        } else if temperature >= 30 {
            CrisisExposure::DotcomLevel
        } else {
            CrisisExposure::None
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CrisisExposure::None => "None",
            CrisisExposure::DotcomLevel => "Dotcom-level",
            CrisisExposure::CovidLevel => "Covid-level",
            CrisisExposure::FinancialCrisisLevel => "08-level",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            CrisisExposure::None => "No significant crisis exposure detected",
            CrisisExposure::DotcomLevel => "Moderate exposure similar to 2000 tech bubble",
            CrisisExposure::CovidLevel => "Significant exposure similar to 2020 pandemic",
            CrisisExposure::FinancialCrisisLevel => {
                "Severe exposure similar to 2008 financial crisis"
            }
        }
    }
}

/// Verdict of a quick environment scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskWarningLevel {
    Low,
    Moderate,
    Elevated,
    High,
    Severe,
}

impl RiskWarningLevel {
    pub const ALL: [RiskWarningLevel; 5] = [
        RiskWarningLevel::Low,
        RiskWarningLevel::Moderate,
        RiskWarningLevel::Elevated,
        RiskWarningLevel::High,
        RiskWarningLevel::Severe,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            RiskWarningLevel::Low => "Low",
            RiskWarningLevel::Moderate => "Moderate",
            RiskWarningLevel::Elevated => "Elevated",
            RiskWarningLevel::High => "High",
            RiskWarningLevel::Severe => "Severe",
        }
    }
}

/// Asset classes along both axes of the correlation heatmap.
pub const ASSET_CLASSES: [&str; 5] = ["Stocks", "Bonds", "Gold", "Real Estate", "Crypto"];

/// Storm warning threshold on the headline correlation value.
pub const STORM_THRESHOLD: f64 = 0.75;

/// A generated 5x5 cross-asset correlation heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationGrid {
    pub correlation_value: f64,
    /// Row-major cells; the diagonal is fixed at 1.0.
    pub cells: Vec<f64>,
}

impl CorrelationGrid {
    /// Generate cells for the given headline correlation. In storm mode every
    /// off-diagonal cell clusters high (0.65-0.95); otherwise cells spread
    /// across -0.3 to 0.6.
    pub fn generate(correlation_value: f64, rng: &mut fastrand::Rng) -> Self {
        let n = ASSET_CLASSES.len();
        let storm = correlation_value > STORM_THRESHOLD;

        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                if row == col {
                    cells.push(1.0);
                } else if storm {
                    cells.push(0.65 + rng.f64() * 0.3);
                } else {
                    cells.push(-0.3 + rng.f64() * 0.9);
                }
            }
        }

        Self {
            correlation_value,
            cells,
        }
    }

    pub fn is_storm(&self) -> bool {
        self.correlation_value > STORM_THRESHOLD
    }
}

/// Everything the dashboard overview shows after one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub risk_level: RiskWarningLevel,
    pub health: HealthGrade,
    pub crisis_exposure: CrisisExposure,
    pub correlation: CorrelationGrid,
}

impl ScanReport {
    /// Run a quick scan over the given reading and headline correlation. The
    /// warm-up pause is cosmetic and controlled by `pacing`; the verdict and
    /// heatmap cells come from `rng`, while the grade and exposure are
    /// classified from the reading and storm state.
    pub fn run(
        reading: &CauldronReading,
        correlation_value: f64,
        pacing: Pacing,
        rng: &mut fastrand::Rng,
    ) -> Self {
        pacing.pause(Pacing::SCAN);

        let risk_level = RiskWarningLevel::ALL[rng.usize(..RiskWarningLevel::ALL.len())];
        let correlation = CorrelationGrid::generate(correlation_value, rng);
        let health = HealthGrade::from_temperature(reading.risk_temperature);
        let crisis_exposure =
            CrisisExposure::classify(reading.risk_temperature, correlation.is_storm());

        Self {
            risk_level,
            health,
            crisis_exposure,
            correlation,
        }
    }
}
