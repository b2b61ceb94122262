use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{UtcDateTime, ValidationError};

/// Metric an alert watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertMetric {
    #[serde(rename = "Portfolio Beta")]
    PortfolioBeta,
    #[serde(rename = "Value at Risk (VaR)")]
    ValueAtRisk,
    #[serde(rename = "Max Correlation")]
    MaxCorrelation,
}

impl AlertMetric {
    pub const ALL: [AlertMetric; 3] = [
        AlertMetric::PortfolioBeta,
        AlertMetric::ValueAtRisk,
        AlertMetric::MaxCorrelation,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AlertMetric::PortfolioBeta => "Portfolio Beta",
            AlertMetric::ValueAtRisk => "Value at Risk (VaR)",
            AlertMetric::MaxCorrelation => "Max Correlation",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            AlertMetric::PortfolioBeta => {
                "Measures portfolio volatility relative to the market (e.g., S&P 500). \
                 Beta > 1 is more volatile, Beta < 1 is less volatile."
            }
            AlertMetric::ValueAtRisk => {
                "Estimates the potential loss in portfolio value over a specific period \
                 for a given confidence level (e.g., 95% VaR of $10k means 5% chance of \
                 losing $10k or more)."
            }
            AlertMetric::MaxCorrelation => {
                "Indicates the highest correlation between any two assets in the \
                 portfolio. High correlation reduces diversification benefits."
            }
        }
    }

    fn validate_threshold(self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "threshold" });
        }
        let expected = match self {
            AlertMetric::PortfolioBeta => {
                if (0.0..=3.0).contains(&value) {
                    return Ok(());
                }
                "a beta between 0 and 3"
            }
            AlertMetric::MaxCorrelation => {
                if (-1.0..=1.0).contains(&value) {
                    return Ok(());
                }
                "a correlation between -1 and 1"
            }
            AlertMetric::ValueAtRisk => {
                if value >= 0.0 {
                    return Ok(());
                }
                "a non-negative dollar amount"
            }
        };
        Err(ValidationError::ThresholdOutOfRange {
            metric: self,
            value,
            expected,
        })
    }
}

impl Display for AlertMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of the threshold triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCondition {
    Above,
    Below,
}

/// Display status of an alert. Nothing in the system transitions this; there
/// is no monitoring loop behind the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Triggered,
}

/// A user-configured risk alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub id: Uuid,
    pub metric: AlertMetric,
    pub threshold: f64,
    pub condition: AlertCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_target: Option<String>,
    pub status: AlertStatus,
    pub created_at: UtcDateTime,
}

impl RiskAlert {
    /// Build a new active alert, validating the threshold against the metric's
    /// plausible range.
    pub fn new(
        metric: AlertMetric,
        threshold: f64,
        condition: AlertCondition,
        notification_target: Option<String>,
    ) -> Result<Self, ValidationError> {
        metric.validate_threshold(threshold)?;

        let notification_target = match notification_target {
            Some(target) => {
                let trimmed = target.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::BlankNotificationTarget);
                }
                Some(trimmed.to_owned())
            }
            None => None,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            metric,
            threshold,
            condition,
            notification_target,
            status: AlertStatus::Active,
            created_at: UtcDateTime::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_threshold_outside_range_is_rejected() {
        let error = RiskAlert::new(AlertMetric::PortfolioBeta, 5.0, AlertCondition::Above, None)
            .expect_err("beta of 5 must fail");
        assert!(matches!(
            error,
            ValidationError::ThresholdOutOfRange {
                metric: AlertMetric::PortfolioBeta,
                ..
            }
        ));
    }

    #[test]
    fn negative_var_threshold_is_rejected() {
        let error = RiskAlert::new(AlertMetric::ValueAtRisk, -1.0, AlertCondition::Above, None)
            .expect_err("negative VaR must fail");
        assert!(matches!(
            error,
            ValidationError::ThresholdOutOfRange { .. }
        ));
    }

    #[test]
    fn new_alert_starts_active() {
        let alert = RiskAlert::new(
            AlertMetric::MaxCorrelation,
            0.8,
            AlertCondition::Above,
            Some("ops@example.com".to_owned()),
        )
        .expect("alert");
        assert_eq!(alert.status, AlertStatus::Active);
        assert_eq!(alert.notification_target.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn metric_serializes_with_display_label() {
        let json = serde_json::to_string(&AlertMetric::ValueAtRisk).expect("serialize");
        assert_eq!(json, "\"Value at Risk (VaR)\"");
    }
}
