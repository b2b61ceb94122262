use serde::{Deserialize, Serialize};

/// Immutable template describing a historical market event.
///
/// `max_drawdown_pct` is the peak-to-trough decline and is therefore
/// negative. Templates come from the fixed catalog in
/// [`crate::fixtures::historical_events`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub id: String,
    pub name: String,
    pub max_drawdown_pct: f64,
    pub duration_days: u32,
    pub description: String,
}

impl HistoricalEvent {
    pub(crate) fn template(
        id: &str,
        name: &str,
        max_drawdown_pct: f64,
        duration_days: u32,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            max_drawdown_pct,
            duration_days,
            description: description.to_owned(),
        }
    }
}
