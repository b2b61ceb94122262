use serde::{Deserialize, Serialize};

/// A gamified milestone shown on the risk journey page. Pure display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub earned: bool,
    /// Calendar date the badge was earned, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_on: Option<String>,
    /// Percent complete for unearned badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

/// Portfolio stability score with a monthly history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityScore {
    pub current: u8,
    pub target: u8,
    pub history: Vec<u8>,
}

/// One row of the peer-comparison panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerMetric {
    pub metric: String,
    pub percentile: u8,
    pub average: u8,
}
