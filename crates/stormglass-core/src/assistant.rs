//! Scripted assistant demo.
//!
//! A keyword matcher over free-text queries with three canned replies. There
//! is no language model behind it; the figures are fixed demo values.

use serde::{Deserialize, Serialize};

use crate::Pacing;

/// Queries the assistant demo advertises.
pub const SAMPLE_QUERIES: [&str; 3] = [
    "Show my beta vs. NASDAQ",
    "Run a COVID stress test",
    "Alert me if risk temp exceeds 80°",
];

/// The three scripted reply topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Beta,
    CovidStress,
    RiskAlert,
}

/// A rendered assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub topic: Topic,
    pub title: String,
    pub lines: Vec<String>,
}

/// Match a query against the known topics.
///
/// Matching is case-insensitive substring search, checked in the order the
/// sample queries are listed. Unmatched queries return `None`.
pub fn match_topic(query: &str) -> Option<Topic> {
    let query = query.to_lowercase();
    if query.contains("beta") || query.contains("nasdaq") {
        Some(Topic::Beta)
    } else if query.contains("covid") || query.contains("stress") {
        Some(Topic::CovidStress)
    } else if query.contains("alert") || query.contains("risk temp") {
        Some(Topic::RiskAlert)
    } else {
        None
    }
}

/// Answer a query, pausing for the scripted "thinking" delay in demo mode.
pub fn respond(query: &str, pacing: Pacing) -> Option<Reply> {
    let topic = match_topic(query)?;
    pacing.pause(Pacing::PROCESSING);
    Some(reply_for(topic))
}

fn reply_for(topic: Topic) -> Reply {
    match topic {
        Topic::Beta => Reply {
            topic,
            title: "Beta vs. NASDAQ".to_owned(),
            lines: vec![
                "Your Portfolio Beta: 0.87".to_owned(),
                "Your portfolio is less volatile than the NASDAQ, with 13% lower price movements on average.".to_owned(),
            ],
        },
        Topic::CovidStress => Reply {
            topic,
            title: "COVID Stress Test Results".to_owned(),
            lines: vec![
                "Projected Drawdown: -24.3%".to_owned(),
                "Recovery Time: 4.2 months".to_owned(),
                "Your portfolio would perform 18% better than the market average during a COVID-like scenario.".to_owned(),
            ],
        },
        Topic::RiskAlert => Reply {
            topic,
            title: "Risk Temperature Alert Set".to_owned(),
            lines: vec![
                "Alert will trigger when Risk Temperature exceeds 80°".to_owned(),
                "You'll receive notifications via email and dashboard when this threshold is reached.".to_owned(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_queries_each_hit_their_topic() {
        assert_eq!(match_topic(SAMPLE_QUERIES[0]), Some(Topic::Beta));
        assert_eq!(match_topic(SAMPLE_QUERIES[1]), Some(Topic::CovidStress));
        assert_eq!(match_topic(SAMPLE_QUERIES[2]), Some(Topic::RiskAlert));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(match_topic("what is my BETA?"), Some(Topic::Beta));
    }

    #[test]
    fn unknown_queries_get_no_reply() {
        assert_eq!(match_topic("what's for lunch"), None);
        assert!(respond("what's for lunch", Pacing::none()).is_none());
    }

    #[test]
    fn covid_reply_carries_the_demo_figures() {
        let reply = respond("run a covid stress test", Pacing::none()).expect("reply");
        assert_eq!(reply.title, "COVID Stress Test Results");
        assert!(reply.lines[0].contains("-24.3%"));
        assert!(reply.lines[1].contains("4.2 months"));
    }
}
