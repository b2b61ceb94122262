use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical sector label for a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Consumer Cyclical")]
    ConsumerCyclical,
    #[serde(rename = "Communication Services")]
    CommunicationServices,
    Industrials,
    #[serde(rename = "Consumer Defensive")]
    ConsumerDefensive,
    Energy,
    #[serde(rename = "Basic Materials")]
    BasicMaterials,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Utilities,
    Other,
}

impl Sector {
    pub const ALL: [Sector; 12] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::FinancialServices,
        Sector::ConsumerCyclical,
        Sector::CommunicationServices,
        Sector::Industrials,
        Sector::ConsumerDefensive,
        Sector::Energy,
        Sector::BasicMaterials,
        Sector::RealEstate,
        Sector::Utilities,
        Sector::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::FinancialServices => "Financial Services",
            Sector::ConsumerCyclical => "Consumer Cyclical",
            Sector::CommunicationServices => "Communication Services",
            Sector::Industrials => "Industrials",
            Sector::ConsumerDefensive => "Consumer Defensive",
            Sector::Energy => "Energy",
            Sector::BasicMaterials => "Basic Materials",
            Sector::RealEstate => "Real Estate",
            Sector::Utilities => "Utilities",
            Sector::Other => "Other",
        }
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = std::convert::Infallible;

    /// Unknown labels fall back to `Other`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let found = Sector::ALL
            .iter()
            .copied()
            .find(|sector| sector.label().eq_ignore_ascii_case(trimmed));
        Ok(found.unwrap_or(Sector::Other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_label_round_trips() {
        let sector: Sector = "consumer cyclical".parse().expect("infallible");
        assert_eq!(sector, Sector::ConsumerCyclical);
        assert_eq!(sector.label(), "Consumer Cyclical");
    }

    #[test]
    fn unknown_label_falls_back_to_other() {
        let sector: Sector = "Quantum Widgets".parse().expect("infallible");
        assert_eq!(sector, Sector::Other);
    }
}
