//! Weighted risk aggregation for the cauldron working set.
//!
//! The cauldron is the dashboard's mixing bowl: the user moves assets from a
//! bench into the pot and the three headline metrics are recomputed from
//! scratch on every change. Inputs are small (tens of assets), so there is no
//! incremental update path.

use serde::{Deserialize, Serialize};

use crate::{Asset, Sector};

/// Qualitative band for a 0-100 temperature-style metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Cool,
    Elevated,
    Critical,
}

impl TemperatureBand {
    pub const fn of(value: u8) -> Self {
        if value < 30 {
            TemperatureBand::Cool
        } else if value < 60 {
            TemperatureBand::Elevated
        } else {
            TemperatureBand::Critical
        }
    }
}

/// Headline metrics derived from the selected asset set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauldronReading {
    /// Weight-averaged risk score, 0-100.
    pub risk_temperature: u8,
    /// Heuristic volatility estimate, 0-100.
    pub volatility: u8,
    /// Sector-spread score, 0-100; higher is better.
    pub diversification: u8,
}

impl CauldronReading {
    /// The reading for an empty pot. A policy choice, not a derived value:
    /// nothing selected reads as no risk and perfect diversification.
    pub const EMPTY: CauldronReading = CauldronReading {
        risk_temperature: 0,
        volatility: 0,
        diversification: 100,
    };

    /// Recompute all three metrics from an asset snapshot.
    pub fn from_assets(assets: &[Asset]) -> Self {
        if assets.is_empty() {
            return Self::EMPTY;
        }

        let total_weight: f64 = assets.iter().map(|asset| asset.weight).sum();
        if total_weight <= 0.0 {
            return Self::EMPTY;
        }

        let weighted_risk = assets
            .iter()
            .map(|asset| asset.risk * asset.weight)
            .sum::<f64>()
            / total_weight;

        let count = assets.len() as f64;
        let volatility = (weighted_risk * 1.2 * (1.0 + count / 20.0)).round().min(100.0);

        let mut sectors: Vec<Sector> = assets.iter().map(|asset| asset.sector).collect();
        sectors.sort_unstable_by_key(|sector| sector.label());
        sectors.dedup();
        let concentration = sectors.len() as f64 / count;
        let diversification =
            (100.0 * concentration * (1.0 - weighted_risk / 150.0)).round().clamp(0.0, 100.0);

        Self {
            risk_temperature: weighted_risk.round() as u8,
            volatility: volatility as u8,
            diversification: diversification as u8,
        }
    }

    pub const fn band(&self) -> TemperatureBand {
        TemperatureBand::of(self.risk_temperature)
    }
}

/// The two disjoint asset sets behind the drag-and-drop board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cauldron {
    seed: Vec<Asset>,
    bench: Vec<Asset>,
    pot: Vec<Asset>,
}

impl Cauldron {
    /// Start with every asset on the bench and an empty pot.
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            seed: assets.clone(),
            bench: assets,
            pot: Vec::new(),
        }
    }

    pub fn bench(&self) -> &[Asset] {
        &self.bench
    }

    pub fn pot(&self) -> &[Asset] {
        &self.pot
    }

    /// Move an asset from the bench into the pot. Unknown ids are ignored,
    /// matching the original drop handler.
    pub fn select(&mut self, id: &str) -> bool {
        move_between(&mut self.bench, &mut self.pot, id)
    }

    /// Move an asset from the pot back to the bench.
    pub fn deselect(&mut self, id: &str) -> bool {
        move_between(&mut self.pot, &mut self.bench, id)
    }

    /// Empty the pot and restore the seed list.
    pub fn reset(&mut self) {
        self.bench = self.seed.clone();
        self.pot.clear();
    }

    pub fn reading(&self) -> CauldronReading {
        CauldronReading::from_assets(&self.pot)
    }
}

fn move_between(from: &mut Vec<Asset>, to: &mut Vec<Asset>, id: &str) -> bool {
    match from.iter().position(|asset| asset.id == id) {
        Some(index) => {
            let asset = from.remove(index);
            to.push(asset);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn empty_pot_reads_zero_zero_hundred() {
        let reading = CauldronReading::from_assets(&[]);
        assert_eq!(reading, CauldronReading::EMPTY);
        assert_eq!(reading.risk_temperature, 0);
        assert_eq!(reading.volatility, 0);
        assert_eq!(reading.diversification, 100);
    }

    #[test]
    fn risk_temperature_is_weighted_average() {
        let assets = fixtures::seed_assets();
        // AAPL (risk 65, weight 15) and JNJ (risk 30, weight 6).
        let pair: Vec<Asset> = assets
            .into_iter()
            .filter(|asset| asset.id == "aapl" || asset.id == "jnj")
            .collect();
        let reading = CauldronReading::from_assets(&pair);

        let expected = ((65.0 * 15.0 + 30.0 * 6.0) / 21.0_f64).round() as u8;
        assert_eq!(reading.risk_temperature, expected);
    }

    #[test]
    fn volatility_is_capped_at_one_hundred() {
        let assets = fixtures::seed_assets();
        let reading = CauldronReading::from_assets(&assets);
        assert!(reading.volatility <= 100);
        assert!(reading.diversification <= 100);
    }

    #[test]
    fn select_and_deselect_keep_sets_disjoint() {
        let mut cauldron = Cauldron::new(fixtures::seed_assets());
        let total = cauldron.bench().len();

        assert!(cauldron.select("aapl"));
        assert!(cauldron.select("msft"));
        assert!(!cauldron.select("aapl"), "already in the pot");
        assert_eq!(cauldron.pot().len(), 2);
        assert_eq!(cauldron.bench().len() + cauldron.pot().len(), total);

        assert!(cauldron.deselect("aapl"));
        assert_eq!(cauldron.pot().len(), 1);

        cauldron.reset();
        assert_eq!(cauldron.bench().len(), total);
        assert!(cauldron.pot().is_empty());
        assert_eq!(cauldron.reading(), CauldronReading::EMPTY);
    }

    #[test]
    fn single_sector_pot_scores_low_diversification() {
        let assets = fixtures::seed_assets();
        let tech: Vec<Asset> = assets
            .iter()
            .filter(|asset| asset.sector == crate::Sector::Technology)
            .cloned()
            .collect();
        let mixed = fixtures::seed_assets();

        let tech_reading = CauldronReading::from_assets(&tech);
        let mixed_reading = CauldronReading::from_assets(&mixed);
        assert!(tech_reading.diversification < mixed_reading.diversification);
    }

    #[test]
    fn bands_follow_metric_card_thresholds() {
        assert_eq!(TemperatureBand::of(10), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::of(30), TemperatureBand::Elevated);
        assert_eq!(TemperatureBand::of(60), TemperatureBand::Critical);
    }
}
