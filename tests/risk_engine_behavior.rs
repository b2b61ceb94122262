//! Behavior-driven tests for the risk cauldron
//!
//! These tests verify HOW the cauldron reacts to asset selection, focusing
//! on the user-visible metric readings.

use stormglass_core::{fixtures, Cauldron, CauldronReading, TemperatureBand};

// =============================================================================
// Cauldron: Metric Readings
// =============================================================================

#[test]
fn when_the_pot_is_empty_the_reading_is_the_policy_default() {
    // Given: A fresh cauldron with nothing selected
    let cauldron = Cauldron::new(fixtures::seed_assets());

    // Then: No risk, no volatility, perfect diversification
    let reading = cauldron.reading();
    assert_eq!(reading, CauldronReading::EMPTY);
    assert_eq!(reading.risk_temperature, 0);
    assert_eq!(reading.volatility, 0);
    assert_eq!(reading.diversification, 100);
}

#[test]
fn when_user_selects_two_assets_the_temperature_is_their_weighted_average() {
    // Given: A cauldron seeded from the catalog
    let mut cauldron = Cauldron::new(fixtures::seed_assets());

    // When: User drops AAPL (risk 65, weight 15) and JNJ (risk 30, weight 6)
    assert!(cauldron.select("aapl"));
    assert!(cauldron.select("jnj"));

    // Then: The temperature is the weight-averaged risk, rounded
    let expected = ((65.0 * 15.0 + 30.0 * 6.0) / 21.0_f64).round() as u8;
    assert_eq!(cauldron.reading().risk_temperature, expected);
}

#[test]
fn when_user_selects_the_whole_universe_scores_stay_in_range() {
    let mut cauldron = Cauldron::new(fixtures::seed_assets());
    let ids: Vec<String> = fixtures::seed_assets()
        .iter()
        .map(|asset| asset.id.clone())
        .collect();

    for id in &ids {
        assert!(cauldron.select(id), "catalog id {id} must select");
    }

    let reading = cauldron.reading();
    assert!(reading.risk_temperature <= 100);
    assert!(reading.volatility <= 100);
    assert!(reading.diversification <= 100);
    assert!(cauldron.bench().is_empty());
}

#[test]
fn concentrating_in_one_sector_lowers_diversification() {
    // Given: One pot holding only Technology, another holding everything
    let assets = fixtures::seed_assets();
    let tech: Vec<_> = assets
        .iter()
        .filter(|asset| asset.sector == stormglass_core::Sector::Technology)
        .cloned()
        .collect();

    let tech_reading = CauldronReading::from_assets(&tech);
    let mixed_reading = CauldronReading::from_assets(&assets);

    // Then: The concentrated pot scores strictly lower
    assert!(tech_reading.diversification < mixed_reading.diversification);
}

// =============================================================================
// Cauldron: Selection Mechanics
// =============================================================================

#[test]
fn when_user_drags_assets_back_and_forth_the_sets_stay_disjoint() {
    let mut cauldron = Cauldron::new(fixtures::seed_assets());
    let total = cauldron.bench().len();

    // When: Select, re-select, deselect
    assert!(cauldron.select("msft"));
    assert!(!cauldron.select("msft"), "second drop is a no-op");
    assert_eq!(cauldron.bench().len() + cauldron.pot().len(), total);

    assert!(cauldron.deselect("msft"));
    assert!(!cauldron.deselect("msft"));
    assert_eq!(cauldron.bench().len(), total);
}

#[test]
fn unknown_asset_ids_are_ignored() {
    let mut cauldron = Cauldron::new(fixtures::seed_assets());
    assert!(!cauldron.select("not-a-real-id"));
    assert!(cauldron.pot().is_empty());
}

#[test]
fn reset_restores_the_seed_universe() {
    let mut cauldron = Cauldron::new(fixtures::seed_assets());
    cauldron.select("aapl");
    cauldron.select("hd");

    cauldron.reset();

    assert!(cauldron.pot().is_empty());
    assert_eq!(cauldron.bench().len(), fixtures::seed_assets().len());
    assert_eq!(cauldron.reading(), CauldronReading::EMPTY);
}

// =============================================================================
// Temperature Bands
// =============================================================================

#[test]
fn temperature_bands_split_at_thirty_and_sixty() {
    assert_eq!(TemperatureBand::of(0), TemperatureBand::Cool);
    assert_eq!(TemperatureBand::of(29), TemperatureBand::Cool);
    assert_eq!(TemperatureBand::of(30), TemperatureBand::Elevated);
    assert_eq!(TemperatureBand::of(59), TemperatureBand::Elevated);
    assert_eq!(TemperatureBand::of(60), TemperatureBand::Critical);
    assert_eq!(TemperatureBand::of(100), TemperatureBand::Critical);
}
