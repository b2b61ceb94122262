use serde_json::json;

use stormglass_core::{fixtures, CauldronReading, Pacing, ScanReport, ASSET_CLASSES};

use crate::error::CliError;

use super::CommandResult;

/// Headline cross-asset correlation from the demo market feed.
const HEADLINE_CORRELATION: f64 = 0.82;

pub fn run(pacing: Pacing, rng: &mut fastrand::Rng) -> Result<CommandResult, CliError> {
    let reading = CauldronReading::from_assets(&fixtures::seed_assets());
    let report = ScanReport::run(&reading, HEADLINE_CORRELATION, pacing, rng);

    let data = json!({
        "risk_level": report.risk_level.label(),
        "reading": reading,
        "health": {
            "grade": report.health.letter(),
            "description": report.health.description(),
        },
        "crisis_exposure": {
            "level": report.crisis_exposure.label(),
            "description": report.crisis_exposure.description(),
        },
        "correlation": {
            "value": report.correlation.correlation_value,
            "storm_warning": report.correlation.is_storm(),
            "asset_classes": ASSET_CLASSES,
            "cells": report.correlation.cells,
        },
    });

    Ok(CommandResult::ok(data))
}
