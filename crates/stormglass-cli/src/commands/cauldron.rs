use serde_json::json;

use stormglass_core::{fixtures, Cauldron};

use crate::cli::CauldronArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &CauldronArgs) -> Result<CommandResult, CliError> {
    let mut cauldron = Cauldron::new(fixtures::seed_assets());
    let mut warnings = Vec::new();

    for id in &args.select {
        if !cauldron.select(id) {
            warnings.push(format!("unknown or already selected asset id '{id}'"));
        }
    }

    let reading = cauldron.reading();
    let data = json!({
        "pot": cauldron.pot(),
        "bench_count": cauldron.bench().len(),
        "reading": reading,
        "band": reading.band(),
    });

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
