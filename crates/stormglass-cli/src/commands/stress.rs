use serde_json::json;

use stormglass_core::{fixtures, StressRun, ValidationError, DATA_POINTS};

use crate::cli::StressArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &StressArgs, rng: &mut fastrand::Rng) -> Result<CommandResult, CliError> {
    let event = fixtures::find_event(&args.event).ok_or_else(|| {
        CliError::Validation(ValidationError::UnknownEvent {
            id: args.event.clone(),
        })
    })?;

    let run = StressRun::simulate(&event, args.severity, rng)?;

    let mut data = json!({
        "event": event,
        "severity": run.severity,
        "data_points": DATA_POINTS,
        "market_trough_pct": run.market_trough(),
        "portfolio_trough_pct": run.portfolio_trough(),
    });

    if args.full_series {
        data["market"] = json!(run.market);
        data["portfolio"] = json!(run.portfolio);
    }

    Ok(CommandResult::ok(data))
}
