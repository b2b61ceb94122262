use serde_json::json;

use stormglass_core::fixtures;

use crate::error::CliError;

use super::CommandResult;

pub fn run() -> Result<CommandResult, CliError> {
    let events = fixtures::historical_events();
    Ok(CommandResult::ok(json!({ "events": events })))
}
