use serde_json::json;

use stormglass_core::fixtures;

use crate::error::CliError;

use super::CommandResult;

pub fn run() -> Result<CommandResult, CliError> {
    let achievements = fixtures::achievements();
    let earned = achievements.iter().filter(|badge| badge.earned).count();

    let data = json!({
        "achievements": achievements,
        "earned": earned,
        "stability_score": fixtures::stability_score(),
        "peer_comparison": fixtures::peer_comparison(),
    });

    Ok(CommandResult::ok(data))
}
