use serde_json::{json, Value};

use stormglass_core::{assistant, Pacing};

use crate::cli::AssistantArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &AssistantArgs, pacing: Pacing) -> Result<CommandResult, CliError> {
    match assistant::respond(&args.query, pacing) {
        Some(reply) => Ok(CommandResult::ok(json!({ "reply": reply }))),
        None => {
            let result = CommandResult::ok(Value::Null).with_warning(format!(
                "no scripted reply matches the query; try one of: {}",
                assistant::SAMPLE_QUERIES.join(", ")
            ));
            Ok(result)
        }
    }
}
