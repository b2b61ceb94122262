mod alerts;
mod assistant;
mod cauldron;
mod compare;
mod events;
mod journey;
mod portfolio;
mod scan;
mod stress;

use serde_json::Value;

use stormglass_core::Pacing;

use crate::cli::{Cli, Command};
use crate::envelope::Envelope;
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let pacing = if cli.demo {
        Pacing::demo()
    } else {
        Pacing::none()
    };

    let result = match &cli.command {
        Command::Cauldron(args) => cauldron::run(args)?,
        Command::Events => events::run()?,
        Command::Stress(args) => stress::run(args, &mut rng)?,
        Command::Compare(args) => compare::run(args)?,
        Command::Portfolio(command) => portfolio::run(command)?,
        Command::Alerts(command) => alerts::run(command)?,
        Command::Scan => scan::run(pacing, &mut rng)?,
        Command::Journey => journey::run()?,
        Command::Assistant(args) => assistant::run(args, pacing)?,
    };

    let CommandResult { data, warnings } = result;
    Ok(Envelope::new(data, warnings))
}
