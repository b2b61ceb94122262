use serde_json::json;
use uuid::Uuid;

use stormglass_core::{fixtures::current_metrics, RiskAlert};
use stormglass_store::Store;

use crate::cli::{AddAlertArgs, AlertsCommand, RemoveAlertArgs};
use crate::error::CliError;

use super::CommandResult;

pub fn run(command: &AlertsCommand) -> Result<CommandResult, CliError> {
    let store = Store::open_default()?;

    match command {
        AlertsCommand::List => list(&store),
        AlertsCommand::Add(args) => add(&store, args),
        AlertsCommand::Remove(args) => remove(&store, args),
        AlertsCommand::Enable => set_enabled(&store, true),
        AlertsCommand::Disable => set_enabled(&store, false),
    }
}

fn list(store: &Store) -> Result<CommandResult, CliError> {
    let loaded = store.load_alerts()?;
    let enabled = store.alerts_enabled()?;

    let data = json!({
        "enabled": enabled,
        "alerts": loaded.value,
        "current_metrics": {
            "portfolio_beta": current_metrics::PORTFOLIO_BETA,
            "value_at_risk": current_metrics::VALUE_AT_RISK,
            "max_correlation": current_metrics::MAX_CORRELATION,
        },
    });

    let mut result = CommandResult::ok(data);
    if let Some(warning) = loaded.warning {
        result = result.with_warning(warning);
    }
    Ok(result)
}

fn add(store: &Store, args: &AddAlertArgs) -> Result<CommandResult, CliError> {
    let alert = RiskAlert::new(
        args.metric.into(),
        args.threshold,
        args.condition.into(),
        args.notify.clone(),
    )?;

    let loaded = store.load_alerts()?;
    let mut alerts = loaded.value;
    alerts.push(alert.clone());
    store.save_alerts(&alerts)?;

    let mut result = CommandResult::ok(json!({ "alert": alert, "total": alerts.len() }));
    if let Some(warning) = loaded.warning {
        result = result.with_warning(warning);
    }
    Ok(result)
}

fn remove(store: &Store, args: &RemoveAlertArgs) -> Result<CommandResult, CliError> {
    let id = Uuid::parse_str(&args.id)
        .map_err(|_| CliError::Command(format!("'{}' is not a valid alert id", args.id)))?;

    let loaded = store.load_alerts()?;
    let mut alerts = loaded.value;
    let before = alerts.len();
    alerts.retain(|alert| alert.id != id);
    if alerts.len() == before {
        return Err(CliError::Command(format!("no alert with id {id}")));
    }
    store.save_alerts(&alerts)?;

    let mut result = CommandResult::ok(json!({ "removed": id, "total": alerts.len() }));
    if let Some(warning) = loaded.warning {
        result = result.with_warning(warning);
    }
    Ok(result)
}

fn set_enabled(store: &Store, enabled: bool) -> Result<CommandResult, CliError> {
    store.set_alerts_enabled(enabled)?;
    Ok(CommandResult::ok(json!({ "enabled": enabled })))
}
