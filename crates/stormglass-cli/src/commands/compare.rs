use serde_json::json;

use stormglass_core::{fixtures, Comparison, Portfolio};
use stormglass_store::Store;

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &CompareArgs) -> Result<CommandResult, CliError> {
    let store = Store::open_default()?;
    let mut warnings = Vec::new();

    let a = resolve(&args.a, &store, &mut warnings)?;
    let b = resolve(&args.b, &store, &mut warnings)?;

    let comparison = Comparison::between(&a, &b);
    warnings.extend(comparison.warnings.clone());

    let data = json!({
        "comparison": comparison,
        "top_differences": comparison.top_differences(args.top),
    });

    Ok(CommandResult::ok(data).with_warnings(warnings))
}

/// Resolve a portfolio reference: `manual` and `imported` read the store,
/// anything else matches a sample portfolio by name. Empty stored portfolios
/// fall back to the corresponding sample so the demo always has data.
fn resolve(name: &str, store: &Store, warnings: &mut Vec<String>) -> Result<Portfolio, CliError> {
    match name.to_lowercase().as_str() {
        "manual" => {
            let loaded = store.load_manual_portfolio()?;
            warnings.extend(loaded.warning);
            if loaded.value.is_empty() {
                warnings.push("manual portfolio is empty, using the sample".to_owned());
                return sample("My Manual Portfolio");
            }
            Ok(Portfolio::with_stocks("My Manual Portfolio", loaded.value))
        }
        "imported" => {
            let loaded = store.load_imported_portfolio()?;
            warnings.extend(loaded.warning);
            if loaded.value.is_empty() {
                warnings.push("no imported portfolio, using the sample".to_owned());
                return sample("Imported CSV Portfolio");
            }
            Ok(Portfolio::with_stocks("Imported CSV Portfolio", loaded.value))
        }
        _ => sample(name),
    }
}

fn sample(name: &str) -> Result<Portfolio, CliError> {
    let portfolios = fixtures::sample_portfolios();
    portfolios
        .into_iter()
        .find(|portfolio| portfolio.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let names: Vec<String> = fixtures::sample_portfolios()
                .into_iter()
                .map(|portfolio| portfolio.name)
                .collect();
            CliError::Command(format!(
                "unknown portfolio '{name}'; use manual, imported, or one of: {}",
                names.join(", ")
            ))
        })
}
