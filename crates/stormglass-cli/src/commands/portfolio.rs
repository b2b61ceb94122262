use std::fs;

use serde_json::json;

use stormglass_core::{csv, Portfolio, PortfolioStock, Sector, Ticker, SAMPLE_CSV};
use stormglass_store::{Dataset, Store};

use crate::cli::{
    AddStockArgs, ImportArgs, PortfolioCommand, PortfolioSelectArgs, RemoveStockArgs,
    StoredPortfolio,
};
use crate::error::CliError;

use super::CommandResult;

pub fn run(command: &PortfolioCommand) -> Result<CommandResult, CliError> {
    match command {
        PortfolioCommand::Show(args) => show(args),
        PortfolioCommand::Import(args) => import(args),
        PortfolioCommand::Export(args) => export(args),
        PortfolioCommand::Sample => Ok(CommandResult::ok(json!({ "csv": SAMPLE_CSV }))),
        PortfolioCommand::Add(args) => add(args),
        PortfolioCommand::Remove(args) => remove(args),
        PortfolioCommand::Clear(args) => clear(args),
    }
}

fn show(args: &PortfolioSelectArgs) -> Result<CommandResult, CliError> {
    let store = Store::open_default()?;
    let mut warnings = Vec::new();

    let data = match args.which {
        StoredPortfolio::Manual => {
            let loaded = store.load_manual_portfolio()?;
            warnings.extend(loaded.warning);
            json!({ "name": "My Manual Portfolio", "stocks": loaded.value })
        }
        StoredPortfolio::Imported => {
            let loaded = store.load_imported_portfolio()?;
            warnings.extend(loaded.warning);
            let filename = store.imported_filename()?;
            json!({
                "name": "Imported CSV Portfolio",
                "filename": filename,
                "stocks": loaded.value,
            })
        }
    };

    Ok(CommandResult::ok(data).with_warnings(warnings))
}

fn import(args: &ImportArgs) -> Result<CommandResult, CliError> {
    let text = fs::read_to_string(&args.file)?;
    let report = csv::import(&text)?;

    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let store = Store::open_default()?;
    store.save_imported_portfolio(&report.stocks, filename.as_deref())?;

    let data = json!({
        "imported": report.stocks.len(),
        "filename": filename,
        "stocks": report.stocks,
    });

    Ok(CommandResult::ok(data).with_warnings(report.warnings))
}

fn export(args: &PortfolioSelectArgs) -> Result<CommandResult, CliError> {
    let store = Store::open_default()?;
    let mut warnings = Vec::new();

    let (name, stocks) = match args.which {
        StoredPortfolio::Manual => {
            let loaded = store.load_manual_portfolio()?;
            warnings.extend(loaded.warning);
            ("My Manual Portfolio", loaded.value)
        }
        StoredPortfolio::Imported => {
            let loaded = store.load_imported_portfolio()?;
            warnings.extend(loaded.warning);
            ("Imported CSV Portfolio", loaded.value)
        }
    };

    let portfolio = Portfolio::with_stocks(name, stocks);
    let rendered = csv::export(&portfolio)?;

    Ok(CommandResult::ok(json!({ "name": name, "csv": rendered })).with_warnings(warnings))
}

fn add(args: &AddStockArgs) -> Result<CommandResult, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let sector = args
        .sector
        .as_deref()
        .map(|raw| raw.parse::<Sector>().unwrap_or(Sector::Other));
    let stock = PortfolioStock::new(ticker, args.quantity, args.weight, sector)?;

    let store = Store::open_default()?;
    let loaded = store.load_manual_portfolio()?;
    let mut warnings = Vec::new();
    warnings.extend(loaded.warning);

    let mut portfolio = Portfolio::with_stocks("My Manual Portfolio", loaded.value);
    portfolio.add(stock.clone())?;
    store.save_manual_portfolio(&portfolio.stocks)?;

    let data = json!({ "added": stock, "holdings": portfolio.len() });
    Ok(CommandResult::ok(data).with_warnings(warnings))
}

fn remove(args: &RemoveStockArgs) -> Result<CommandResult, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;

    let store = Store::open_default()?;
    let loaded = store.load_manual_portfolio()?;
    let mut warnings = Vec::new();
    warnings.extend(loaded.warning);

    let mut portfolio = Portfolio::with_stocks("My Manual Portfolio", loaded.value);
    let removed = portfolio.remove(&ticker).ok_or_else(|| {
        CliError::Command(format!("ticker {ticker} is not in the manual portfolio"))
    })?;
    store.save_manual_portfolio(&portfolio.stocks)?;

    let data = json!({ "removed": removed, "holdings": portfolio.len() });
    Ok(CommandResult::ok(data).with_warnings(warnings))
}

fn clear(args: &PortfolioSelectArgs) -> Result<CommandResult, CliError> {
    let store = Store::open_default()?;

    let cleared = match args.which {
        StoredPortfolio::Manual => {
            store.delete(Dataset::ManualPortfolio)?;
            "manual"
        }
        StoredPortfolio::Imported => {
            store.clear_imported_portfolio()?;
            "imported"
        }
    };

    Ok(CommandResult::ok(json!({ "cleared": cleared })))
}
