use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stormglass_core::{AlertCondition, AlertMetric};

/// Client-side financial-risk dashboard, terminal edition.
#[derive(Debug, Parser)]
#[command(name = "stormglass", version, about)]
pub struct Cli {
    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Seed for every randomized computation; a fixed seed reproduces runs.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Demo pacing: insert the scripted warm-up and thinking delays.
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mix assets in the risk cauldron and read the derived metrics.
    Cauldron(CauldronArgs),
    /// List the historical event templates.
    Events,
    /// Run a synthetic stress test against a historical event.
    Stress(StressArgs),
    /// Compare two portfolios by normalized weights and overlap.
    Compare(CompareArgs),
    /// Manage the manual and imported portfolios.
    #[command(subcommand)]
    Portfolio(PortfolioCommand),
    /// Manage risk alerts.
    #[command(subcommand)]
    Alerts(AlertsCommand),
    /// Run a quick risk-environment scan.
    Scan,
    /// Show the risk journey: badges, stability score, peer standing.
    Journey,
    /// Ask the scripted assistant a question.
    Assistant(AssistantArgs),
}

#[derive(Debug, Args)]
pub struct CauldronArgs {
    /// Asset ids to drop into the pot (repeatable). Unknown ids are ignored
    /// with a warning.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,
}

#[derive(Debug, Args)]
pub struct StressArgs {
    /// Historical event id, e.g. `covid-crash`.
    #[arg(long)]
    pub event: String,

    /// Severity dial, 1-100.
    #[arg(long, default_value_t = 50)]
    pub severity: u8,

    /// Emit the full 100-point series instead of the summary.
    #[arg(long)]
    pub full_series: bool,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First portfolio: `manual`, `imported`, or a sample portfolio name.
    pub a: String,

    /// Second portfolio: `manual`, `imported`, or a sample portfolio name.
    pub b: String,

    /// How many top weight differences to highlight.
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

#[derive(Debug, Subcommand)]
pub enum PortfolioCommand {
    /// Show a stored portfolio.
    Show(PortfolioSelectArgs),
    /// Import holdings from a CSV file and save them.
    Import(ImportArgs),
    /// Export a stored portfolio as CSV.
    Export(PortfolioSelectArgs),
    /// Print the sample CSV file.
    Sample,
    /// Add a holding to the manual portfolio.
    Add(AddStockArgs),
    /// Remove a holding from the manual portfolio by ticker.
    Remove(RemoveStockArgs),
    /// Delete a stored portfolio.
    Clear(PortfolioSelectArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoredPortfolio {
    Manual,
    Imported,
}

#[derive(Debug, Args)]
pub struct PortfolioSelectArgs {
    #[arg(value_enum)]
    pub which: StoredPortfolio,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the CSV file.
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct AddStockArgs {
    pub ticker: String,

    #[arg(long)]
    pub quantity: Option<f64>,

    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long)]
    pub sector: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveStockArgs {
    pub ticker: String,
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List saved alerts and the current metric snapshot.
    List,
    /// Create a new alert.
    Add(AddAlertArgs),
    /// Remove an alert by id.
    Remove(RemoveAlertArgs),
    /// Turn alert evaluation on.
    Enable,
    /// Turn alert evaluation off.
    Disable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Beta,
    Var,
    Correlation,
}

impl From<MetricArg> for AlertMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Beta => AlertMetric::PortfolioBeta,
            MetricArg::Var => AlertMetric::ValueAtRisk,
            MetricArg::Correlation => AlertMetric::MaxCorrelation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConditionArg {
    Above,
    Below,
}

impl From<ConditionArg> for AlertCondition {
    fn from(value: ConditionArg) -> Self {
        match value {
            ConditionArg::Above => AlertCondition::Above,
            ConditionArg::Below => AlertCondition::Below,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddAlertArgs {
    #[arg(long, value_enum)]
    pub metric: MetricArg,

    #[arg(long)]
    pub threshold: f64,

    #[arg(long, value_enum, default_value_t = ConditionArg::Above)]
    pub condition: ConditionArg,

    /// Email or device to notify when the alert fires.
    #[arg(long)]
    pub notify: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveAlertArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AssistantArgs {
    /// Free-text query, e.g. "Show my beta vs. NASDAQ".
    pub query: String,
}
