//! Local persistence for stormglass.
//!
//! A typed repository over one DuckDB table, `datasets(key, value,
//! updated_at)`, where every value is a JSON document. Readers never fail on
//! bad data: a missing key yields the default, and a malformed document is
//! cleared and reported as a warning so one corrupt entry cannot wedge the
//! dashboard.

pub mod migrations;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ::duckdb::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use stormglass_core::{PortfolioStock, RiskAlert};

use migrations::escape_sql_string;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    DuckDb(#[from] ::duckdb::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store connection poisoned")]
    Poisoned,
}

/// The fixed set of persisted datasets. Key strings are part of the on-disk
/// contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    RiskAlerts,
    RiskAlertsEnabled,
    ManualPortfolio,
    ImportedPortfolio,
    ImportedPortfolioFilename,
}

impl Dataset {
    pub const fn key(&self) -> &'static str {
        match self {
            Dataset::RiskAlerts => "riskAlerts",
            Dataset::RiskAlertsEnabled => "riskAlertsEnabled",
            Dataset::ManualPortfolio => "manualPortfolio",
            Dataset::ImportedPortfolio => "importedPortfolio",
            Dataset::ImportedPortfolioFilename => "importedPortfolio_filename",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub home: PathBuf,
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let home = resolve_home();
        let db_path = home.join("stormglass.duckdb");
        Self { home, db_path }
    }
}

/// A value read from the store, with a warning when the stored document had
/// to be discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Loaded<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }
}

pub struct Store {
    connection: Mutex<Connection>,
}

impl Store {
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(StoreConfig::default())
    }

    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        if let Some(parent) = config.db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let connection = Connection::open(config.db_path.as_path())?;
        migrations::apply_migrations(&connection)?;

        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Saved risk alerts, oldest first. Malformed data clears the key.
    pub fn load_alerts(&self) -> Result<Loaded<Vec<RiskAlert>>, StoreError> {
        self.load_json(Dataset::RiskAlerts)
    }

    pub fn save_alerts(&self, alerts: &[RiskAlert]) -> Result<(), StoreError> {
        self.put_json(Dataset::RiskAlerts, &alerts)
    }

    /// Whether alert evaluation is enabled. Missing means enabled; the stored
    /// value is the literal string "true" or "false".
    pub fn alerts_enabled(&self) -> Result<bool, StoreError> {
        let raw = self.get_raw(Dataset::RiskAlertsEnabled.key())?;
        Ok(raw.as_deref() != Some("false"))
    }

    pub fn set_alerts_enabled(&self, enabled: bool) -> Result<(), StoreError> {
        let literal = if enabled { "true" } else { "false" };
        self.put_raw(Dataset::RiskAlertsEnabled.key(), literal)
    }

    /// Holdings of the manually built portfolio.
    pub fn load_manual_portfolio(&self) -> Result<Loaded<Vec<PortfolioStock>>, StoreError> {
        self.load_json(Dataset::ManualPortfolio)
    }

    pub fn save_manual_portfolio(&self, stocks: &[PortfolioStock]) -> Result<(), StoreError> {
        self.put_json(Dataset::ManualPortfolio, &stocks)
    }

    /// Holdings of the last imported CSV. A malformed document clears the
    /// filename along with the holdings.
    pub fn load_imported_portfolio(&self) -> Result<Loaded<Vec<PortfolioStock>>, StoreError> {
        let loaded: Loaded<Vec<PortfolioStock>> = self.load_json(Dataset::ImportedPortfolio)?;
        if loaded.warning.is_some() {
            self.delete(Dataset::ImportedPortfolioFilename)?;
        }
        Ok(loaded)
    }

    pub fn save_imported_portfolio(
        &self,
        stocks: &[PortfolioStock],
        filename: Option<&str>,
    ) -> Result<(), StoreError> {
        self.put_json(Dataset::ImportedPortfolio, &stocks)?;
        match filename {
            Some(filename) => self.put_raw(Dataset::ImportedPortfolioFilename.key(), filename)?,
            None => self.delete(Dataset::ImportedPortfolioFilename)?,
        }
        Ok(())
    }

    pub fn imported_filename(&self) -> Result<Option<String>, StoreError> {
        self.get_raw(Dataset::ImportedPortfolioFilename.key())
    }

    pub fn clear_imported_portfolio(&self) -> Result<(), StoreError> {
        self.delete(Dataset::ImportedPortfolio)?;
        self.delete(Dataset::ImportedPortfolioFilename)
    }

    pub fn delete(&self, dataset: Dataset) -> Result<(), StoreError> {
        let sql = format!(
            "DELETE FROM datasets WHERE key = '{}'",
            escape_sql_string(dataset.key())
        );
        let connection = self.lock()?;
        connection.execute_batch(sql.as_str())?;
        Ok(())
    }

    fn load_json<T>(&self, dataset: Dataset) -> Result<Loaded<Vec<T>>, StoreError>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.get_raw(dataset.key())? else {
            return Ok(Loaded::clean(Vec::new()));
        };

        match serde_json::from_str(raw.as_str()) {
            Ok(value) => Ok(Loaded::clean(value)),
            Err(error) => {
                self.delete(dataset)?;
                Ok(Loaded {
                    value: Vec::new(),
                    warning: Some(format!(
                        "discarded malformed '{}' data: {error}",
                        dataset.key()
                    )),
                })
            }
        }
    }

    fn put_json<T>(&self, dataset: Dataset, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;
        self.put_raw(dataset.key(), json.as_str())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let sql = format!(
            "SELECT value FROM datasets WHERE key = '{}'",
            escape_sql_string(key)
        );
        let connection = self.lock()?;
        match connection.query_row(sql.as_str(), [], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(::duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT OR REPLACE INTO datasets (key, value, updated_at) VALUES ('{}', '{}', CURRENT_TIMESTAMP)",
            escape_sql_string(key),
            escape_sql_string(value)
        );
        let connection = self.lock()?;
        connection.execute_batch(sql.as_str())?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.connection.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn resolve_home() -> PathBuf {
    if let Some(path) = env::var_os("STORMGLASS_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".stormglass");
    }

    PathBuf::from(".stormglass")
}

/// Build a config rooted at an explicit directory, bypassing the environment.
pub fn config_at(home: impl AsRef<Path>) -> StoreConfig {
    let home = home.as_ref().to_path_buf();
    let db_path = home.join("stormglass.duckdb");
    StoreConfig { home, db_path }
}
