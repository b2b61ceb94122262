//! CSV import and export for portfolio holdings.
//!
//! Import is tolerant by design: structural problems (missing header columns,
//! no data rows) fail the whole file, while individual bad rows are skipped
//! and reported as warnings so one typo does not discard the rest of an
//! export from a broker.

use std::io;

use thiserror::Error;

use crate::{Portfolio, PortfolioStock, Sector, Ticker};

/// The downloadable sample file, byte for byte.
pub const SAMPLE_CSV: &str = "ticker,quantity,weight,sector\nAAPL,10,,Technology\nMSFT,,15,Technology\nAMZN,3,10,Consumer Cyclical\nGOOGL,2,5,Communication Services\nJNJ,8,,Healthcare";

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV must include a \"ticker\" column")]
    MissingTickerColumn,
    #[error("CSV must include either a \"quantity\" or \"weight\" column")]
    MissingHoldingColumn,
    #[error("CSV file must contain a header row and at least one data row")]
    NoDataRows,
    #[error("no valid stock data found in the CSV file")]
    NoValidRows,
    #[error("malformed CSV: {0}")]
    Malformed(#[from] ::csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result of a tolerant import: the holdings that parsed, plus one warning
/// per skipped row.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub stocks: Vec<PortfolioStock>,
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// Wrap the imported holdings in a named portfolio.
    pub fn into_portfolio(self, name: impl Into<String>) -> Portfolio {
        Portfolio::with_stocks(name, self.stocks)
    }
}

/// Parse holdings from CSV text.
///
/// Header names are matched case-insensitively. A row is skipped (with a
/// warning) when its ticker is blank or invalid, or when it carries neither a
/// usable quantity nor a usable weight.
pub fn import(input: &str) -> Result<ImportReport, CsvError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.to_ascii_lowercase())
        .collect();

    let column = |name: &str| headers.iter().position(|header| header == name);
    let ticker_col = column("ticker").ok_or(CsvError::MissingTickerColumn)?;
    let quantity_col = column("quantity");
    let weight_col = column("weight");
    let sector_col = column("sector");
    if quantity_col.is_none() && weight_col.is_none() {
        return Err(CsvError::MissingHoldingColumn);
    }

    let mut stocks = Vec::new();
    let mut warnings = Vec::new();
    let mut saw_row = false;

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        saw_row = true;
        // Rows are numbered as in the file, header included.
        let line = index + 2;

        let field = |col: Option<usize>| {
            col.and_then(|col| record.get(col)).filter(|value| !value.is_empty())
        };

        let Some(raw_ticker) = field(Some(ticker_col)) else {
            warnings.push(format!("skipping row {line}: missing ticker"));
            continue;
        };
        let ticker = match Ticker::parse(raw_ticker) {
            Ok(ticker) => ticker,
            Err(error) => {
                warnings.push(format!("skipping row {line}: {error}"));
                continue;
            }
        };

        // Unparsable numbers are treated as absent, matching the lenient
        // spreadsheet-export behavior users expect.
        let quantity = field(quantity_col).and_then(|value| value.parse::<f64>().ok());
        let weight = field(weight_col).and_then(|value| value.parse::<f64>().ok());
        let sector = field(sector_col).map(|value| value.parse::<Sector>().unwrap_or(Sector::Other));

        match PortfolioStock::new(ticker, quantity, weight, sector) {
            Ok(stock) => stocks.push(stock),
            Err(error) => warnings.push(format!("skipping row {line}: {error}")),
        }
    }

    if !saw_row {
        return Err(CsvError::NoDataRows);
    }
    if stocks.is_empty() {
        return Err(CsvError::NoValidRows);
    }

    Ok(ImportReport { stocks, warnings })
}

/// Render a portfolio back to CSV with the canonical four-column header.
pub fn export(portfolio: &Portfolio) -> Result<String, CsvError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(["ticker", "quantity", "weight", "sector"])?;

    for stock in &portfolio.stocks {
        let quantity = stock.quantity.map(fmt_number).unwrap_or_default();
        let weight = stock.weight.map(fmt_number).unwrap_or_default();
        let sector = stock.sector.map(|sector| sector.label()).unwrap_or_default();
        writer.write_record([stock.ticker.as_str(), &quantity, &weight, sector])?;
    }

    let bytes = writer.into_inner().map_err(|error| error.into_error())?;
    String::from_utf8(bytes).map_err(|error| CsvError::Io(io::Error::other(error)))
}

fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
