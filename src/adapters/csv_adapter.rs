//! CSV file data adapter.
//!
//! One `<SYMBOL>.csv` per symbol under a base directory, header
//! `date,close,volume`. Cell values come back as scalars; the domain
//! normalizer handles the rest.

use crate::domain::error::ScreenError;
use crate::domain::series::{RawBar, RawHistory, RawValue};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Build from the `[data] path` config key.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, ScreenError> {
        let path = config
            .get_string("data", "path")
            .ok_or_else(|| ScreenError::ConfigMissing {
                section: "data".into(),
                key: "path".into(),
            })?;
        Ok(Self::new(PathBuf::from(path)))
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }

    fn read_rows(&self, symbol: &str) -> Result<Vec<(NaiveDate, f64, f64)>, ScreenError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| ScreenError::Data {
            symbol: symbol.to_string(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| ScreenError::Data {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| ScreenError::Data {
                symbol: symbol.to_string(),
                reason: "missing date column".into(),
            })?;
            let date =
                NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| ScreenError::Data {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date format: {}", e),
                })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| ScreenError::Data {
                    symbol: symbol.to_string(),
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| ScreenError::Data {
                    symbol: symbol.to_string(),
                    reason: format!("invalid close value: {}", e),
                })?;

            let volume: f64 = record
                .get(2)
                .ok_or_else(|| ScreenError::Data {
                    symbol: symbol.to_string(),
                    reason: "missing volume column".into(),
                })?
                .parse()
                .map_err(|e| ScreenError::Data {
                    symbol: symbol.to_string(),
                    reason: format!("invalid volume value: {}", e),
                })?;

            rows.push((date, close, volume));
        }

        rows.sort_by_key(|r| r.0);
        Ok(rows)
    }
}

impl DataPort for CsvAdapter {
    fn fetch_history(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RawHistory, ScreenError> {
        let bars = self
            .read_rows(symbol)?
            .into_iter()
            .filter(|(date, _, _)| *date >= start_date && *date <= end_date)
            .map(|(date, close, volume)| RawBar {
                date,
                close: RawValue::Scalar(close),
                volume: RawValue::Scalar(volume),
            })
            .collect();

        Ok(RawHistory { bars })
    }

    fn list_symbols(&self) -> Result<Vec<String>, ScreenError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| ScreenError::DataDir {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ScreenError::DataDir {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, ScreenError> {
        let rows = self.read_rows(symbol)?;
        match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => Ok(Some((first.0, last.0, rows.len()))),
            _ => Ok(None),
        }
    }
}
