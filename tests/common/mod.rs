#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use dipscreen::domain::error::ScreenError;
use dipscreen::domain::series::{RawBar, RawHistory, RawValue};
use dipscreen::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, RawHistory>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_history(mut self, symbol: &str, history: RawHistory) -> Self {
        self.data.insert(symbol.to_string(), history);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_history(
        &self,
        symbol: &str,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<RawHistory, ScreenError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(ScreenError::Data {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(symbol).cloned().unwrap_or_default())
    }

    fn list_symbols(&self) -> Result<Vec<String>, ScreenError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, ScreenError> {
        match self.data.get(symbol) {
            Some(history) if !history.bars.is_empty() => {
                let min = history.bars.iter().map(|b| b.date).min().unwrap();
                let max = history.bars.iter().map(|b| b.date).max().unwrap();
                Ok(Some((min, max, history.bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn raw_history(closes: &[f64], volume: f64) -> RawHistory {
    let start = date(2023, 1, 1);
    RawHistory {
        bars: closes
            .iter()
            .enumerate()
            .map(|(i, &close)| RawBar {
                date: start + Duration::days(i as i64),
                close: RawValue::Scalar(close),
                volume: RawValue::Scalar(volume),
            })
            .collect(),
    }
}

/// 200-bar series that the default rules classify as a dip buy: a long
/// cheap stretch, a jump, and a small pullback at the end.
pub fn dip_buy_history(volume: f64) -> RawHistory {
    let mut closes = vec![40.0; 170];
    closes.extend(std::iter::repeat(46.0).take(25));
    closes.extend(std::iter::repeat(45.0).take(5));
    raw_history(&closes, volume)
}

/// Mirror shape classified as a rally reject: expensive history, a drop,
/// and a small rally at the end.
pub fn rally_reject_history(volume: f64) -> RawHistory {
    let mut closes = vec![50.0; 170];
    closes.extend(std::iter::repeat(44.0).take(25));
    closes.extend(std::iter::repeat(45.0).take(5));
    raw_history(&closes, volume)
}
