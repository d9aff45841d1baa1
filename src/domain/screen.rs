//! Screen orchestration: the per-symbol pipeline and the whole-universe run.
//!
//! Each symbol flows raw history → normalizer → indicator engine →
//! classifier, producing an explicit [`SymbolOutcome`]. Candidates from the
//! whole universe are ranked once at the end. Symbols are independent: no
//! shared state, no ordering dependency between them.

use crate::domain::classifier::{self, Candidate};
use crate::domain::error::ScreenError;
use crate::domain::indicator::{self, IndicatorParams};
use crate::domain::ranker::{self, ScreenResult};
use crate::domain::series::{self, RawHistory, SkipReason};
use crate::ports::data_port::DataPort;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// All engine parameters for one run, passed explicitly into the entry
/// points, never ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    /// Minimum bars of history before a symbol is eligible.
    pub min_history: usize,
    /// Universe filter: only symbols at or below this price are screened.
    pub price_ceiling: f64,
    /// Width of the band around the fast SMA, as a fraction (0.01 = 1%).
    pub tolerance: f64,
    pub rsi_period: usize,
    pub sma_fast: usize,
    pub sma_slow: usize,
    /// Candidates reported per side.
    pub top_n: usize,
    pub bull_rsi_min: f64,
    pub bear_rsi_max: f64,
    /// Trailing window fetched per symbol, in calendar days.
    pub lookback_days: i64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            min_history: 200,
            price_ceiling: 50.0,
            tolerance: 0.01,
            rsi_period: 14,
            sma_fast: 20,
            sma_slow: 50,
            top_n: 20,
            bull_rsi_min: 40.0,
            bear_rsi_max: 60.0,
            lookback_days: 730,
        }
    }
}

impl ScreenConfig {
    pub fn indicator_params(&self) -> IndicatorParams {
        IndicatorParams {
            sma_fast: self.sma_fast,
            sma_slow: self.sma_slow,
            rsi_period: self.rsi_period,
        }
    }

    /// Bars required before a symbol is eligible: the configured minimum,
    /// but never less than the slow SMA window or the RSI warm-up need.
    pub fn required_bars(&self) -> usize {
        self.min_history
            .max(self.sma_slow)
            .max(self.sma_fast)
            .max(self.rsi_period + 1)
    }
}

/// Outcome of the per-symbol pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    /// One or both rules fired.
    Candidates(Vec<Candidate>),
    /// Eligible data, no rule fired.
    NoSetup,
    /// Excluded before classification.
    Skipped(SkipReason),
}

/// A skipped symbol and why, for the run's skip ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSymbol {
    pub ticker: String,
    pub reason: SkipReason,
}

/// One full run's output plus the skip ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSummary {
    pub result: ScreenResult,
    pub skipped: Vec<SkippedSymbol>,
    pub scanned: usize,
}

/// Pure per-symbol pipeline: normalize, snapshot, classify.
pub fn screen_symbol(ticker: &str, raw: &RawHistory, config: &ScreenConfig) -> SymbolOutcome {
    let series = match series::normalize(ticker, raw, config.required_bars()) {
        Ok(s) => s,
        Err(reason) => return SymbolOutcome::Skipped(reason),
    };

    let snap = match indicator::snapshot(&series, &config.indicator_params()) {
        Some(s) => s,
        // Unreachable when required_bars covers the windows; kept as a skip
        // so a degenerate config still cannot abort the run.
        None => {
            return SymbolOutcome::Skipped(SkipReason::InsufficientBars {
                bars: series.len(),
                minimum: config.required_bars(),
            });
        }
    };

    let candidates = classifier::classify(ticker, &snap, config);
    if candidates.is_empty() {
        SymbolOutcome::NoSetup
    } else {
        SymbolOutcome::Candidates(candidates)
    }
}

/// Run the screen over a universe of symbols as of a given date.
///
/// Per-symbol failures (fetch errors, malformed data, short history) degrade
/// to skips with a stderr warning; the run always completes and returns a
/// possibly empty result. An empty universe is not an error.
pub fn run_screen(
    data_port: &dyn DataPort,
    symbols: &[String],
    as_of: NaiveDate,
    config: &ScreenConfig,
) -> ScreenSummary {
    let start = as_of - Duration::days(config.lookback_days);
    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for ticker in symbols {
        let raw = match data_port.fetch_history(ticker, start, as_of) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", ticker, e);
                skipped.push(SkippedSymbol {
                    ticker: ticker.clone(),
                    reason: SkipReason::NoData,
                });
                continue;
            }
        };

        match screen_symbol(ticker, &raw, config) {
            SymbolOutcome::Candidates(mut found) => candidates.append(&mut found),
            SymbolOutcome::NoSetup => {}
            SymbolOutcome::Skipped(reason) => {
                eprintln!("warning: skipping {} ({})", ticker, reason);
                skipped.push(SkippedSymbol {
                    ticker: ticker.clone(),
                    reason,
                });
            }
        }
    }

    ScreenSummary {
        result: ranker::rank(candidates, config.top_n),
        skipped,
        scanned: symbols.len(),
    }
}

/// Parse a comma-separated symbol override from configuration.
///
/// Symbols are trimmed and uppercased; empty tokens and duplicates are
/// configuration errors.
pub fn parse_symbols(input: &str) -> Result<Vec<String>, ScreenError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(ScreenError::ConfigInvalid {
                section: "screen".into(),
                key: "symbols".into(),
                reason: "empty token in symbol list".into(),
            });
        }
        let symbol = trimmed.to_uppercase();
        if !seen.insert(symbol.clone()) {
            return Err(ScreenError::ConfigInvalid {
                section: "screen".into(),
                key: "symbols".into(),
                reason: format!("duplicate symbol: {}", symbol),
            });
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}
