//! Series normalization: raw source-shaped history into a canonical
//! [`SymbolSeries`].
//!
//! The upstream data source shapes multi-symbol results unevenly: a cell may
//! arrive as a bare number or as a single-element container. All of that
//! variability is absorbed here, behind one scalar-extraction contract; the
//! indicator engine only ever sees ordered [`PriceBar`]s.

use crate::domain::price_bar::PriceBar;
use chrono::NaiveDate;

/// A raw cell value as delivered by the data source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Scalar(f64),
    Nested(Vec<f64>),
}

impl RawValue {
    /// Extract a scalar, unwrapping exactly one level of singleton nesting.
    ///
    /// Empty or multi-element containers and non-finite numbers yield `None`.
    pub fn as_scalar(&self) -> Option<f64> {
        let v = match self {
            RawValue::Scalar(v) => *v,
            RawValue::Nested(vs) => match vs.as_slice() {
                [v] => *v,
                _ => return None,
            },
        };
        v.is_finite().then_some(v)
    }
}

/// One raw record, fields still in source shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBar {
    pub date: NaiveDate,
    pub close: RawValue,
    pub volume: RawValue,
}

/// Per-symbol history as fetched: possibly empty, possibly unordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawHistory {
    pub bars: Vec<RawBar>,
}

/// Why a symbol was excluded from the screen.
///
/// Skips are expected, frequent outcomes (delisted, illiquid, newly listed
/// symbols), not failures; the run continues without the symbol.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("no data")]
    NoData,

    #[error("only {bars} bars, minimum {minimum} required")]
    InsufficientBars { bars: usize, minimum: usize },

    #[error("malformed {field} value")]
    MalformedValue { field: &'static str },

    #[error("duplicate date {0}")]
    DuplicateDate(NaiveDate),
}

/// Canonical per-symbol series.
///
/// Invariant: strictly increasing dates and at least the minimum bar count
/// passed to [`normalize`]; only `normalize` constructs one.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSeries {
    ticker: String,
    bars: Vec<PriceBar>,
}

impl SymbolSeries {
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Final bar of the series. Never empty by construction.
    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }
}

/// Coerce a raw history into a canonical series.
///
/// Every cell must extract to a scalar; bars are sorted by date and duplicate
/// dates rejected; the result must have at least `min_bars` bars. Pure
/// transform, no side effects.
pub fn normalize(
    ticker: &str,
    raw: &RawHistory,
    min_bars: usize,
) -> Result<SymbolSeries, SkipReason> {
    if raw.bars.is_empty() {
        return Err(SkipReason::NoData);
    }

    let mut bars = Vec::with_capacity(raw.bars.len());
    for rb in &raw.bars {
        let close = rb
            .close
            .as_scalar()
            .ok_or(SkipReason::MalformedValue { field: "close" })?;
        let volume = rb
            .volume
            .as_scalar()
            .ok_or(SkipReason::MalformedValue { field: "volume" })?;
        bars.push(PriceBar {
            date: rb.date,
            close,
            volume,
        });
    }

    bars.sort_by_key(|b| b.date);
    for pair in bars.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(SkipReason::DuplicateDate(pair[1].date));
        }
    }

    if bars.len() < min_bars {
        return Err(SkipReason::InsufficientBars {
            bars: bars.len(),
            minimum: min_bars,
        });
    }

    Ok(SymbolSeries {
        ticker: ticker.to_string(),
        bars,
    })
}
