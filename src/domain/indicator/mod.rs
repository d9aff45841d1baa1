//! Indicator engine: point-in-time SMA/RSI snapshot at the end of a series.
//!
//! Leaf numerical component: no I/O, deterministic for a given series.

pub mod rsi;
pub mod sma;

use crate::domain::series::SymbolSeries;

/// Window sizes for the snapshot computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorParams {
    pub sma_fast: usize,
    pub sma_slow: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_fast: 20,
            sma_slow: 50,
            rsi_period: 14,
        }
    }
}

/// Indicator state for one symbol, taken at the final bar of its series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub volume: f64,
    pub sma_fast: f64,
    pub sma_slow: f64,
    pub rsi: f64,
}

/// Compute the snapshot for a series.
///
/// `None` only when the series is shorter than a window; the screen runner
/// sizes the [`SymbolSeries`] minimum to cover the slow SMA and the RSI
/// warm-up, so a normalized series always yields `Some`.
pub fn snapshot(series: &SymbolSeries, params: &IndicatorParams) -> Option<IndicatorSnapshot> {
    let bars = series.bars();
    let last = series.last();

    Some(IndicatorSnapshot {
        price: last.close,
        volume: last.volume,
        sma_fast: sma::latest_sma(bars, params.sma_fast)?,
        sma_slow: sma::latest_sma(bars, params.sma_slow)?,
        rsi: rsi::latest_rsi(bars, params.rsi_period)?,
    })
}
