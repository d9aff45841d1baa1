//! Simple Moving Average over the trailing window of a series.

use crate::domain::price_bar::PriceBar;

/// Arithmetic mean of the last `window` closes ending at the final bar.
///
/// `None` when the window is zero or longer than the series.
pub fn latest_sma(bars: &[PriceBar], window: usize) -> Option<f64> {
    if window == 0 || bars.len() < window {
        return None;
    }

    let tail = &bars[bars.len() - window..];
    let sum: f64 = tail.iter().map(|b| b.close).sum();
    Some(sum / window as f64)
}
