//! RSI (Relative Strength Index), Wilder's method.
//!
//! Average gain/loss are seeded with the simple mean of the first n price
//! changes, then Wilder-smoothed over every remaining bar:
//! avg = (prev_avg * (n-1) + current) / n.
//! The recursion runs over the whole available history; a trailing n-bar
//! mean of gains/losses gives a materially different number and is not
//! equivalent.
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0: RSI = 100

use crate::domain::price_bar::PriceBar;

/// RSI at the final bar of the series.
///
/// `None` when the period is zero or the series has fewer than `period + 1`
/// bars (n changes need n+1 closes).
pub fn latest_rsi(bars: &[PriceBar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: start + chrono::Duration::days(i as i64),
                close,
                volume: 1000.0,
            })
            .collect()
    }

    #[test]
    fn rsi_too_short_series() {
        let bars = make_bars(&[100.0; 14]);
        assert_eq!(latest_rsi(&bars, 14), None);
    }

    #[test]
    fn rsi_zero_period() {
        let bars = make_bars(&[100.0, 101.0]);
        assert_eq!(latest_rsi(&bars, 0), None);
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let rsi = latest_rsi(&bars, 14).unwrap();
        assert!((rsi - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let bars = make_bars(&closes);
        let rsi = latest_rsi(&bars, 14).unwrap();
        assert!((rsi - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_flat_series_is_100_by_convention() {
        // No net change means avg_gain = avg_loss = 0; the degenerate case
        // is defined as 100, not 50.
        let bars = make_bars(&[49.0; 200]);
        let rsi = latest_rsi(&bars, 14).unwrap();
        assert_eq!(rsi, 100.0);
    }

    #[test]
    fn rsi_known_wilder_calculation() {
        // Period 2 over 10, 12, 11, 13:
        //   changes: +2, -1, +2
        //   seed:    avg_gain = 1.0, avg_loss = 0.5
        //   step:    avg_gain = (1.0*1 + 2)/2 = 1.5
        //            avg_loss = (0.5*1 + 0)/2 = 0.25
        //   RS = 6, RSI = 100 - 100/7
        let bars = make_bars(&[10.0, 12.0, 11.0, 13.0]);
        let rsi = latest_rsi(&bars, 2).unwrap();
        let expected = 100.0 - 100.0 / 7.0;
        assert!((rsi - expected).abs() < 1e-12);
    }

    #[test]
    fn rsi_whole_history_differs_from_trailing_window() {
        // A large early gain still influences the smoothed average long
        // after it leaves any trailing window.
        let mut closes = vec![100.0; 5];
        closes.push(150.0);
        closes.extend(std::iter::repeat(150.0).take(30));
        closes.push(149.0);
        let bars = make_bars(&closes);

        let rsi = latest_rsi(&bars, 2).unwrap();
        // Trailing-window gains would be zero here, forcing RSI to 0; the
        // decayed early gain keeps it strictly above.
        assert!(rsi > 0.0);
        assert!(rsi < 100.0);
    }

    proptest! {
        #[test]
        fn rsi_stays_in_bounds(
            closes in proptest::collection::vec(1.0f64..1000.0, 16..120)
        ) {
            let bars = make_bars(&closes);
            let rsi = latest_rsi(&bars, 14).unwrap();
            prop_assert!((0.0..=100.0).contains(&rsi));
        }
    }
}
