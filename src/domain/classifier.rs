//! Setup classification: dip-buy (bull) and rally-reject (bear) rules.

use crate::domain::indicator::IndicatorSnapshot;
use crate::domain::screen::ScreenConfig;
use std::fmt;

/// Classification outcome for a matching symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    Bull,
    Bear,
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setup::Bull => write!(f, "Bull"),
            Setup::Bear => write!(f, "Bear"),
        }
    }
}

/// A symbol flagged as matching one setup. No mutation after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub ticker: String,
    pub price: f64,
    pub volume: f64,
    pub rsi: f64,
    pub setup: Setup,
}

/// Evaluate both rule sets against a snapshot.
///
/// Symbols above the price ceiling are ineligible and short-circuit before
/// any rule runs. The bull and bear rules are evaluated independently; a
/// snapshot satisfying both emits both candidates. Pure function.
pub fn classify(ticker: &str, snap: &IndicatorSnapshot, config: &ScreenConfig) -> Vec<Candidate> {
    if snap.price > config.price_ceiling {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    let band = snap.sma_fast * config.tolerance;

    // Dip buy: momentum intact, price pulled back to the fast average
    // (within the tolerance band) while still above the slow trend.
    if snap.rsi > config.bull_rsi_min
        && snap.price < snap.sma_fast + band
        && snap.price > snap.sma_slow
    {
        candidates.push(make_candidate(ticker, snap, Setup::Bull));
    }

    // Rally reject: momentum fading, price rallied up to the fast average
    // (within the tolerance band) while still below the slow trend.
    if snap.rsi < config.bear_rsi_max
        && snap.price > snap.sma_fast - band
        && snap.price < snap.sma_slow
    {
        candidates.push(make_candidate(ticker, snap, Setup::Bear));
    }

    candidates
}

fn make_candidate(ticker: &str, snap: &IndicatorSnapshot, setup: Setup) -> Candidate {
    Candidate {
        ticker: ticker.to_string(),
        price: snap.price,
        volume: snap.volume,
        rsi: snap.rsi,
        setup,
    }
}
