//! Configuration validation.
//!
//! Validates all screen config fields before a run starts, with field-level
//! error messages.

use crate::domain::error::ScreenError;
use crate::ports::config_port::ConfigPort;

pub fn validate_screen_config(config: &dyn ConfigPort) -> Result<(), ScreenError> {
    validate_positive_int(config, "screen", "min_history")?;
    validate_positive_int(config, "screen", "rsi_period")?;
    validate_positive_int(config, "screen", "sma_fast")?;
    validate_positive_int(config, "screen", "sma_slow")?;
    validate_positive_int(config, "screen", "top_n")?;
    validate_positive_int(config, "data", "lookback_days")?;
    validate_price_ceiling(config)?;
    validate_tolerance(config)?;
    validate_rsi_thresholds(config)?;
    validate_sma_ordering(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> ScreenError {
    ScreenError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_positive_int(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), ScreenError> {
    let value = config.get_int(section, key, 1);
    if value < 1 {
        return Err(invalid(section, key, "must be a positive integer"));
    }
    Ok(())
}

fn validate_price_ceiling(config: &dyn ConfigPort) -> Result<(), ScreenError> {
    let value = config.get_double("screen", "price_ceiling", 50.0);
    if value <= 0.0 {
        return Err(invalid("screen", "price_ceiling", "must be positive"));
    }
    Ok(())
}

fn validate_tolerance(config: &dyn ConfigPort) -> Result<(), ScreenError> {
    let value = config.get_double("screen", "tolerance", 0.01);
    if !(0.0..1.0).contains(&value) {
        return Err(invalid(
            "screen",
            "tolerance",
            "must be a fraction between 0 and 1",
        ));
    }
    Ok(())
}

fn validate_rsi_thresholds(config: &dyn ConfigPort) -> Result<(), ScreenError> {
    let bull = config.get_double("screen", "bull_rsi_min", 40.0);
    if !(0.0..=100.0).contains(&bull) {
        return Err(invalid("screen", "bull_rsi_min", "must be within 0..100"));
    }
    let bear = config.get_double("screen", "bear_rsi_max", 60.0);
    if !(0.0..=100.0).contains(&bear) {
        return Err(invalid("screen", "bear_rsi_max", "must be within 0..100"));
    }
    Ok(())
}

fn validate_sma_ordering(config: &dyn ConfigPort) -> Result<(), ScreenError> {
    let fast = config.get_int("screen", "sma_fast", 20);
    let slow = config.get_int("screen", "sma_slow", 50);
    if fast >= slow {
        return Err(invalid(
            "screen",
            "sma_fast",
            "fast SMA window must be shorter than the slow window",
        ));
    }
    Ok(())
}
