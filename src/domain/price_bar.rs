//! Daily price bar representation.

use chrono::NaiveDate;

/// One trading day of close price and volume for a single symbol.
/// Immutable once constructed; a [`crate::domain::series::SymbolSeries`]
/// holds these in strictly increasing date order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}
