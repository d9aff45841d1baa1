//! Data acquisition port trait.
//!
//! The provider side of the screen: history arrives in source shape
//! ([`RawHistory`]) and is normalized by the domain, so all format
//! variability stays behind this seam.

use crate::domain::error::ScreenError;
use crate::domain::series::RawHistory;
use chrono::NaiveDate;

pub trait DataPort {
    /// Fetch a symbol's trailing history within the window, in source shape.
    fn fetch_history(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RawHistory, ScreenError>;

    /// Symbols this source can serve, sorted.
    fn list_symbols(&self) -> Result<Vec<String>, ScreenError>;

    /// First date, last date, and bar count for a symbol, if any data exists.
    fn data_range(&self, symbol: &str)
        -> Result<Option<(NaiveDate, NaiveDate, usize)>, ScreenError>;
}
