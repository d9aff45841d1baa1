//! Report delivery port trait.

use crate::domain::error::ScreenError;
use crate::domain::ranker::ScreenResult;
use chrono::NaiveDate;

/// Port for delivering a finished screen result to its destination.
pub trait ReportPort {
    fn deliver(&self, result: &ScreenResult, as_of: NaiveDate) -> Result<(), ScreenError>;
}
