//! Candidate ranking: partition by setup, order by volume, truncate to top-N.

use crate::domain::classifier::{Candidate, Setup};
use std::cmp::Ordering;

/// Terminal output of one screening run: at most `top_n` candidates a side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenResult {
    pub bulls: Vec<Candidate>,
    pub bears: Vec<Candidate>,
}

impl ScreenResult {
    pub fn is_empty(&self) -> bool {
        self.bulls.is_empty() && self.bears.is_empty()
    }
}

/// Partition candidates by setup, sort each side by volume descending, and
/// keep the first `top_n`.
///
/// The sort is stable: equal-volume ties keep their input order, so output
/// is deterministic for a fixed input order.
pub fn rank(candidates: Vec<Candidate>, top_n: usize) -> ScreenResult {
    let (mut bulls, mut bears): (Vec<Candidate>, Vec<Candidate>) = candidates
        .into_iter()
        .partition(|c| c.setup == Setup::Bull);

    sort_by_volume_desc(&mut bulls);
    sort_by_volume_desc(&mut bears);
    bulls.truncate(top_n);
    bears.truncate(top_n);

    ScreenResult { bulls, bears }
}

fn sort_by_volume_desc(side: &mut [Candidate]) {
    side.sort_by(|a, b| b.volume.partial_cmp(&a.volume).unwrap_or(Ordering::Equal));
}
