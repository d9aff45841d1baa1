//! Plaintext report adapter.
//!
//! Renders the fixed-format screen report and delivers it to stdout or a
//! file. The format is what the downstream gateway expects, down to the
//! "None found." placeholders:
//!
//! ```text
//! STOCKS REPORT (YYYY-MM-DD)
//!
//! --- CALLS (Dip Buy) ---
//! TICKER $12.34 (RSI: 56)
//!
//! --- PUTS (Reject) ---
//! None found.
//! ```

use crate::domain::classifier::Candidate;
use crate::domain::error::ScreenError;
use crate::domain::ranker::ScreenResult;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub enum ReportTarget {
    Stdout,
    File(PathBuf),
}

pub struct TextReportAdapter {
    target: ReportTarget,
}

impl TextReportAdapter {
    pub fn stdout() -> Self {
        Self {
            target: ReportTarget::Stdout,
        }
    }

    pub fn to_file(path: PathBuf) -> Self {
        Self {
            target: ReportTarget::File(path),
        }
    }
}

impl ReportPort for TextReportAdapter {
    fn deliver(&self, result: &ScreenResult, as_of: NaiveDate) -> Result<(), ScreenError> {
        let body = render(result, as_of);
        match &self.target {
            ReportTarget::Stdout => {
                print!("{}", body);
                Ok(())
            }
            ReportTarget::File(path) => Ok(fs::write(path, body)?),
        }
    }
}

/// Render the report body. Prices print at two decimals, RSI rounds to a
/// whole number.
pub fn render(result: &ScreenResult, as_of: NaiveDate) -> String {
    let mut out = format!("STOCKS REPORT ({})\n\n", as_of.format("%Y-%m-%d"));
    render_section(&mut out, "CALLS (Dip Buy)", &result.bulls);
    out.push('\n');
    render_section(&mut out, "PUTS (Reject)", &result.bears);
    out
}

fn render_section(out: &mut String, title: &str, candidates: &[Candidate]) {
    out.push_str(&format!("--- {} ---\n", title));
    if candidates.is_empty() {
        out.push_str("None found.\n");
        return;
    }
    for c in candidates {
        out.push_str(&format!("{} ${:.2} (RSI: {:.0})\n", c.ticker, c.price, c.rsi));
    }
}
