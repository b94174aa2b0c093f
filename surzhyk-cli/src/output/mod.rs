//! Output formatting module

use anyhow::Result;
use std::io::Write;
use surzhyk_engine::CorpusReport;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Render the corpus report to the writer
    fn write_report(&self, report: &CorpusReport, writer: &mut dyn Write) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Display a ratio, rendering the no-data sentinel as "n/a"
pub(crate) fn display_ratio(ratio: f64) -> String {
    if ratio < 0.0 {
        "n/a".to_string()
    } else {
        format!("{ratio:.4}")
    }
}
