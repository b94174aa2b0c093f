//! Plain text output formatter

use super::{display_ratio, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use surzhyk_engine::CorpusReport;

/// Text formatter - human-readable summary
#[derive(Debug, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_report(&self, report: &CorpusReport, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "Code-switching report")?;
        writeln!(
            writer,
            "  texts:     {} total, {} broken, ratio {}",
            report.total_num_texts,
            report.num_broken_texts,
            display_ratio(report.codeswitch_texts_ratio)
        )?;
        writeln!(
            writer,
            "  sentences: {} total, {} broken, ratio {}",
            report.total_num_sentences,
            report.num_broken_sentences,
            display_ratio(report.codeswitch_sentences_ratio)
        )?;
        writeln!(
            writer,
            "  tokens:    {} total, {} broken, ratio {}",
            report.total_num_tokens,
            report.num_broken_tokens,
            display_ratio(report.codeswitch_words_ratio)
        )?;

        if !report.broken_tokens.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Broken tokens:")?;
            for record in &report.broken_tokens {
                writeln!(
                    writer,
                    "  [text {}] {} ({}..{})",
                    record.text_index, record.token.text, record.token.start, record.token.end
                )?;
            }
        }

        if !report.diagnostics.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Diagnostics:")?;
            for diagnostic in &report.diagnostics {
                writeln!(writer, "  {diagnostic}")?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
