//! Markdown output formatter

use super::{display_ratio, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use surzhyk_engine::CorpusReport;

/// Markdown formatter - report as a table
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn write_report(&self, report: &CorpusReport, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "# Code-switching report")?;
        writeln!(writer)?;
        writeln!(writer, "| Level | Total | Broken | Ratio |")?;
        writeln!(writer, "|-------|-------|--------|-------|")?;
        writeln!(
            writer,
            "| texts | {} | {} | {} |",
            report.total_num_texts,
            report.num_broken_texts,
            display_ratio(report.codeswitch_texts_ratio)
        )?;
        writeln!(
            writer,
            "| sentences | {} | {} | {} |",
            report.total_num_sentences,
            report.num_broken_sentences,
            display_ratio(report.codeswitch_sentences_ratio)
        )?;
        writeln!(
            writer,
            "| tokens | {} | {} | {} |",
            report.total_num_tokens,
            report.num_broken_tokens,
            display_ratio(report.codeswitch_words_ratio)
        )?;

        if !report.broken_tokens.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "## Broken tokens")?;
            writeln!(writer)?;
            for record in &report.broken_tokens {
                writeln!(
                    writer,
                    "- `{}` (text {}, bytes {}..{})",
                    record.token.text, record.text_index, record.token.start, record.token.end
                )?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_table_shape() {
        let report = CorpusReport::from_reports(Vec::new());
        let mut out = Vec::new();
        MarkdownFormatter.write_report(&report, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("| Level | Total | Broken | Ratio |"));
        assert!(rendered.contains("| tokens | 0 | 0 | n/a |"));
    }
}
