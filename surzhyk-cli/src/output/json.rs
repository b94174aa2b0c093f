//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use std::io::Write;
use surzhyk_engine::CorpusReport;

/// JSON formatter - emits the full report as pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write_report(&self, report: &CorpusReport, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_has_metric_surface_keys() {
        let report = CorpusReport::from_reports(Vec::new());
        let mut out = Vec::new();
        JsonFormatter.write_report(&report, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("\"codeswitch_sentences_ratio\""));
        assert!(rendered.contains("\"codeswitch_texts_ratio\""));
        assert!(rendered.contains("\"codeswitch_words_ratio\""));
        assert!(rendered.contains("\"total_num_tokens\""));
    }
}
