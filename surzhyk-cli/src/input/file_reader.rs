//! Reading input files into batch texts

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::progress::ProgressReporter;

/// Read files into texts for the metric batch
///
/// With `per_line` each non-empty line of each file becomes its own
/// text; otherwise each file is one text. Order follows the resolved
/// file order, then line order.
pub fn read_texts(
    files: &[PathBuf],
    per_line: bool,
    progress: &mut ProgressReporter,
) -> Result<Vec<String>> {
    progress.init_files(files.len() as u64);

    let mut texts = Vec::new();
    for path in files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if per_line {
            texts.extend(
                content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        } else {
            texts.push(content);
        }

        progress.file_completed(&path.display().to_string());
    }
    progress.finish();

    Ok(texts)
}
