//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to actual file paths
///
/// Literal paths pass through when they name an existing file;
/// everything else is treated as a glob pattern. The result is
/// sorted and de-duplicated so batch order is stable across runs.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let literal = PathBuf::from(pattern);
        if literal.is_file() {
            files.push(literal);
            continue;
        }

        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path = path_result
                .with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
