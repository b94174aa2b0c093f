//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use surzhyk_core::Alphabet;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Metric configuration
    #[serde(default)]
    pub metric: MetricConfig,

    /// Built-in detector toggles
    #[serde(default)]
    pub detectors: DetectorsConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Metric-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct MetricConfig {
    /// Named alphabet preset: "ukrainian" or "latin"
    pub alphabet: String,

    /// Explicit native character set; overrides `alphabet` when set
    pub chars: Option<String>,

    /// Whitelisted foreign words excused by the wordlist detector
    #[serde(default)]
    pub wordlist: Vec<String>,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            alphabet: "ukrainian".to_string(),
            chars: None,
            wordlist: Vec::new(),
        }
    }
}

/// Built-in detector toggles
#[derive(Debug, Deserialize, Serialize)]
pub struct DetectorsConfig {
    /// Excuse http/https URLs
    pub urls: bool,

    /// Excuse quoted runs
    pub quotes: bool,
}

impl Default for DetectorsConfig {
    fn default() -> Self {
        Self {
            urls: true,
            quotes: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PerformanceConfig {
    /// Always run the batch in parallel
    pub parallel: bool,

    /// Worker thread count (absent = rayon default)
    pub threads: Option<usize>,

    /// Batch size at which adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            parallel_threshold: 32,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format: "text", "json", or "markdown"
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the configured native alphabet
    pub fn alphabet(&self) -> Result<Alphabet> {
        if let Some(chars) = &self.metric.chars {
            if chars.is_empty() {
                return Err(CliError::ConfigError("empty 'chars' alphabet".to_string()).into());
            }
            return Ok(Alphabet::from_chars(chars.chars()));
        }

        match self.metric.alphabet.as_str() {
            "ukrainian" => Ok(Alphabet::ukrainian()),
            "latin" => Ok(Alphabet::latin()),
            other => {
                Err(CliError::ConfigError(format!("unknown alphabet '{other}'")).into())
            }
        }
    }

    /// Default configuration rendered as commented TOML
    pub fn template() -> String {
        r#"# surzhyk configuration

[metric]
# Named alphabet preset: "ukrainian" or "latin"
alphabet = "ukrainian"
# Explicit native character set; overrides the preset when set
# chars = "абв..."
# Foreign words excused by the wordlist detector
wordlist = []

[detectors]
# Excuse http/https URLs
urls = true
# Excuse quoted runs
quotes = true

[performance]
# Always run the batch in parallel
parallel = false
# Worker thread count (commented out = automatic)
# threads = 4
# Batch size at which adaptive mode goes parallel
parallel_threshold = 32

[output]
# Default output format: "text", "json", or "markdown"
default_format = "text"
"#
        .to_string()
    }
}
