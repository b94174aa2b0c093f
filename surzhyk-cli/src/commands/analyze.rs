//! Analyze command implementation

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use surzhyk_core::SpanDetector;
use surzhyk_engine::{
    CodeSwitchProcessor, CorpusReport, ExecutionMode, QuoteDetector, UrlDetector,
    WordlistDetector,
};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input;
use crate::output::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Inline texts to score
    #[arg(short, long, value_name = "STRING")]
    pub text: Vec<String>,

    /// Treat each non-empty line of each file as its own text
    #[arg(long)]
    pub per_line: bool,

    /// Native alphabet preset (overrides the config file)
    #[arg(short, long, value_enum)]
    pub alphabet: Option<AlphabetChoice>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Force parallel scoring even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker thread count
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Named alphabet presets
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AlphabetChoice {
    /// Ukrainian Cyrillic
    Ukrainian,
    /// Basic Latin a-z
    Latin,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full report as JSON
    Json,
    /// Markdown table
    Markdown,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting code-switching analysis");
        log::debug!("Arguments: {self:?}");

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let texts = self.gather_texts()?;
        if texts.is_empty() {
            return Err(CliError::NoInput.into());
        }
        log::info!("Scoring {} texts", texts.len());

        let processor = self.build_processor(&config)?;
        let report = processor.calculate(&texts);

        self.write_report(&config, &report)
    }

    fn gather_texts(&self) -> Result<Vec<String>> {
        let mut texts = Vec::new();

        if !self.input.is_empty() {
            let files = input::resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            texts = input::read_texts(&files, self.per_line, &mut progress)?;
        }

        texts.extend(self.text.iter().cloned());
        Ok(texts)
    }

    fn build_processor(&self, config: &CliConfig) -> Result<CodeSwitchProcessor> {
        let alphabet = match self.alphabet {
            Some(AlphabetChoice::Ukrainian) => surzhyk_core::Alphabet::ukrainian(),
            Some(AlphabetChoice::Latin) => surzhyk_core::Alphabet::latin(),
            None => config.alphabet()?,
        };

        let mut detectors: Vec<Arc<dyn SpanDetector>> = Vec::new();
        if config.detectors.urls {
            detectors.push(Arc::new(UrlDetector::new()));
        }
        if config.detectors.quotes {
            detectors.push(Arc::new(QuoteDetector::new()));
        }
        if !config.metric.wordlist.is_empty() {
            detectors.push(Arc::new(WordlistDetector::new(&config.metric.wordlist)));
        }

        let execution_mode = if self.parallel || config.performance.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        CodeSwitchProcessor::builder()
            .alphabet(alphabet)
            .detectors(detectors)
            .execution_mode(execution_mode)
            .threads(self.threads.or(config.performance.threads))
            .parallel_threshold(config.performance.parallel_threshold)
            .build()
            .context("Failed to build the metric processor")
    }

    fn write_report(&self, config: &CliConfig, report: &CorpusReport) -> Result<()> {
        let format = self.format.unwrap_or(match config.output.default_format.as_str() {
            "json" => OutputFormat::Json,
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        });

        let formatter: Box<dyn ReportFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
        };

        match &self.output {
            Some(path) => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut writer = std::io::BufWriter::new(file);
                formatter.write_report(report, &mut writer)
            }
            None => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                formatter.write_report(report, &mut lock)
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
