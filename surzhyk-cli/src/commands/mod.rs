//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score texts or files for code-switching
    Analyze(analyze::AnalyzeArgs),

    /// Write a commented default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Analyze(analyze::AnalyzeArgs {
            input: vec!["corpus/*.txt".to_string()],
            text: Vec::new(),
            per_line: false,
            alphabet: None,
            config: None,
            format: None,
            output: None,
            parallel: false,
            threads: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Analyze"));
        assert!(debug_str.contains("corpus/*.txt"));
    }
}
