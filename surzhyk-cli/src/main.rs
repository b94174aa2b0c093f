//! surzhyk command-line entry point

use clap::Parser;
use surzhyk_cli::commands::Commands;

/// Code-switching metric for text corpora
#[derive(Debug, Parser)]
#[command(name = "surzhyk", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
