//! surzhyk CLI library
//!
//! Command-line front end for the surzhyk code-switching metric:
//! argument parsing, file input resolution, TOML configuration, and
//! report formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
