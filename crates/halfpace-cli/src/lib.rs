//! Halfpace CLI library.
//!
//! Configuration, command execution and output formatting for the `halfpace`
//! binary. [`analysis::Analyzer`] ties the extractor, the predictor, the
//! historical dataset and the comparison provider together for one submission.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use analysis::{Analysis, Analyzer};
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
