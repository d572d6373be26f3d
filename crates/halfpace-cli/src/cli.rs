//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Halfpace - predict your half-marathon time from a free-text description.
#[derive(Debug, Parser)]
#[command(name = "halfpace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HALFPACE_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (predicted time only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract, predict and compare with historical results
    Analyze(AnalyzeArgs),

    /// Show what can be extracted from a text
    Parse(ParseArgs),

    /// Predict a half-marathon time from a 5 km time
    Predict(PredictArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the analyze command.
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Description, e.g. "Jestem mężczyzną, mam 37 lat, 5 km biegam w 23 minuty"
    pub text: Option<String>,

    /// Read the description from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Skip the language-model comparison
    #[arg(long)]
    pub no_llm: bool,

    /// Number of historical rows passed to the comparison
    #[arg(long)]
    pub sample_rows: Option<usize>,
}

/// Arguments for the parse command.
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Text to parse
    pub text: String,
}

/// Arguments for the predict command.
#[derive(Debug, Clone, Parser)]
pub struct PredictArgs {
    /// 5 km time, e.g. "23:15" or "23 min"
    pub time: String,

    /// Target distance: 10k, half or marathon (default: configured model)
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::parse_from(["halfpace"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from(["halfpace", "analyze", "jestem kobietą", "--no-llm"]);
        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.text.as_deref(), Some("jestem kobietą"));
                assert!(args.no_llm);
                assert!(!args.stdin);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli = Cli::parse_from(["halfpace", "predict", "23:15", "--format", "json", "-vv"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_predict_target_distance() {
        let cli = Cli::parse_from(["halfpace", "predict", "23:15", "--to", "marathon"]);
        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.time, "23:15");
                assert_eq!(args.to.as_deref(), Some("marathon"));
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
