//! Analyze command implementation.

use crate::analysis::{AnalyzeOptions, Analyzer};
use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::Read;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    analyzer: &Analyzer,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_text(&args)?;
    let options = AnalyzeOptions {
        compare: !args.no_llm,
        sample_rows: args
            .sample_rows
            .unwrap_or_else(|| analyzer.default_sample_rows()),
    };

    let analysis = analyzer.analyze(&text, options).await;
    println!("{}", formatter.format_analysis(&analysis)?);

    Ok(())
}

fn read_text(args: &AnalyzeArgs) -> Result<String> {
    let text = match (&args.text, args.stdin) {
        (Some(_), true) => {
            return Err(CliError::InvalidInput(
                "Pass the description either as an argument or with --stdin, not both".into(),
            ))
        }
        (Some(text), false) => text.clone(),
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        (None, false) => {
            return Err(CliError::InvalidInput(
                "No description given (pass TEXT or --stdin)".into(),
            ))
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Description is empty".into()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: Option<&str>, stdin: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            text: text.map(String::from),
            stdin,
            no_llm: true,
            sample_rows: None,
        }
    }

    #[test]
    fn test_text_argument() {
        assert_eq!(read_text(&args(Some("23:15"), false)).unwrap(), "23:15");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            read_text(&args(Some("   "), false)),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_input_rejected() {
        assert!(read_text(&args(None, false)).is_err());
        assert!(read_text(&args(Some("x"), true)).is_err());
    }
}
