//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::analysis::{AnalyzeOptions, Analyzer};
use crate::commands::predict::predict_from_text;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(config: &Config, analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Halfpace REPL - describe yourself and your 5 km time, 'help' for commands")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("halfpace> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplCommand::Help => print_help(),
                    ReplCommand::Parse(text) => {
                        let extraction = analyzer.extract(text);
                        print_result(formatter.format_extraction(&extraction), formatter);
                    }
                    ReplCommand::Predict(time) => {
                        let output = predict_from_text(time, None, analyzer)
                            .and_then(|p| formatter.format_prediction(&p));
                        print_result(output, formatter);
                    }
                    ReplCommand::Analyze(text) => {
                        let options = AnalyzeOptions {
                            compare: true,
                            sample_rows: analyzer.default_sample_rows(),
                        };
                        let analysis = analyzer.analyze(text, options).await;
                        print_result(formatter.format_analysis(&analysis), formatter);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Exit,
    Help,
    Parse(&'a str),
    Predict(&'a str),
    Analyze(&'a str),
}

/// Parse a REPL line. Anything that is not a command is a description.
fn parse_repl_command(line: &str) -> ReplCommand<'_> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" if rest.is_empty() => ReplCommand::Exit,
        "help" | "?" if rest.is_empty() => ReplCommand::Help,
        "parse" if !rest.is_empty() => ReplCommand::Parse(rest),
        "predict" if !rest.is_empty() => ReplCommand::Predict(rest),
        _ => ReplCommand::Analyze(line),
    }
}

fn print_result(output: Result<String>, formatter: &Formatter) {
    match output {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}

/// Print REPL help.
fn print_help() {
    println!("Available commands:");
    println!("  <description>      Analyze a description, e.g. 'Kobieta, 29 lat, 5 km w 24:30'");
    println!("  parse <text>       Show extracted fields only");
    println!("  predict <time>     Predict from a 5 km time, e.g. 'predict 23:15'");
    println!("  help               Show this help message");
    println!("  exit, quit, q      Exit the REPL");
}

/// Get the REPL history file path.
fn get_history_path() -> Result<PathBuf> {
    Ok(Config::dir()?.join("history.txt"))
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        e
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_repl_command("exit"), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?"), ReplCommand::Help);
        assert_eq!(parse_repl_command("predict 23:15"), ReplCommand::Predict("23:15"));
        assert_eq!(
            parse_repl_command("parse jestem kobietą"),
            ReplCommand::Parse("jestem kobietą")
        );
    }

    #[test]
    fn test_everything_else_is_analyzed() {
        let line = "Jestem mężczyzną, mam 37 lat";
        assert_eq!(parse_repl_command(line), ReplCommand::Analyze(line));
        assert_eq!(parse_repl_command("predict"), ReplCommand::Analyze("predict"));
    }
}
