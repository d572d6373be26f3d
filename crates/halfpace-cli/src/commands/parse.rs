//! Parse command implementation.

use crate::analysis::Analyzer;
use crate::cli::ParseArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    let extraction = analyzer.extract(&args.text);
    println!("{}", formatter.format_extraction(&extraction)?);
    Ok(())
}
