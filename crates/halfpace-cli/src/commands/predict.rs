//! Predict command implementation.

use crate::analysis::{Analyzer, Prediction};
use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use halfpace_extractor::parse_five_k_time;

/// Execute the predict command.
pub fn execute_predict(args: PredictArgs, analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    let prediction = predict_from_text(&args.time, args.to.as_deref(), analyzer)?;
    println!("{}", formatter.format_prediction(&prediction)?);
    Ok(())
}

/// Read a 5 km time with the extractor's rules and predict from it, over
/// `distance` when given.
pub fn predict_from_text(
    time: &str,
    distance: Option<&str>,
    analyzer: &Analyzer,
) -> Result<Prediction> {
    let five_k = parse_five_k_time(time).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Could not read a time from '{}' (try '23:15' or '23 min')",
            time
        ))
    })?;
    match distance {
        Some(distance) => analyzer.predict_to(five_k, distance),
        None => Ok(analyzer.predict(five_k)),
    }
}
