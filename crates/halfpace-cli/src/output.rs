//! Output formatting for the CLI.

use crate::analysis::{Analysis, ComparisonOutcome, Prediction, SkipReason};
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use halfpace_domain::{MissingFields, ParsedRecord, Sex};
use halfpace_extractor::Extraction;
use halfpace_predictor::{HALF_MARATHON_KM, MARATHON_KM};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a full analysis.
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Quiet => Ok(self.quiet_prediction(analysis.prediction.as_ref())),
            OutputFormat::Table => {
                let mut sections = vec![self.record_table(&analysis.record, analysis.prediction.as_ref())];
                if !analysis.missing.is_empty() {
                    sections.push(self.missing_fields(&analysis.missing));
                }
                if analysis.prediction.is_none() {
                    sections.push(self.info(
                        "No 5 km time recognized, so no prediction. Try e.g. '23 minuty' or '25:30'.",
                    ));
                }
                if let Some(comparison) = self.comparison(&analysis.comparison) {
                    sections.push(comparison);
                }
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format an extraction without prediction.
    pub fn format_extraction(&self, extraction: &Extraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
            OutputFormat::Quiet => Ok(extraction
                .missing
                .iter()
                .map(|f| f.id())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut output = self.record_table(&extraction.record, None);
                if extraction.is_complete() {
                    output.push_str("\n\n");
                    output.push_str(&self.success("All fields found"));
                } else {
                    output.push_str("\n\n");
                    output.push_str(&self.missing_fields(&extraction.missing));
                }
                Ok(output)
            }
        }
    }

    /// Format a single prediction.
    pub fn format_prediction(&self, prediction: &Prediction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(prediction)?),
            OutputFormat::Quiet => Ok(prediction.formatted.clone()),
            OutputFormat::Table => Ok(format!(
                "5 km: {}\n{}",
                prediction.five_k,
                self.success(&format!(
                    "Predicted {}: {}",
                    distance_label(prediction.distance_km),
                    prediction.formatted
                ))
            )),
        }
    }

    fn record_table(&self, record: &ParsedRecord, prediction: Option<&Prediction>) -> String {
        let dash = || "-".to_string();

        let sex = match record.sex {
            Sex::Male => "mężczyzna".to_string(),
            Sex::Female => "kobieta".to_string(),
            Sex::Unknown => dash(),
        };
        let age = record.age.map(|a| a.to_string()).unwrap_or_else(dash);
        let five_k = record.five_k_time.map(|t| t.to_string()).unwrap_or_else(dash);

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Sex".to_string(), sex]);
        builder.push_record(["Age".to_string(), age]);
        builder.push_record(["5 km time".to_string(), five_k]);
        if let Some(prediction) = prediction {
            builder.push_record([
                format!("Predicted {}", distance_label(prediction.distance_km)),
                prediction.formatted.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::last()).with(Alignment::right()));
        table.to_string()
    }

    fn missing_fields(&self, missing: &MissingFields) -> String {
        let mut lines = vec![self.warning(&format!("Missing data: {}", missing))];
        for field in missing {
            lines.push(format!("  {} - e.g. {}", field.label(), field.example()));
        }
        lines.join("\n")
    }

    fn comparison(&self, outcome: &ComparisonOutcome) -> Option<String> {
        match outcome {
            ComparisonOutcome::Summary { text } => Some(format!(
                "{}\n{}",
                self.colorize("Comparison with Wrocław results", "cyan"),
                text
            )),
            ComparisonOutcome::Failed { error } => {
                Some(self.error(&format!("Comparison failed ({}): {}", error.kind, error.message)))
            }
            ComparisonOutcome::Skipped {
                reason: SkipReason::IncompleteInput,
            } => Some(self.info("Comparison skipped: fill in the missing data first.")),
            ComparisonOutcome::Skipped {
                reason: SkipReason::Disabled,
            } => None,
        }
    }

    fn quiet_prediction(&self, prediction: Option<&Prediction>) -> String {
        prediction.map(|p| p.formatted.clone()).unwrap_or_default()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn distance_label(km: f64) -> String {
    if km == HALF_MARATHON_KM {
        "half marathon".to_string()
    } else if km == MARATHON_KM {
        "marathon".to_string()
    } else {
        format!("{} km", km)
    }
}
