//! Core Extractor implementation

use crate::parser::{parse_age, parse_five_k_time, parse_sex};
use crate::types::Extraction;
use halfpace_domain::{MissingField, MissingFields, ParsedRecord};
use tracing::{debug, info};

/// The Extractor turns free text into a [`ParsedRecord`]
///
/// Stateless: the rule tables are compiled once per process and shared, so an
/// `Extractor` is free to create and copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    /// Create a new Extractor
    pub fn new() -> Self {
        Self
    }

    /// Parse all three fields and compute what is missing
    pub fn extract(&self, text: &str) -> Extraction {
        debug!("Extracting from text of length {}", text.len());

        let record = ParsedRecord {
            sex: parse_sex(text),
            age: parse_age(text),
            five_k_time: parse_five_k_time(text),
        };
        let missing = compute_missing(&record);

        if missing.is_empty() {
            info!("Extraction complete: all fields found");
        } else {
            info!("Extraction incomplete, missing: {}", missing);
        }

        Extraction { record, missing }
    }

    /// Same as [`extract`](Self::extract), split into its two parts
    pub fn parse(&self, text: &str) -> (ParsedRecord, MissingFields) {
        self.extract(text).into_parts()
    }
}

/// Compute which fields of `record` are absent, in the order sex, age, 5 km time
pub fn compute_missing(record: &ParsedRecord) -> MissingFields {
    let mut missing = Vec::with_capacity(MissingField::ALL.len());
    if !record.sex.is_known() {
        missing.push(MissingField::Sex);
    }
    if record.age.is_none() {
        missing.push(MissingField::Age);
    }
    if record.five_k_time.is_none() {
        missing.push(MissingField::FiveKTime);
    }
    MissingFields::from_fields(missing)
}

/// Parse free text with the default extractor
pub fn parse(text: &str) -> (ParsedRecord, MissingFields) {
    Extractor::new().parse(text)
}
