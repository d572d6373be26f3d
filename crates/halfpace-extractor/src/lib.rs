//! Halfpace Extractor
//!
//! Pulls sex, age and a 5 km time out of free Polish text.
//!
//! # Overview
//!
//! Each field has an ordered table of patterns; the first pattern that matches
//! decides the value. A field that cannot be found is reported as missing rather
//! than raised as an error, so partial input always produces a result.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → (ParsedRecord, MissingFields) → Predictor
//! ```
//!
//! Pattern matching is deliberately shallow: a house number may be read as an
//! age or a time, and a worded minutes value is combined with the first seconds
//! word anywhere in the text.
//!
//! # Example Usage
//!
//! ```
//! use halfpace_extractor::parse;
//! use halfpace_domain::{RaceTime, Sex};
//!
//! let (record, missing) =
//!     parse("Jestem mężczyzną, mam 37 lat, mój czas na 5 km to 23 minuty.");
//!
//! assert_eq!(record.sex, Sex::Male);
//! assert_eq!(record.age, Some(37));
//! assert_eq!(record.five_k_time, Some(RaceTime::from_minutes_seconds(23, 0)));
//! assert!(missing.is_empty());
//! ```

#![warn(missing_docs)]

mod extractor;
mod parser;
mod rules;
mod types;

#[cfg(test)]
mod tests;

pub use extractor::{compute_missing, parse, Extractor};
pub use parser::{parse_age, parse_five_k_time, parse_sex};
pub use types::Extraction;
