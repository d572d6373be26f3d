//! Record module - the result of parsing one submission

use crate::{RaceTime, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields extracted from one piece of free text
///
/// Created fresh per parse call and never mutated afterwards. Absence of a field
/// is represented by `Sex::Unknown` or `None`, never by an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Declared sex
    pub sex: Sex,

    /// Age in years, taken as written (no plausibility bounds)
    pub age: Option<u32>,

    /// Elapsed time over 5 km
    pub five_k_time: Option<RaceTime>,
}

/// A field the extractor is required to find
///
/// Variants are declared in reporting order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    /// The runner's sex
    Sex,

    /// The runner's age
    Age,

    /// The 5 km time
    FiveKTime,
}

impl MissingField {
    /// All fields in reporting order
    pub const ALL: [MissingField; 3] = [MissingField::Sex, MissingField::Age, MissingField::FiveKTime];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            MissingField::Sex => "sex",
            MissingField::Age => "age",
            MissingField::FiveKTime => "five_k_time",
        }
    }

    /// User-facing label in the input language
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::Sex => "płeć",
            MissingField::Age => "wiek",
            MissingField::FiveKTime => "czas na 5 km",
        }
    }

    /// Example of an input the extractor understands
    pub fn example(&self) -> &'static str {
        match self {
            MissingField::Sex => "'jestem kobietą' / 'jestem mężczyzną'",
            MissingField::Age => "'mam 37 lat'",
            MissingField::FiveKTime => "'23 minuty' / '25:30'",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of fields that could not be found, always in reporting order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingFields(Vec<MissingField>);

impl MissingFields {
    /// Build from any collection of fields; duplicates are dropped and the
    /// result is put into reporting order
    pub fn from_fields(fields: impl IntoIterator<Item = MissingField>) -> Self {
        let mut fields: Vec<_> = fields.into_iter().collect();
        fields.sort();
        fields.dedup();
        Self(fields)
    }

    /// Whether every field was found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of missing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the given field is missing
    pub fn contains(&self, field: MissingField) -> bool {
        self.0.contains(&field)
    }

    /// Iterate in reporting order
    pub fn iter(&self) -> impl Iterator<Item = &MissingField> {
        self.0.iter()
    }

    /// The fields as a slice
    pub fn as_slice(&self) -> &[MissingField] {
        &self.0
    }
}

impl fmt::Display for MissingFields {
    /// Comma separated labels, e.g. `płeć, wiek`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(MissingField::label).collect();
        f.write_str(&labels.join(", "))
    }
}

impl<'a> IntoIterator for &'a MissingFields {
    type Item = &'a MissingField;
    type IntoIter = std::slice::Iter<'a, MissingField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
