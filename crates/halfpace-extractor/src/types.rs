//! Result type for one extraction

use halfpace_domain::{MissingFields, ParsedRecord};
use serde::{Deserialize, Serialize};

/// Result of parsing one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Fields that were found
    pub record: ParsedRecord,

    /// Fields that were not found, in reporting order
    pub missing: MissingFields,
}

impl Extraction {
    /// Whether every required field was found
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Split into the record and the missing set
    pub fn into_parts(self) -> (ParsedRecord, MissingFields) {
        (self.record, self.missing)
    }
}
