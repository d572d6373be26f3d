//! Sex module - the declared sex of a runner

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared sex of the runner
///
/// `Unknown` is a normal outcome: it means no vocabulary word was found in the
/// text, not that parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male runner
    Male,

    /// Female runner
    Female,

    /// Nothing in the text said either way
    #[default]
    Unknown,
}

impl Sex {
    /// Get the sex as a lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unknown => "unknown",
        }
    }

    /// Whether the sex was resolved from the text
    pub fn is_known(&self) -> bool {
        !matches!(self, Sex::Unknown)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
