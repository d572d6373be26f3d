//! Halfpace Domain Layer
//!
//! Value types shared by every other crate in the workspace. Nothing in here
//! performs I/O; the only external dependency is `serde` so that records can be
//! rendered as JSON by the front end.
//!
//! ## Key Concepts
//!
//! - **Sex**: Male / Female / Unknown, as declared in free text
//! - **RaceTime**: a non-negative elapsed time in whole seconds
//! - **ParsedRecord**: what the extractor managed to find in one submission
//! - **MissingFields**: which of the three fields could not be found, in a fixed order
//!
//! ## Architecture
//!
//! ```text
//! text → extractor → (ParsedRecord, MissingFields) → predictor → RaceTime
//! ```
//!
//! The language-model collaborator is described by the [`traits::LlmProvider`]
//! trait; implementations live in `halfpace-llm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod race_time;
pub mod record;
pub mod sex;
pub mod traits;

// Re-exports for convenience
pub use race_time::RaceTime;
pub use record::{MissingField, MissingFields, ParsedRecord};
pub use sex::Sex;
