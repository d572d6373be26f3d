//! Halfpace Dataset
//!
//! Historical half-marathon results, loaded from CSV once at start-up and read
//! only afterwards. The dataset is an ordinary value owned by the front end and
//! passed by reference to whoever needs a sample; the extractor and predictor
//! never see it.

#![warn(missing_docs)]

mod config;
mod dataset;
mod error;

pub use config::DatasetConfig;
pub use dataset::HistoricalDataset;
pub use error::{DatasetError, Result};
