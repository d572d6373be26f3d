//! Configuration for the dataset loader

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the historical results live and how they are read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// CSV files, concatenated in this order
    #[serde(default = "default_paths")]
    pub paths: Vec<PathBuf>,

    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Number of rows passed to the comparison step
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
}

impl DatasetConfig {
    /// The delimiter as a byte, falling back to `;` for non-ASCII characters
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b';'
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            delimiter: default_delimiter(),
            sample_rows: default_sample_rows(),
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("halfmarathon_wroclaw_2023__final.csv"),
        PathBuf::from("halfmarathon_wroclaw_2024__final.csv"),
    ]
}

fn default_delimiter() -> char {
    ';'
}

fn default_sample_rows() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatasetConfig::default();
        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.delimiter_byte(), b';');
        assert_eq!(config.sample_rows, 10);
    }

    #[test]
    fn test_non_ascii_delimiter_falls_back() {
        let config = DatasetConfig {
            delimiter: '¦',
            ..DatasetConfig::default()
        };
        assert_eq!(config.delimiter_byte(), b';');
    }
}
