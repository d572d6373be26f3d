//! Read-only table of past race results

use crate::config::DatasetConfig;
use crate::error::{DatasetError, Result};
use std::io::Read;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};
use tracing::{info, warn};

/// Past race results, concatenated from one or more CSV files
///
/// Loaded once and never modified. Columns are the union of every file's
/// header row in order of first appearance; a row from a file lacking some
/// column has an empty value there. Nothing in this crate aggregates the data;
/// it is only handed on as a text sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalDataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl HistoricalDataset {
    /// Load every file named in `config`
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        if config.paths.is_empty() {
            return Err(DatasetError::NoSources);
        }

        let mut dataset = Self::default();
        for path in &config.paths {
            dataset.append_path(path, config.delimiter_byte())?;
        }

        info!(
            "Loaded {} rows with {} columns from {} file(s)",
            dataset.len(),
            dataset.columns.len(),
            config.paths.len()
        );
        Ok(dataset)
    }

    /// Build a dataset from a single in-memory source
    pub fn from_reader<R: Read>(name: &str, reader: R, delimiter: u8) -> Result<Self> {
        let mut dataset = Self::default();
        dataset.append_reader(name, reader, delimiter)?;
        Ok(dataset)
    }

    fn append_path(&mut self, path: &Path, delimiter: u8) -> Result<()> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)
            .map_err(|source| DatasetError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        self.append(&path.display().to_string(), reader)
    }

    fn append_reader<R: Read>(&mut self, name: &str, reader: R, delimiter: u8) -> Result<()> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);
        self.append(name, reader)
    }

    fn append<R: Read>(&mut self, name: &str, mut reader: csv::Reader<R>) -> Result<()> {
        let headers = reader.headers()?.clone();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(DatasetError::MissingHeader(name.to_string()));
        }

        // Position of each source column in the merged column list.
        let positions: Vec<usize> = headers.iter().map(|h| self.column_index(h)).collect();
        for row in &mut self.rows {
            row.resize(self.columns.len(), String::new());
        }

        let mut skipped = 0usize;
        for (line, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping row {} of {}: {}", line + 1, name, e);
                    skipped += 1;
                    continue;
                }
            };

            let mut row = vec![String::new(); self.columns.len()];
            for (value, &position) in record.iter().zip(&positions) {
                row[position] = value.to_string();
            }
            self.rows.push(row);
        }

        if skipped > 0 {
            warn!("Skipped {} unreadable row(s) in {}", skipped, name);
        }
        Ok(())
    }

    fn column_index(&mut self, header: &str) -> usize {
        let header = header.trim();
        match self.columns.iter().position(|c| c == header) {
            Some(index) => index,
            None => {
                self.columns.push(header.to_string());
                self.columns.len() - 1
            }
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The first `n` rows (fewer if the dataset is shorter)
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// The first `n` rows rendered as an aligned text table with a header line
    pub fn sample(&self, n: usize) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().map(String::as_str));
        for row in self.head(n) {
            builder.push_record(row.iter().map(String::as_str));
        }

        let mut table = builder.build();
        table.with(Style::blank());
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_2023: &str = "Miejsce;Płeć;Rocznik;Czas\n1;M;1990;01:05:12\n2;K;1995;01:12:40\n";

    #[test]
    fn test_from_reader() {
        let dataset = HistoricalDataset::from_reader("2023", CSV_2023.as_bytes(), b';').unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), &["Miejsce", "Płeć", "Rocznik", "Czas"]);
        assert_eq!(dataset.head(1)[0][3], "01:05:12");
    }

    #[test]
    fn test_head_is_clamped() {
        let dataset = HistoricalDataset::from_reader("2023", CSV_2023.as_bytes(), b';').unwrap();
        assert_eq!(dataset.head(100).len(), 2);
        assert!(dataset.head(0).is_empty());
    }

    #[test]
    fn test_sample_contains_header_and_rows() {
        let dataset = HistoricalDataset::from_reader("2023", CSV_2023.as_bytes(), b';').unwrap();
        let sample = dataset.sample(1);
        assert!(sample.contains("Rocznik"));
        assert!(sample.contains("01:05:12"));
        assert!(!sample.contains("01:12:40"));
    }

    #[test]
    fn test_merging_sources_unions_columns() {
        let mut dataset = HistoricalDataset::from_reader("2023", CSV_2023.as_bytes(), b';').unwrap();
        dataset
            .append_reader("2024", "Miejsce;Czas;Kraj\n1;01:04:59;KEN\n".as_bytes(), b';')
            .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.columns(), &["Miejsce", "Płeć", "Rocznik", "Czas", "Kraj"]);
        assert_eq!(dataset.head(3)[0][4], "");
        assert_eq!(dataset.head(3)[2], vec!["1", "", "", "01:04:59", "KEN"]);
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let result = HistoricalDataset::from_reader("empty", "".as_bytes(), b';');
        assert!(matches!(result, Err(DatasetError::MissingHeader(_))));
    }

    #[test]
    fn test_empty_dataset_sample() {
        assert_eq!(HistoricalDataset::default().sample(10), "");
    }
}
