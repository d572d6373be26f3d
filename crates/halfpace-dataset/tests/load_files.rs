//! Loading datasets from files on disk

use halfpace_dataset::{DatasetConfig, DatasetError, HistoricalDataset};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_concatenates_files_in_order() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "2023.csv", "Miejsce;Czas\n1;01:05:12\n2;01:06:00\n");
    let second = write(&dir, "2024.csv", "Miejsce;Czas\n1;01:04:59\n");

    let config = DatasetConfig {
        paths: vec![first, second],
        ..DatasetConfig::default()
    };
    let dataset = HistoricalDataset::load(&config).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.head(3)[2][1], "01:04:59");
}

#[test]
fn test_load_with_comma_delimiter() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "results.csv", "Place,Time\n1,01:05:12\n");

    let config = DatasetConfig {
        paths: vec![path],
        delimiter: ',',
        sample_rows: 5,
    };
    let dataset = HistoricalDataset::load(&config).unwrap();
    assert_eq!(dataset.columns(), &["Place", "Time"]);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = DatasetConfig {
        paths: vec![dir.path().join("nope.csv")],
        ..DatasetConfig::default()
    };
    let result = HistoricalDataset::load(&config);
    assert!(matches!(result, Err(DatasetError::Open { .. })));
}

#[test]
fn test_no_sources_is_an_error() {
    let config = DatasetConfig {
        paths: vec![],
        ..DatasetConfig::default()
    };
    assert!(matches!(
        HistoricalDataset::load(&config),
        Err(DatasetError::NoSources)
    ));
}
