//! Metadata about a loaded dataset file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::EmissionDataset;

/// Metadata about the source XML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of region elements.
    pub region_count: usize,
    /// Number of source elements across all regions.
    pub source_count: usize,
    /// Number of emission records across all sources.
    pub record_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl DatasetMetadata {
    /// Create metadata for a file that has just been loaded.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, dataset: &EmissionDataset) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            region_count: dataset.region_count(),
            source_count: dataset.source_count(),
            record_count: dataset.record_count(),
            loaded_at: Utc::now(),
        }
    }
}
