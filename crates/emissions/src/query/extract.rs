//! Series extraction along a fixed dimension.

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::config::QueryConfig;
use super::normalize::Series;
use super::range::YearRange;
use crate::dataset::{EmissionDataset, Source};
use crate::error::{EmissionsError, Result};

/// The dimension held fixed by a query.
///
/// Fixing a region yields one row per source in that region; fixing a source
/// yields one row per region in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dimension {
    /// A region, by 1-based ordinal.
    Region { ordinal: usize },
    /// A source, by description.
    Source { description: String },
}

impl Dimension {
    pub fn region(ordinal: usize) -> Self {
        Dimension::Region { ordinal }
    }

    pub fn source(description: impl Into<String>) -> Self {
        Dimension::Source {
            description: description.into(),
        }
    }
}

/// Extract raw (sparse) series for every category along `dimension`.
///
/// Categories appear in order of first encounter. Rows sharing a label are
/// merged; when a year occurs twice for the same label the first value wins.
pub fn extract(
    dataset: &EmissionDataset,
    dimension: &Dimension,
    range: YearRange,
    config: &QueryConfig,
) -> Result<IndexMap<String, Series>> {
    let rows: Vec<(&str, Vec<&Source>)> = match dimension {
        Dimension::Region { ordinal } => {
            let region = dataset
                .region(*ordinal)
                .ok_or(EmissionsError::RegionNotFound(*ordinal))?;
            region
                .sources
                .iter()
                .map(|s| (s.description.as_str(), vec![s]))
                .collect()
        }
        Dimension::Source { description } => dataset
            .regions
            .iter()
            .map(|r| {
                let matching = r
                    .sources
                    .iter()
                    .filter(|s| &s.description == description)
                    .collect();
                (r.name.as_str(), matching)
            })
            .collect(),
    };

    let mut table: IndexMap<String, Series> = IndexMap::with_capacity(rows.len());
    for (label, sources) in rows {
        let series = table.entry(label.to_string()).or_default();
        for record in sources.iter().flat_map(|s| s.records.iter()) {
            let Some(year) = record.parsed_year().filter(|y| range.contains(*y)) else {
                continue;
            };
            let value = config.format_value(record.value.as_deref());
            if !series.insert_first(year, value) {
                warn!("duplicate {} entry for '{}', keeping first value", year, label);
            }
        }
    }

    debug!("extracted {} categories for {:?} over {}", table.len(), dimension, range);
    Ok(table)
}

/// Sources of one region, each with its raw series.
pub fn by_region(
    dataset: &EmissionDataset,
    region_ordinal: usize,
    range: YearRange,
    config: &QueryConfig,
) -> Result<IndexMap<String, Series>> {
    extract(dataset, &Dimension::region(region_ordinal), range, config)
}

/// Every region, each with its raw series for `description`.
pub fn by_source(
    dataset: &EmissionDataset,
    description: &str,
    range: YearRange,
    config: &QueryConfig,
) -> Result<IndexMap<String, Series>> {
    extract(dataset, &Dimension::source(description), range, config)
}
