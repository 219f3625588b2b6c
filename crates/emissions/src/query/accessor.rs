//! Structural lookups over a loaded dataset.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::config::UnparsableYearPolicy;
use super::range::{YearRange, resolve_year_range};
use crate::dataset::EmissionDataset;
use crate::error::{EmissionsError, Result};

/// A numbered menu entry: 1-based ordinal plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub ordinal: usize,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(ordinal: usize, name: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
        }
    }
}

/// Read-only view answering structural queries about a dataset.
///
/// Every call re-scans the dataset; use [`Catalog`] when ordinals must stay
/// stable across several lookups.
#[derive(Debug, Clone, Copy)]
pub struct DatasetAccessor<'a> {
    dataset: &'a EmissionDataset,
}

impl<'a> DatasetAccessor<'a> {
    pub fn new(dataset: &'a EmissionDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a EmissionDataset {
        self.dataset
    }

    /// One entry per region element, in document order.
    ///
    /// Region names are not deduplicated, so two entries may share a name.
    pub fn list_regions(&self) -> Vec<CatalogEntry> {
        self.dataset
            .regions
            .iter()
            .enumerate()
            .map(|(i, r)| CatalogEntry::new(i + 1, r.name.clone()))
            .collect()
    }

    /// Every distinct source description, numbered in first-seen order.
    pub fn list_distinct_source_names(&self) -> Vec<CatalogEntry> {
        let names: IndexSet<&str> = self
            .dataset
            .regions
            .iter()
            .flat_map(|r| r.sources.iter())
            .map(|s| s.description.as_str())
            .collect();

        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| CatalogEntry::new(i + 1, name))
            .collect()
    }

    /// Name of the region at `ordinal` (1-based).
    pub fn region_name(&self, ordinal: usize) -> Result<&'a str> {
        self.dataset
            .region(ordinal)
            .map(|r| r.name.as_str())
            .ok_or(EmissionsError::RegionNotFound(ordinal))
    }

    /// Description of the distinct source at `ordinal` (1-based).
    pub fn source_name(&self, ordinal: usize) -> Result<&'a str> {
        let mut seen = IndexSet::new();
        for source in self.dataset.regions.iter().flat_map(|r| r.sources.iter()) {
            seen.insert(source.description.as_str());
            if seen.len() == ordinal {
                return Ok(source.description.as_str());
            }
        }
        Err(EmissionsError::SourceNotFound(ordinal))
    }

    /// Distinct parseable years present in the dataset, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        self.dataset
            .records()
            .filter_map(|r| r.parsed_year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Global minimum and maximum year.
    pub fn year_range(&self, policy: UnparsableYearPolicy) -> Result<YearRange> {
        resolve_year_range(self.dataset, policy)
    }
}

/// Region and source menus computed once per session.
///
/// Ordinals handed out by a catalog stay valid for its whole lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    regions: Vec<CatalogEntry>,
    sources: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn build(dataset: &EmissionDataset) -> Self {
        let accessor = DatasetAccessor::new(dataset);
        Self {
            regions: accessor.list_regions(),
            sources: accessor.list_distinct_source_names(),
        }
    }

    pub fn regions(&self) -> &[CatalogEntry] {
        &self.regions
    }

    pub fn sources(&self) -> &[CatalogEntry] {
        &self.sources
    }

    pub fn region(&self, ordinal: usize) -> Result<&CatalogEntry> {
        lookup(&self.regions, ordinal).ok_or(EmissionsError::RegionNotFound(ordinal))
    }

    pub fn source(&self, ordinal: usize) -> Result<&CatalogEntry> {
        lookup(&self.sources, ordinal).ok_or(EmissionsError::SourceNotFound(ordinal))
    }
}

fn lookup(entries: &[CatalogEntry], ordinal: usize) -> Option<&CatalogEntry> {
    ordinal.checked_sub(1).and_then(|i| entries.get(i))
}
