//! In-memory representation of the emissions document.

use serde::{Deserialize, Serialize};

/// One yearly observation for a source.
///
/// Both fields keep the document text as-is; numeric interpretation happens
/// at query time so that unparsable entries can be handled per policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// Raw `year` attribute.
    pub year: String,
    /// Raw element text, `None` when the element is empty.
    pub value: Option<String>,
}

impl EmissionRecord {
    /// Create a record from raw year and value text.
    pub fn new(year: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            year: year.into(),
            value: value.map(Into::into),
        }
    }

    /// The year as an integer, if the attribute is a valid base-10 integer.
    pub fn parsed_year(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }
}

/// A category of emitting activity inside a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub description: String,
    pub records: Vec<EmissionRecord>,
}

impl Source {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            records: Vec::new(),
        }
    }

    pub fn with_record(mut self, year: impl Into<String>, value: impl Into<String>) -> Self {
        self.records.push(EmissionRecord::new(year, Some(value)));
        self
    }
}

/// A geographic unit owning an ordered list of sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub sources: Vec<Source>,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }
}

/// The complete loaded dataset. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionDataset {
    /// Regions in document order.
    pub regions: Vec<Region>,
}

impl EmissionDataset {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Get a region by its 1-based ordinal.
    pub fn region(&self, ordinal: usize) -> Option<&Region> {
        ordinal.checked_sub(1).and_then(|i| self.regions.get(i))
    }

    /// Iterate every record in document order.
    pub fn records(&self) -> impl Iterator<Item = &EmissionRecord> {
        self.regions
            .iter()
            .flat_map(|r| r.sources.iter())
            .flat_map(|s| s.records.iter())
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn source_count(&self) -> usize {
        self.regions.iter().map(|r| r.sources.len()).sum()
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_by_ordinal() {
        let dataset = EmissionDataset::new(vec![Region::new("A"), Region::new("B")]);
        assert_eq!(dataset.region(1).map(|r| r.name.as_str()), Some("A"));
        assert_eq!(dataset.region(2).map(|r| r.name.as_str()), Some("B"));
        assert!(dataset.region(0).is_none());
        assert!(dataset.region(3).is_none());
    }

    #[test]
    fn test_parsed_year() {
        assert_eq!(EmissionRecord::new("2005", None::<String>).parsed_year(), Some(2005));
        assert_eq!(EmissionRecord::new(" 1990 ", None::<String>).parsed_year(), Some(1990));
        assert_eq!(EmissionRecord::new("N/A", None::<String>).parsed_year(), None);
    }

    #[test]
    fn test_counts() {
        let dataset = EmissionDataset::new(vec![
            Region::new("A").with_source(Source::new("X").with_record("2000", "1.0")),
            Region::new("B")
                .with_source(Source::new("X").with_record("2000", "2.0").with_record("2001", "3.0"))
                .with_source(Source::new("Y")),
        ]);
        assert_eq!(dataset.region_count(), 2);
        assert_eq!(dataset.source_count(), 3);
        assert_eq!(dataset.record_count(), 3);
    }
}
