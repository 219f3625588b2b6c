//! Main entry point: load a dataset and open a reporting session.

use std::path::Path;

use log::debug;

use crate::dataset::EmissionDataset;
use crate::error::Result;
use crate::input::{DatasetMetadata, Loader, LoaderConfig};
use crate::query::{
    Catalog, DatasetAccessor, Dimension, QueryConfig, ReportTable, YearRange, run_report,
};
use crate::selection::Selection;

/// Year range a new session starts with, clipped to the dataset.
pub const DEFAULT_YEARS: (i32, i32) = (2000, 2005);

/// Configuration for loading and querying.
#[derive(Debug, Clone)]
pub struct EmissionsConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Extraction and formatting configuration.
    pub query: QueryConfig,
    /// Preferred initial year range (None = whole dataset).
    pub default_years: Option<YearRange>,
}

impl Default for EmissionsConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            query: QueryConfig::default(),
            default_years: YearRange::new(DEFAULT_YEARS.0, DEFAULT_YEARS.1).ok(),
        }
    }
}

/// Loads datasets and opens sessions over them.
pub struct Emissions {
    config: EmissionsConfig,
    loader: Loader,
}

impl Emissions {
    /// Create an instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(EmissionsConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: EmissionsConfig) -> Self {
        let loader = Loader::with_config(config.loader.clone());
        Self { config, loader }
    }

    /// Set the query configuration.
    pub fn with_query(mut self, query: QueryConfig) -> Self {
        self.config.query = query;
        self
    }

    /// Set the preferred initial year range.
    pub fn with_default_years(mut self, years: Option<YearRange>) -> Self {
        self.config.default_years = years;
        self
    }

    pub fn config(&self) -> &EmissionsConfig {
        &self.config
    }

    /// Load an XML file and open a session on it.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Session> {
        let (dataset, metadata) = self.loader.load_file(path)?;
        self.session(dataset, Some(metadata))
    }

    /// Parse XML text and open a session on it.
    pub fn open_str(&self, xml: &str) -> Result<Session> {
        let dataset = self.loader.load_str(xml)?;
        self.session(dataset, None)
    }

    /// Open a session on an already-loaded dataset.
    pub fn session(&self, dataset: EmissionDataset, metadata: Option<DatasetMetadata>) -> Result<Session> {
        Session::new(dataset, metadata, &self.config)
    }
}

impl Default for Emissions {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded dataset with its menus and year bounds computed once.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: EmissionDataset,
    metadata: Option<DatasetMetadata>,
    catalog: Catalog,
    year_range: YearRange,
    query: QueryConfig,
    default_years: Option<YearRange>,
}

impl Session {
    fn new(dataset: EmissionDataset, metadata: Option<DatasetMetadata>, config: &EmissionsConfig) -> Result<Self> {
        let year_range = DatasetAccessor::new(&dataset).year_range(config.query.unparsable_years)?;
        let catalog = Catalog::build(&dataset);

        debug!(
            "session opened: {} regions, {} distinct sources, years {}",
            catalog.regions().len(),
            catalog.sources().len(),
            year_range
        );

        Ok(Self {
            dataset,
            metadata,
            catalog,
            year_range,
            query: config.query.clone(),
            default_years: config.default_years,
        })
    }

    pub fn dataset(&self) -> &EmissionDataset {
        &self.dataset
    }

    /// Metadata of the source file, when loaded from disk.
    pub fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    pub fn accessor(&self) -> DatasetAccessor<'_> {
        DatasetAccessor::new(&self.dataset)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Minimum and maximum year in the dataset.
    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn query_config(&self) -> &QueryConfig {
        &self.query
    }

    /// Selection a new interactive session starts with.
    pub fn initial_selection(&self) -> Selection {
        Selection::seeded(self.default_years, self.year_range)
    }

    /// Report on one dimension over `years`.
    pub fn report(&self, dimension: &Dimension, years: YearRange) -> Result<ReportTable> {
        years.check_within(&self.year_range)?;
        run_report(&self.dataset, dimension, years, &self.query)
    }

    /// Sources of the region with catalog ordinal `region`.
    pub fn report_by_region(&self, region: usize, years: YearRange) -> Result<ReportTable> {
        self.catalog.region(region)?;
        self.report(&Dimension::region(region), years)
    }

    /// Regions reporting the source with catalog ordinal `source`.
    pub fn report_by_source(&self, source: usize, years: YearRange) -> Result<ReportTable> {
        let description = self.catalog.source(source)?.name.clone();
        self.report(&Dimension::source(description), years)
    }

    /// Region report for the current selection.
    pub fn region_report(&self, selection: &Selection) -> Result<ReportTable> {
        self.report(&selection.region_dimension()?, selection.years())
    }

    /// Source report for the current selection.
    pub fn source_report(&self, selection: &Selection) -> Result<ReportTable> {
        self.report(&selection.source_dimension(&self.catalog)?, selection.years())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmissionsError;

    const XML: &str = r#"<ghg>
        <region name="Ontario">
            <source description="Energy">
                <emissions year="1990">1</emissions>
                <emissions year="2003">2.5</emissions>
            </source>
        </region>
        <region name="Quebec">
            <source description="Waste">
                <emissions year="2010">3</emissions>
            </source>
        </region>
    </ghg>"#;

    #[test]
    fn test_session_bounds_and_default_selection() {
        let session = Emissions::new().open_str(XML).unwrap();
        assert_eq!(session.year_range(), YearRange::new(1990, 2010).unwrap());
        assert_eq!(session.initial_selection().years(), YearRange::new(2000, 2005).unwrap());
    }

    #[test]
    fn test_report_by_source() {
        let session = Emissions::new().open_str(XML).unwrap();
        let table = session
            .report_by_source(2, YearRange::new(2009, 2010).unwrap())
            .unwrap();
        assert_eq!(table.subject, "Waste");
        assert_eq!(table.rows["Quebec"].get("2010"), Some("3.000"));
        assert_eq!(table.rows["Ontario"].get("2010"), Some("-"));
    }

    #[test]
    fn test_report_rejects_out_of_range_years() {
        let session = Emissions::new().open_str(XML).unwrap();
        let err = session
            .report_by_region(1, YearRange::new(1980, 2000).unwrap())
            .unwrap_err();
        assert!(matches!(err, EmissionsError::YearOutOfRange { year: 1980, .. }));
    }

    #[test]
    fn test_selection_reports() {
        let session = Emissions::new().with_default_years(None).open_str(XML).unwrap();
        let mut selection = session.initial_selection();
        selection.select_region(1, session.catalog()).unwrap();
        let table = session.region_report(&selection).unwrap();
        assert_eq!(table.years().len(), 21);
        assert_eq!(table.rows["Energy"].get("2003"), Some("2.500"));
    }

    #[test]
    fn test_dataset_without_years() {
        let err = Emissions::new().open_str("<ghg/>").unwrap_err();
        assert!(matches!(err, EmissionsError::EmptyData(_)));
    }
}
