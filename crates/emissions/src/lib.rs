//! Emissions: query and reporting engine for greenhouse-gas emissions datasets.
//!
//! A dataset is an XML document of regions, each holding emission sources,
//! each holding yearly values. The library turns a selection (one region or
//! one source, plus a year range) into a gap-filled category x year table.
//!
//! # Example
//!
//! ```no_run
//! use emissions::{Emissions, YearRange};
//!
//! let session = Emissions::new().open("ghg-canada.xml").unwrap();
//! let years = YearRange::new(2000, 2005).unwrap();
//! let table = session.report_by_region(1, years).unwrap();
//!
//! println!("{}", table.title());
//! for (category, series) in &table.rows {
//!     println!("{category}: {:?}", series.values().collect::<Vec<_>>());
//! }
//! ```

pub mod dataset;
pub mod error;
pub mod export;
pub mod input;
pub mod query;
pub mod selection;

mod emissions;

pub use crate::emissions::{DEFAULT_YEARS, Emissions, EmissionsConfig, Session};
pub use dataset::{EmissionDataset, EmissionRecord, Region, Source};
pub use error::{EmissionsError, Result};
pub use export::{ExportFormat, export_to_path, write_table};
pub use input::{DatasetMetadata, Loader, LoaderConfig};
pub use query::{
    Catalog, CatalogEntry, DatasetAccessor, Dimension, MISSING_VALUE, QueryConfig, ReportKind,
    ReportTable, Series, UnparsableYearPolicy, YearRange,
};
pub use selection::Selection;
