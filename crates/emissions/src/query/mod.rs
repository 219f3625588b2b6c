//! Query pipeline: extraction, gap filling and report assembly.
//!
//! ```text
//!   EmissionDataset ──► extract ──► Series::normalize ──► ReportTable
//!        (borrowed)      (sparse)      (one per year)
//! ```

mod accessor;
mod config;
mod extract;
mod normalize;
mod range;
mod report;

pub use accessor::{Catalog, CatalogEntry, DatasetAccessor};
pub use config::{MISSING_VALUE, QueryConfig, UnparsableYearPolicy};
pub use extract::{Dimension, by_region, by_source, extract};
pub use normalize::Series;
pub use range::{YearRange, resolve_year_range};
pub use report::{ReportKind, ReportTable};

use crate::dataset::EmissionDataset;
use crate::error::Result;

/// Run the full pipeline for one dimension and year range.
pub fn run_report(
    dataset: &EmissionDataset,
    dimension: &Dimension,
    range: YearRange,
    config: &QueryConfig,
) -> Result<ReportTable> {
    let (kind, subject) = match dimension {
        Dimension::Region { ordinal } => {
            let name = DatasetAccessor::new(dataset).region_name(*ordinal)?;
            (ReportKind::ByRegion, name.to_string())
        }
        Dimension::Source { description } => (ReportKind::BySource, description.clone()),
    };

    let rows = extract(dataset, dimension, range, config)?
        .into_iter()
        .map(|(label, raw)| (label, raw.normalize(range, &config.placeholder)))
        .collect();

    Ok(ReportTable::build(kind, subject, range, rows))
}
