//! CLI command implementations.

pub mod info;
pub mod list;
pub mod menu;
pub mod report;

use std::path::Path;

use emissions::{Emissions, QueryConfig, Session, UnparsableYearPolicy, YearRange};
use log::info;

/// Load the dataset at `data` and open a session on it.
pub fn open_session(
    data: &Path,
    policy: UnparsableYearPolicy,
    default_years: Option<YearRange>,
) -> Result<Session, Box<dyn std::error::Error>> {
    if !data.exists() {
        return Err(format!("Dataset not found: {}", data.display()).into());
    }

    let mut emissions = Emissions::new().with_query(QueryConfig::new().with_unparsable_years(policy));
    if let Some(years) = default_years {
        emissions = emissions.with_default_years(Some(years));
    }

    let session = emissions.open(data)?;
    info!("opened {} (years {})", data.display(), session.year_range());
    Ok(session)
}
