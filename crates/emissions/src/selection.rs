//! User selection state for an interactive session.

use serde::{Deserialize, Serialize};

use crate::error::{EmissionsError, Result};
use crate::query::{Catalog, CatalogEntry, Dimension, YearRange};

/// Years, region and source chosen by the user.
///
/// Every setter validates against the dataset bounds or the session
/// [`Catalog`], so a `Selection` never holds an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    years: YearRange,
    region: Option<usize>,
    source: Option<usize>,
}

impl Selection {
    pub fn new(years: YearRange) -> Self {
        Self {
            years,
            region: None,
            source: None,
        }
    }

    /// Initial selection: `preferred` clipped to `bounds`, or all of
    /// `bounds` when there is no preference or no overlap.
    pub fn seeded(preferred: Option<YearRange>, bounds: YearRange) -> Self {
        let years = preferred
            .and_then(|p| p.clamp_to(&bounds))
            .unwrap_or(bounds);
        Self::new(years)
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn region(&self) -> Option<usize> {
        self.region
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Change the year range; both ends must lie within `bounds`.
    pub fn set_years(&mut self, years: YearRange, bounds: &YearRange) -> Result<()> {
        years.check_within(bounds)?;
        self.years = years;
        Ok(())
    }

    pub fn select_region<'c>(&mut self, ordinal: usize, catalog: &'c Catalog) -> Result<&'c CatalogEntry> {
        let entry = catalog.region(ordinal)?;
        self.region = Some(ordinal);
        Ok(entry)
    }

    pub fn select_source<'c>(&mut self, ordinal: usize, catalog: &'c Catalog) -> Result<&'c CatalogEntry> {
        let entry = catalog.source(ordinal)?;
        self.source = Some(ordinal);
        Ok(entry)
    }

    /// Dimension for a report on the selected region.
    pub fn region_dimension(&self) -> Result<Dimension> {
        self.region
            .map(Dimension::region)
            .ok_or(EmissionsError::NotSelected("region"))
    }

    /// Dimension for a report on the selected source.
    pub fn source_dimension(&self, catalog: &Catalog) -> Result<Dimension> {
        let ordinal = self.source.ok_or(EmissionsError::NotSelected("source"))?;
        Ok(Dimension::source(catalog.source(ordinal)?.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{EmissionDataset, Region, Source};

    fn bounds() -> YearRange {
        YearRange::new(1990, 2019).unwrap()
    }

    #[test]
    fn test_seeded_clamps_preference() {
        let s = Selection::seeded(Some(YearRange::new(2000, 2005).unwrap()), bounds());
        assert_eq!(s.years(), YearRange::new(2000, 2005).unwrap());

        let s = Selection::seeded(Some(YearRange::new(1980, 1995).unwrap()), bounds());
        assert_eq!(s.years(), YearRange::new(1990, 1995).unwrap());

        let s = Selection::seeded(Some(YearRange::new(2050, 2060).unwrap()), bounds());
        assert_eq!(s.years(), bounds());

        let s = Selection::seeded(None, bounds());
        assert_eq!(s.years(), bounds());
    }

    #[test]
    fn test_set_years_validates() {
        let mut s = Selection::new(bounds());
        assert!(s.set_years(YearRange::new(1995, 2000).unwrap(), &bounds()).is_ok());
        assert!(s.set_years(YearRange::new(1985, 2000).unwrap(), &bounds()).is_err());
        assert_eq!(s.years(), YearRange::new(1995, 2000).unwrap());
    }

    #[test]
    fn test_dimensions() {
        let dataset = EmissionDataset::new(vec![
            Region::new("R1").with_source(Source::new("A")),
            Region::new("R2").with_source(Source::new("B")),
        ]);
        let catalog = Catalog::build(&dataset);
        let mut s = Selection::new(bounds());

        assert!(matches!(s.region_dimension(), Err(EmissionsError::NotSelected("region"))));
        assert!(s.select_region(3, &catalog).is_err());
        assert_eq!(s.select_region(2, &catalog).unwrap().name, "R2");
        assert_eq!(s.region_dimension().unwrap(), Dimension::region(2));

        assert!(s.source_dimension(&catalog).is_err());
        s.select_source(2, &catalog).unwrap();
        assert_eq!(s.source_dimension(&catalog).unwrap(), Dimension::source("B"));
    }
}
