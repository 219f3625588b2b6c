//! Render-ready report tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::normalize::Series;
use super::range::YearRange;

/// Which dimension the report was built along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Rows are the sources of one region.
    ByRegion,
    /// Rows are the regions reporting one source.
    BySource,
}

impl ReportKind {
    /// Header of the label column.
    pub fn category_heading(&self) -> &'static str {
        match self {
            ReportKind::ByRegion => "Source",
            ReportKind::BySource => "Region",
        }
    }
}

/// Category x year grid handed to renderers and exporters.
///
/// All rows share the same year keys in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub kind: ReportKind,
    /// Region name or source description the report is about.
    pub subject: String,
    pub range: YearRange,
    /// Category label -> normalized series, in order of first encounter.
    pub rows: IndexMap<String, Series>,
}

impl ReportTable {
    /// Assemble a table from already-normalized rows.
    pub fn build(
        kind: ReportKind,
        subject: impl Into<String>,
        range: YearRange,
        rows: IndexMap<String, Series>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            range,
            rows,
        }
    }

    /// Year columns, taken from the first row.
    pub fn years(&self) -> Vec<&str> {
        self.rows
            .values()
            .next()
            .map(|s| s.years().collect())
            .unwrap_or_default()
    }

    /// Width in characters of the longest category label.
    pub fn max_category_label_width(&self) -> usize {
        self.rows
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Report title, e.g. `Emissions in Ontario (Megatonnes)`.
    pub fn title(&self) -> String {
        match self.kind {
            ReportKind::ByRegion => format!("Emissions in {} (Megatonnes)", self.subject),
            ReportKind::BySource => format!("Emissions from {} (Megatonnes)", self.subject),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ReportTable {
        let range = YearRange::new(2000, 2001).unwrap();
        let mut rows = IndexMap::new();
        rows.insert("Energy".to_string(), Series::new().normalize(range, "-"));
        rows.insert("Agriculture".to_string(), Series::new().normalize(range, "-"));
        ReportTable::build(ReportKind::ByRegion, "Ontario", range, rows)
    }

    #[test]
    fn test_years_from_first_row() {
        assert_eq!(table().years(), vec!["2000", "2001"]);
    }

    #[test]
    fn test_max_label_width() {
        assert_eq!(table().max_category_label_width(), "Agriculture".len());
    }

    #[test]
    fn test_empty_table() {
        let t = ReportTable::build(
            ReportKind::BySource,
            "Energy",
            YearRange::single(2000),
            IndexMap::new(),
        );
        assert!(t.years().is_empty());
        assert_eq!(t.max_category_label_width(), 0);
    }

    #[test]
    fn test_titles() {
        assert_eq!(table().title(), "Emissions in Ontario (Megatonnes)");
        let mut t = table();
        t.kind = ReportKind::BySource;
        t.subject = "Energy".to_string();
        assert_eq!(t.title(), "Emissions from Energy (Megatonnes)");
        assert_eq!(t.kind.category_heading(), "Region");
    }
}
