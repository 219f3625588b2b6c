//! Integration tests for the emissions library.

use std::io::Write;
use tempfile::NamedTempFile;

use emissions::{
    CatalogEntry, Emissions, EmissionsError, ExportFormat, QueryConfig, ReportKind,
    UnparsableYearPolicy, YearRange, write_table,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const CANADA: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ghg-canada>
  <region name="Canada">
    <source description="Energy">
      <emissions year="1990">468.4</emissions>
      <emissions year="2000">589.1</emissions>
      <emissions year="2001">578.55</emissions>
    </source>
    <source description="Agriculture">
      <emissions year="1990">52.0</emissions>
      <emissions year="2000">x</emissions>
    </source>
  </region>
  <region name="Ontario">
    <source description="Energy">
      <emissions year="2000">10.5</emissions>
      <emissions year="2002">11.0</emissions>
    </source>
    <source description="Waste">
      <emissions year="2019">8.25</emissions>
    </source>
  </region>
  <region name="Nunavut">
    <source description="Waste">
      <emissions year="N/A">0.1</emissions>
    </source>
  </region>
</ghg-canada>"#;

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_open_file_metadata() {
    let file = create_test_file(CANADA);

    let session = Emissions::new().open(file.path()).expect("Open failed");
    let metadata = session.metadata().expect("File sessions carry metadata");

    assert_eq!(metadata.region_count, 3);
    assert_eq!(metadata.source_count, 5);
    assert_eq!(metadata.record_count, 9);
    assert_eq!(metadata.size_bytes, CANADA.len() as u64);
    assert!(metadata.hash.starts_with("sha256:"));
}

#[test]
fn test_open_missing_file() {
    let err = Emissions::new()
        .open("/definitely/not/here.xml")
        .unwrap_err();
    assert!(matches!(err, EmissionsError::Io { .. }));
}

#[test]
fn test_open_malformed_file() {
    let file = create_test_file("<ghg><region name=\"A\"></ghg>");
    let err = Emissions::new().open(file.path()).unwrap_err();
    assert!(matches!(err, EmissionsError::Xml(_)));
}

// =============================================================================
// Menus and range
// =============================================================================

#[test]
fn test_catalog_menus() {
    let session = Emissions::new().open_str(CANADA).unwrap();

    let regions: Vec<&str> = session
        .catalog()
        .regions()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(regions, vec!["Canada", "Ontario", "Nunavut"]);

    assert_eq!(
        session.catalog().sources(),
        &[
            CatalogEntry::new(1, "Energy"),
            CatalogEntry::new(2, "Agriculture"),
            CatalogEntry::new(3, "Waste"),
        ]
    );
}

#[test]
fn test_year_range_skips_unparsable_by_default() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    assert_eq!(session.year_range(), YearRange::new(1990, 2019).unwrap());
}

#[test]
fn test_year_range_zero_fallback() {
    let session = Emissions::new()
        .with_query(QueryConfig::new().with_unparsable_years(UnparsableYearPolicy::TreatAsZero))
        .open_str(CANADA)
        .unwrap();
    assert_eq!(session.year_range(), YearRange::new(0, 2019).unwrap());
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_region_report() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    let table = session
        .report_by_region(2, YearRange::new(2000, 2003).unwrap())
        .unwrap();

    assert_eq!(table.kind, ReportKind::ByRegion);
    assert_eq!(table.title(), "Emissions in Ontario (Megatonnes)");
    assert_eq!(table.years(), vec!["2000", "2001", "2002", "2003"]);
    assert_eq!(
        table.rows["Energy"].values().collect::<Vec<_>>(),
        vec!["10.500", "-", "11.000", "-"]
    );
    assert_eq!(
        table.rows["Waste"].values().collect::<Vec<_>>(),
        vec!["-", "-", "-", "-"]
    );
}

#[test]
fn test_source_report_lists_every_region() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    let table = session
        .report_by_source(1, YearRange::new(2000, 2001).unwrap())
        .unwrap();

    assert_eq!(table.title(), "Emissions from Energy (Megatonnes)");
    assert_eq!(
        table.rows.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Canada", "Ontario", "Nunavut"]
    );
    assert_eq!(
        table.rows["Canada"].values().collect::<Vec<_>>(),
        vec!["589.100", "578.550"]
    );
    assert_eq!(table.rows["Nunavut"].values().collect::<Vec<_>>(), vec!["-", "-"]);
    assert_eq!(table.max_category_label_width(), "Nunavut".len());
}

#[test]
fn test_non_numeric_value_is_placeholder() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    let table = session
        .report_by_region(1, YearRange::single(2000))
        .unwrap();
    assert_eq!(table.rows["Agriculture"].get("2000"), Some("-"));
    assert_eq!(table.rows["Energy"].get("2000"), Some("589.100"));
}

#[test]
fn test_invalid_ordinals() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    let years = YearRange::single(2000);

    assert!(matches!(
        session.report_by_region(4, years),
        Err(EmissionsError::RegionNotFound(4))
    ));
    assert!(matches!(
        session.report_by_source(0, years),
        Err(EmissionsError::SourceNotFound(0))
    ));
}

#[test]
fn test_interactive_flow() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    let mut selection = session.initial_selection();
    assert_eq!(selection.years(), YearRange::new(2000, 2005).unwrap());

    selection
        .set_years(YearRange::new(2001, 2002).unwrap(), &session.year_range())
        .unwrap();
    selection.select_source(3, session.catalog()).unwrap();

    let table = session.source_report(&selection).unwrap();
    assert_eq!(table.subject, "Waste");
    assert_eq!(table.years(), vec!["2001", "2002"]);
}

#[test]
fn test_export_csv_round_trip_shape() {
    let session = Emissions::new().open_str(CANADA).unwrap();
    let table = session
        .report_by_region(2, YearRange::new(2000, 2002).unwrap())
        .unwrap();

    let mut out = Vec::new();
    write_table(&table, ExportFormat::Csv, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "category,2000,2001,2002");
    assert_eq!(lines[1], "Energy,10.500,-,11.000");
    assert_eq!(lines[2], "Waste,-,-,-");
}
