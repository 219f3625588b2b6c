//! Export of report tables to delimited text and JSON.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{EmissionsError, Result};
use crate::query::ReportTable;

/// File formats a report can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(EmissionsError::Config(format!(
                "Unknown export format: {}. Use csv, tsv, or json.",
                s
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write `table` to `writer` in the given format.
///
/// Delimited output has a header row (`category` then one column per year)
/// and one row per category.
pub fn write_table<W: Write>(table: &ReportTable, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_delimited(table, b',', writer),
        ExportFormat::Tsv => write_delimited(table, b'\t', writer),
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, table)?;
            Ok(())
        }
    }
}

/// Write `table` to a file, creating parent directories as needed.
pub fn export_to_path(table: &ReportTable, format: ExportFormat, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| EmissionsError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_table(table, format, &mut writer)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

fn write_delimited<W: Write>(table: &ReportTable, delimiter: u8, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut header = vec!["category"];
    header.extend(table.years());
    csv_writer.write_record(&header)?;

    for (label, series) in &table.rows {
        let mut record = vec![label.as_str()];
        record.extend(series.values());
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
