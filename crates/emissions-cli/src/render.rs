//! Console rendering of report tables and menus.

use std::io::{self, Write};

use colored::Colorize;
use emissions::{CatalogEntry, MISSING_VALUE, ReportTable};

/// Width of each year column.
pub const YEAR_COLUMN_WIDTH: usize = 10;

/// Write `table` as fixed-width text.
///
/// The label column is right-aligned to the widest category label (or the
/// column heading, whichever is wider).
pub fn write_report<W: Write>(table: &ReportTable, out: &mut W) -> io::Result<()> {
    let title = table.title();
    writeln!(out)?;
    writeln!(out, "{}", title.cyan().bold())?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;

    let heading = table.kind.category_heading();
    let label_width = table.max_category_label_width().max(heading.len());

    let mut header = format!("{:>label_width$}", heading);
    for year in table.years() {
        header.push_str(&format!("{:>YEAR_COLUMN_WIDTH$}", year));
    }
    writeln!(out, "{}", header.yellow().bold())?;
    writeln!(out)?;

    for (label, series) in &table.rows {
        write!(out, "{:>label_width$}", label)?;
        for value in series.values() {
            let cell = format!("{:>YEAR_COLUMN_WIDTH$}", value);
            if value == MISSING_VALUE {
                write!(out, "{}", cell.dimmed())?;
            } else {
                write!(out, "{}", cell)?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out)
}

/// Write a numbered menu, one `  N. name` line per entry.
pub fn write_entries<W: Write>(entries: &[CatalogEntry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{:>3}. {}", entry.ordinal, entry.name)?;
    }
    Ok(())
}
