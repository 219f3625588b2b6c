//! Report command - print or export a single report.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use emissions::{UnparsableYearPolicy, YearRange};

use crate::cli::ReportFormat;
use crate::render;

pub struct ReportArgs {
    pub region: Option<usize>,
    pub source: Option<usize>,
    pub years: Option<YearRange>,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
}

pub fn run(
    data: PathBuf,
    policy: UnparsableYearPolicy,
    args: ReportArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session(&data, policy, None)?;
    let years = args.years.unwrap_or_else(|| session.year_range());

    let table = match (args.region, args.source) {
        (Some(region), _) => session.report_by_region(region, years)?,
        (None, Some(source)) => session.report_by_source(source, years)?,
        (None, None) => return Err("Either --region or --source is required".into()),
    };

    if verbose {
        eprintln!(
            "{} {} rows x {} years",
            "Report:".yellow().bold(),
            table.row_count(),
            years.len()
        );
    }

    match (args.format.export_format(), args.output) {
        (Some(format), Some(path)) => {
            emissions::export_to_path(&table, format, &path)?;
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        (Some(format), None) => {
            let mut out = io::stdout().lock();
            emissions::write_table(&table, format, &mut out)?;
            out.flush()?;
        }
        (None, Some(path)) => {
            // Files get plain text
            colored::control::set_override(false);
            let mut buf = Vec::new();
            render::write_report(&table, &mut buf)?;
            colored::control::unset_override();
            crate::init_color();

            std::fs::write(&path, buf)?;
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        (None, None) => {
            render::write_report(&table, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
