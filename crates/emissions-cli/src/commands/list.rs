//! Listing commands - regions, sources and year range.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use emissions::UnparsableYearPolicy;

use crate::render;

pub fn regions(
    data: PathBuf,
    policy: UnparsableYearPolicy,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session(&data, policy, None)?;
    let regions = session.catalog().regions();

    if json_output {
        println!("{}", serde_json::to_string_pretty(regions)?);
    } else {
        println!("{}", "Regions:".yellow().bold());
        render::write_entries(regions, &mut io::stdout().lock())?;
    }

    Ok(())
}

pub fn sources(
    data: PathBuf,
    policy: UnparsableYearPolicy,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session(&data, policy, None)?;
    let sources = session.catalog().sources();

    if json_output {
        println!("{}", serde_json::to_string_pretty(sources)?);
    } else {
        println!("{}", "Sources:".yellow().bold());
        render::write_entries(sources, &mut io::stdout().lock())?;
    }

    Ok(())
}

pub fn range(
    data: PathBuf,
    policy: UnparsableYearPolicy,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session(&data, policy, None)?;
    let range = session.year_range();

    if json_output {
        let value = serde_json::json!({
            "min": range.start(),
            "max": range.end(),
            "years": session.accessor().available_years(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "Years {} to {}",
            range.start().to_string().white().bold(),
            range.end().to_string().white().bold()
        );
    }

    Ok(())
}
