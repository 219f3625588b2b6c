//! Info command - show dataset file details.

use std::path::PathBuf;

use chrono::Local;
use colored::Colorize;
use emissions::UnparsableYearPolicy;

pub fn run(
    data: PathBuf,
    policy: UnparsableYearPolicy,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::open_session(&data, policy, None)?;
    let metadata = session
        .metadata()
        .ok_or("Dataset was not loaded from a file")?;
    let range = session.year_range();

    if json_output {
        let info = serde_json::json!({
            "file": metadata,
            "years": { "min": range.start(), "max": range.end() },
            "distinct_sources": session.catalog().sources().len(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Dataset".cyan().bold(),
        metadata.file.white()
    );
    println!();
    println!("  Path:     {}", metadata.path.display());
    println!("  Size:     {} bytes", metadata.size_bytes);
    println!("  Hash:     {}", metadata.hash.dimmed());
    println!(
        "  Loaded:   {}",
        metadata
            .loaded_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    println!("{}", "Contents:".yellow().bold());
    println!("  Regions:          {}", metadata.region_count.to_string().white());
    println!(
        "  Sources:          {} ({} distinct)",
        metadata.source_count.to_string().white(),
        session.catalog().sources().len()
    );
    println!("  Records:          {}", metadata.record_count.to_string().white());
    println!(
        "  Years:            {} to {}",
        range.start().to_string().white(),
        range.end().to_string().white()
    );

    let missing_years = range
        .len()
        .saturating_sub(session.accessor().available_years().len());
    if missing_years > 0 {
        println!(
            "  {} {} years in range have no records",
            "Note:".yellow(),
            missing_years
        );
    }

    Ok(())
}
