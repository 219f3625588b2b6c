//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use emissions::{ExportFormat, UnparsableYearPolicy, YearRange};

/// Dataset read when `--data` is not given.
pub const DEFAULT_DATA_FILE: &str = "./ghg-canada.xml";

/// Emissions: greenhouse-gas emissions reports
#[derive(Parser)]
#[command(name = "emissions")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the emissions XML dataset
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Handling of non-integer years when computing the year range
    #[arg(long, global = true, default_value = "skip")]
    pub unparsable_years: YearPolicyChoice,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    Menu {
        /// Initial year range, e.g. 2000-2005
        #[arg(short, long)]
        years: Option<YearRange>,
    },

    /// List regions with their numbers
    Regions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List distinct emission sources with their numbers
    Sources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the range of years in the dataset
    Range {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a report for one region or one source
    Report {
        /// Region number (see `emissions regions`)
        #[arg(short, long, conflicts_with = "source", required_unless_present = "source")]
        region: Option<usize>,

        /// Source number (see `emissions sources`)
        #[arg(short, long)]
        source: Option<usize>,

        /// Year range, e.g. 2000-2005 (default: whole dataset)
        #[arg(short, long)]
        years: Option<YearRange>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show dataset file details
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    /// Machine-readable export format, `None` for the console table.
    pub fn export_format(&self) -> Option<ExportFormat> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Csv => Some(ExportFormat::Csv),
            ReportFormat::Tsv => Some(ExportFormat::Tsv),
            ReportFormat::Json => Some(ExportFormat::Json),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "table" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text, csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Tsv => write!(f, "tsv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Policy choice for unparsable years
#[derive(Clone, Copy, Debug, Default)]
pub enum YearPolicyChoice {
    /// Ignore records whose year is not an integer
    #[default]
    Skip,
    /// Count such records as year 0
    Zero,
}

impl From<YearPolicyChoice> for UnparsableYearPolicy {
    fn from(choice: YearPolicyChoice) -> Self {
        match choice {
            YearPolicyChoice::Skip => UnparsableYearPolicy::Skip,
            YearPolicyChoice::Zero => UnparsableYearPolicy::TreatAsZero,
        }
    }
}

impl std::str::FromStr for YearPolicyChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "skip" | "ignore" => Ok(YearPolicyChoice::Skip),
            "zero" | "treat_as_zero" => Ok(YearPolicyChoice::Zero),
            _ => Err(format!("Unknown policy: {}. Use skip or zero.", s)),
        }
    }
}

impl std::fmt::Display for YearPolicyChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearPolicyChoice::Skip => write!(f, "skip"),
            YearPolicyChoice::Zero => write!(f, "zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_report_args() {
        let cli = Cli::try_parse_from([
            "emissions", "--data", "x.xml", "report", "--region", "2", "--years", "2000-2003", "-f", "csv",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report { region, source, years, format, .. }) => {
                assert_eq!(region, Some(2));
                assert_eq!(source, None);
                assert_eq!(years, Some(YearRange::new(2000, 2003).unwrap()));
                assert_eq!(format, ReportFormat::Csv);
            }
            _ => panic!("expected report command"),
        }
        assert_eq!(cli.data, PathBuf::from("x.xml"));
    }

    #[test]
    fn test_report_needs_one_dimension() {
        assert!(Cli::try_parse_from(["emissions", "report"]).is_err());
        assert!(Cli::try_parse_from(["emissions", "report", "-r", "1", "-s", "2"]).is_err());
    }

    #[test]
    fn test_default_is_menu() {
        let cli = Cli::try_parse_from(["emissions"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data, PathBuf::from(DEFAULT_DATA_FILE));
    }
}
