//! Menu command - interactive report loop.

use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;
use emissions::{ReportTable, Selection, Session, UnparsableYearPolicy, YearRange};
use log::debug;

use crate::render;

pub fn run(
    data: PathBuf,
    policy: UnparsableYearPolicy,
    years: Option<YearRange>,
) -> Result<(), Box<dyn Error>> {
    let session = super::open_session(&data, policy, years)?;
    let stdin = io::stdin();
    let mut menu = Menu::new(&session, stdin.lock(), io::stdout());
    menu.run()
}

/// Top-level menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Years,
    Region,
    Source,
    Exit,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Y" => Ok(Choice::Years),
            "R" => Ok(Choice::Region),
            "S" => Ok(Choice::Source),
            "X" => Ok(Choice::Exit),
            _ => Err(()),
        }
    }
}

/// Interactive session over any line-based input and output.
///
/// Closing the input ends the loop the same way as choosing `X`.
pub struct Menu<'s, R, W> {
    session: &'s Session,
    selection: Selection,
    input: R,
    out: W,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(session: &'s Session, input: R, out: W) -> Self {
        Self {
            session,
            selection: session.initial_selection(),
            input,
            out,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            self.write_header()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let keep_going = match line.parse::<Choice>() {
                Ok(Choice::Years) => self.adjust_years()?,
                Ok(Choice::Region) => self.region_report()?,
                Ok(Choice::Source) => self.source_report()?,
                Ok(Choice::Exit) => false,
                Err(()) => {
                    writeln!(self.out, "\n{}", "Error: Selection not valid!".red())?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        writeln!(self.out, "\n{}\n", "All done!".green().bold())?;
        self.out.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> io::Result<()> {
        let title = "Greenhouse Gas Emissions in Canada";
        writeln!(self.out)?;
        writeln!(self.out, "{}", title.cyan().bold())?;
        writeln!(self.out, "{}", "=".repeat(title.len()))?;
        writeln!(self.out, "Years selected: {}", self.selection.years())?;
        writeln!(self.out)?;
        writeln!(self.out, "'Y' to adjust the range of years")?;
        writeln!(self.out, "'R' to select a region")?;
        writeln!(self.out, "'S' to select a specific GHG source")?;
        writeln!(self.out, "'X' to exit the program")?;
        write!(self.out, "Your selection: ")?;
        self.out.flush()
    }

    /// Ask for a new start and end year. Returns `false` if input closed.
    fn adjust_years(&mut self) -> Result<bool, Box<dyn Error>> {
        let bounds = self.session.year_range();

        let Some(from) = self.prompt_in_range(
            &format!("Starting year (from {} to {}): ", bounds.start(), bounds.end()),
            bounds.start(),
            bounds.end(),
            "Starting year",
        )?
        else {
            return Ok(false);
        };

        let Some(to) = self.prompt_in_range(
            &format!("Ending year (from {} to {}): ", from, bounds.end()),
            from,
            bounds.end(),
            "Ending year",
        )?
        else {
            return Ok(false);
        };

        self.selection.set_years(YearRange::new(from, to)?, &bounds)?;
        debug!("year range set to {}", self.selection.years());

        self.press_enter()
    }

    fn region_report(&mut self) -> Result<bool, Box<dyn Error>> {
        let session = self.session;
        let catalog = session.catalog();
        writeln!(self.out, "\nSelect a region by number as shown below...")?;
        render::write_entries(catalog.regions(), &mut self.out)?;

        let Some(ordinal) = self.prompt_in_range("\nEnter a region #: ", 1, catalog.regions().len(), "Region")?
        else {
            return Ok(false);
        };
        self.selection.select_region(ordinal, catalog)?;

        let table = session.region_report(&self.selection)?;
        self.show(&table)
    }

    fn source_report(&mut self) -> Result<bool, Box<dyn Error>> {
        let session = self.session;
        let catalog = session.catalog();
        writeln!(self.out, "\nSelect a source by number as shown below...")?;
        render::write_entries(catalog.sources(), &mut self.out)?;

        let Some(ordinal) = self.prompt_in_range("\nEnter a source #: ", 1, catalog.sources().len(), "Source")?
        else {
            return Ok(false);
        };
        self.selection.select_source(ordinal, catalog)?;

        let table = session.source_report(&self.selection)?;
        self.show(&table)
    }

    fn show(&mut self, table: &ReportTable) -> Result<bool, Box<dyn Error>> {
        render::write_report(table, &mut self.out)?;
        self.press_enter()
    }

    fn press_enter(&mut self) -> Result<bool, Box<dyn Error>> {
        write!(self.out, "\nPress Enter to continue.")?;
        self.out.flush()?;
        Ok(self.read_line()?.is_some())
    }

    /// Prompt until the user enters a value in `[min, max]`.
    ///
    /// Returns `None` when the input is closed.
    fn prompt_in_range<T>(&mut self, prompt: &str, min: T, max: T, what: &str) -> io::Result<Option<T>>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        if min > max {
            writeln!(self.out, "{}", format!("ERROR: No {} available.", what.to_lowercase()).red())?;
            return Ok(None);
        }

        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.trim().parse::<T>() {
                Ok(value) if value >= min && value <= max => return Ok(Some(value)),
                _ => writeln!(
                    self.out,
                    "{}",
                    format!("ERROR: {} must be an integer between {} and {}.", what, min, max).red()
                )?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
