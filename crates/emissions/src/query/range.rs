//! Year ranges and range resolution.

use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::config::UnparsableYearPolicy;
use crate::dataset::EmissionDataset;
use crate::error::{EmissionsError, Result};

/// Accepted textual forms: `2000-2005`, `2000..2005`, `2000..=2005`, `2000:2005`, `2003`.
static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*(?:(?:-|\.\.=?|:)\s*(-?\d+))?\s*$").unwrap()
});

/// An inclusive, non-empty range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    from: i32,
    to: i32,
}

impl YearRange {
    /// Create a range; fails when `from > to`.
    pub fn new(from: i32, to: i32) -> Result<Self> {
        if from > to {
            return Err(EmissionsError::InvalidYearRange(format!(
                "start year {} is after end year {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    /// A range covering a single year.
    pub fn single(year: i32) -> Self {
        Self { from: year, to: year }
    }

    /// First year of the range.
    pub fn start(&self) -> i32 {
        self.from
    }

    /// Last year of the range.
    pub fn end(&self) -> i32 {
        self.to
    }

    /// Number of years in the range.
    pub fn len(&self) -> usize {
        (i64::from(self.to) - i64::from(self.from) + 1) as usize
    }

    /// Always false; a range holds at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.from..=self.to).contains(&year)
    }

    /// Whether `other` lies entirely inside this range.
    pub fn covers(&self, other: &YearRange) -> bool {
        self.contains(other.from) && self.contains(other.to)
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.from..=self.to
    }

    /// Intersection with `bounds`, or `None` when they do not overlap.
    pub fn clamp_to(&self, bounds: &YearRange) -> Option<YearRange> {
        let from = self.from.max(bounds.from);
        let to = self.to.min(bounds.to);
        (from <= to).then_some(YearRange { from, to })
    }

    /// Check that both ends of this range fall within `bounds`.
    pub fn check_within(&self, bounds: &YearRange) -> Result<()> {
        for year in [self.from, self.to] {
            if !bounds.contains(year) {
                return Err(EmissionsError::YearOutOfRange {
                    year,
                    min: bounds.from,
                    max: bounds.to,
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawYearRange {
    from: i32,
    to: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = EmissionsError;

    fn try_from(raw: RawYearRange) -> Result<Self> {
        YearRange::new(raw.from, raw.to)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

impl FromStr for YearRange {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RANGE_PATTERN
            .captures(s)
            .ok_or_else(|| EmissionsError::InvalidYearRange(format!("'{}' is not a year range", s)))?;

        let parse = |text: &str| {
            text.parse::<i32>()
                .map_err(|e| EmissionsError::InvalidYearRange(format!("'{}': {}", text, e)))
        };

        let from = parse(&caps[1])?;
        match caps.get(2) {
            Some(m) => YearRange::new(from, parse(m.as_str())?),
            None => Ok(YearRange::single(from)),
        }
    }
}

/// Scan every record and return the minimum and maximum year.
pub fn resolve_year_range(dataset: &EmissionDataset, policy: UnparsableYearPolicy) -> Result<YearRange> {
    let mut bounds: Option<(i32, i32)> = None;
    let mut skipped = 0usize;

    for record in dataset.records() {
        let year = match (record.parsed_year(), policy) {
            (Some(year), _) => year,
            (None, UnparsableYearPolicy::TreatAsZero) => 0,
            (None, UnparsableYearPolicy::Skip) => {
                skipped += 1;
                continue;
            }
        };

        bounds = Some(match bounds {
            Some((min, max)) => (min.min(year), max.max(year)),
            None => (year, year),
        });
    }

    if skipped > 0 {
        debug!("skipped {} records with unparsable years", skipped);
    }

    let (min, max) =
        bounds.ok_or_else(|| EmissionsError::EmptyData("no emission records with a year".to_string()))?;
    Ok(YearRange { from: min, to: max })
}
