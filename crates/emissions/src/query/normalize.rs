//! Year-indexed series and gap filling.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::range::YearRange;

/// Formatted values keyed by canonical year text, in insertion order.
///
/// Freshly extracted series are sparse and unordered; after
/// [`Series::normalize`] a series holds exactly one entry per year of the
/// requested range, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(IndexMap<String, String>);

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless the year already has one.
    ///
    /// Returns `false` when the year was already present.
    pub fn insert_first(&mut self, year: i32, value: String) -> bool {
        match self.0.entry(year.to_string()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn get(&self, year: &str) -> Option<&str> {
        self.0.get(year).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Year keys in order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Values in year order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill every year of `range` and order the result by year.
    ///
    /// Years absent from `self` get `placeholder`. Keys outside the range,
    /// or not parseable as a year, are dropped.
    pub fn normalize(&self, range: YearRange, placeholder: &str) -> Series {
        let mut by_year: IndexMap<i32, &str> = IndexMap::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            if let Ok(year) = key.trim().parse::<i32>() {
                by_year.entry(year).or_insert(value.as_str());
            }
        }

        range
            .years()
            .map(|year| {
                let value = by_year.get(&year).copied().unwrap_or(placeholder);
                (year.to_string(), value.to_string())
            })
            .collect()
    }
}

impl FromIterator<(String, String)> for Series {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Series(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, &str)]) -> Series {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_fills_gaps() {
        let raw = series(&[("2002", "11.000"), ("2000", "10.500")]);
        let normalized = raw.normalize(YearRange::new(2000, 2003).unwrap(), "-");

        assert_eq!(
            normalized,
            series(&[("2000", "10.500"), ("2001", "-"), ("2002", "11.000"), ("2003", "-")])
        );
    }

    #[test]
    fn test_numeric_not_lexicographic_order() {
        let raw = series(&[("10000", "1"), ("9999", "2")]);
        let normalized = raw.normalize(YearRange::new(9998, 10000).unwrap(), "-");
        assert_eq!(normalized.years().collect::<Vec<_>>(), vec!["9998", "9999", "10000"]);
    }

    #[test]
    fn test_drops_out_of_range_and_garbage_keys() {
        let raw = series(&[("1999", "1.000"), ("abc", "2.000"), ("2000", "3.000")]);
        let normalized = raw.normalize(YearRange::single(2000), "-");
        assert_eq!(normalized, series(&[("2000", "3.000")]));
    }

    #[test]
    fn test_single_year_empty_input() {
        let normalized = Series::new().normalize(YearRange::single(2010), "-");
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get("2010"), Some("-"));
    }

    #[test]
    fn test_idempotent() {
        let range = YearRange::new(2000, 2004).unwrap();
        let once = series(&[("2003", "5.000")]).normalize(range, "-");
        let twice = once.normalize(range, "-");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_insert_first_keeps_existing() {
        let mut s = Series::new();
        assert!(s.insert_first(2000, "1.000".to_string()));
        assert!(!s.insert_first(2000, "2.000".to_string()));
        assert_eq!(s.get("2000"), Some("1.000"));
    }
}
