//! Fuzz target for year range parsing.

#![no_main]

use emissions::YearRange;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(range) = data.parse::<YearRange>() {
        assert!(range.start() <= range.end());
        assert_eq!(range.to_string().parse::<YearRange>().ok(), Some(range));
    }
});
