//! Fuzz target for the XML loader and query pipeline.
//!
//! Loading arbitrary text must never panic, and any dataset that loads must
//! survive a full report over its own year range.

#![no_main]

use emissions::query::{Dimension, run_report};
use emissions::{DatasetAccessor, Loader, QueryConfig, UnparsableYearPolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(dataset) = Loader::new().load_str(xml) else {
        return;
    };

    let accessor = DatasetAccessor::new(&dataset);
    let Ok(range) = accessor.year_range(UnparsableYearPolicy::Skip) else {
        return;
    };
    // Keep the grid small
    if range.len() > 500 {
        return;
    }

    let config = QueryConfig::default();
    if !dataset.is_empty() {
        let _ = run_report(&dataset, &Dimension::region(1), range, &config);
    }
    for entry in accessor.list_distinct_source_names().iter().take(5) {
        let _ = run_report(&dataset, &Dimension::source(entry.name.clone()), range, &config);
    }
});
