//! Emissions dataset model.

mod model;

pub use model::{EmissionDataset, EmissionRecord, Region, Source};
