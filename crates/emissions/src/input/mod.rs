//! Dataset loading.

mod loader;
mod source;

pub use loader::{Loader, LoaderConfig};
pub use source::DatasetMetadata;
