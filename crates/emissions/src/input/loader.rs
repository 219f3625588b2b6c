//! XML loader for emissions datasets.
//!
//! Expected document shape:
//!
//! ```xml
//! <ghg>
//!   <region name="Ontario">
//!     <source description="Energy">
//!       <emissions year="2000">10.5</emissions>
//!     </source>
//!   </region>
//! </ghg>
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use roxmltree::{Document, Node, ParsingOptions};
use sha2::{Digest, Sha256};

use super::source::DatasetMetadata;
use crate::dataset::{EmissionDataset, EmissionRecord, Region, Source};
use crate::error::{EmissionsError, Result};

const REGION: &str = "region";
const SOURCE: &str = "source";
const EMISSIONS: &str = "emissions";

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Required root element name (None = accept any root).
    pub root_element: Option<String>,
    /// Trim whitespace around emission values; empty values become missing.
    pub trim_values: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root_element: None,
            trim_values: true,
        }
    }
}

/// Loads emissions datasets from XML.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a new loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the dataset and its metadata.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(EmissionDataset, DatasetMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| EmissionsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| EmissionsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let text = String::from_utf8(contents).map_err(|e| {
            EmissionsError::InvalidStructure(format!("'{}' is not valid UTF-8: {}", path.display(), e))
        })?;

        let dataset = self.load_str(&text)?;
        let metadata = DatasetMetadata::new(path.to_path_buf(), hash, size_bytes, &dataset);

        debug!(
            "loaded {} ({} regions, {} sources, {} records)",
            metadata.file, metadata.region_count, metadata.source_count, metadata.record_count
        );

        Ok((dataset, metadata))
    }

    /// Parse a dataset from XML text.
    pub fn load_str(&self, xml: &str) -> Result<EmissionDataset> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let root = doc.root_element();

        if let Some(expected) = &self.config.root_element {
            if root.tag_name().name() != expected {
                return Err(EmissionsError::InvalidStructure(format!(
                    "Expected root element '{}', found '{}'",
                    expected,
                    root.tag_name().name()
                )));
            }
        }

        // Regions may sit at any depth below the root, in document order.
        let regions = root
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == REGION)
            .map(|n| self.parse_region(&n))
            .collect::<Result<Vec<_>>>()?;

        Ok(EmissionDataset::new(regions))
    }

    fn parse_region(&self, node: &Node) -> Result<Region> {
        let name = required_attr(node, "name", REGION)?;
        let sources = child_elements(node, SOURCE)
            .map(|n| self.parse_source(&n))
            .collect::<Result<Vec<_>>>()?;

        Ok(Region {
            name: name.to_string(),
            sources,
        })
    }

    fn parse_source(&self, node: &Node) -> Result<Source> {
        let description = required_attr(node, "description", SOURCE)?;
        let records = child_elements(node, EMISSIONS)
            .map(|n| self.parse_record(&n))
            .collect::<Result<Vec<_>>>()?;

        Ok(Source {
            description: description.to_string(),
            records,
        })
    }

    fn parse_record(&self, node: &Node) -> Result<EmissionRecord> {
        let year = required_attr(node, "year", EMISSIONS)?;
        let text = node.text().unwrap_or("");
        let value = if self.config.trim_values {
            Some(text.trim()).filter(|t| !t.is_empty())
        } else {
            Some(text).filter(|t| !t.is_empty())
        };

        Ok(EmissionRecord::new(year, value))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn required_attr<'a>(node: &Node<'a, '_>, attr: &'static str, element: &'static str) -> Result<&'a str> {
    node.attribute(attr)
        .ok_or(EmissionsError::MissingAttribute { element, attr })
}

fn child_elements<'a, 'input>(
    node: &Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}
