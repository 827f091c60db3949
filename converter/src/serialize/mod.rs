//! Output formats and their serializers.
//!
//! - [`json`] - pretty JSON array, keys sorted per object
//! - [`xml`] - flat XML document plus an indentation pass
//!
//! The format is picked once, from the output path's extension, by
//! [`OutputFormat::from_path`].

pub mod json;
pub mod xml;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ConvertOptions;
use crate::error::SerializeResult;
use crate::models::Record;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    /// File extension (without the dot) this format is written to.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Case-insensitive lookup of an extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether `path` carries this format's extension.
    pub fn matches(self, path: &Path) -> bool {
        Self::from_path(path) == Some(self)
    }

    /// Serialize records into the bytes that get written to disk.
    pub fn render(self, records: &[Record], options: &ConvertOptions) -> SerializeResult<Vec<u8>> {
        match self {
            Self::Json => json::to_json(records),
            Self::Xml => {
                let flat = xml::list_to_xml(records, &options.root_name, &options.item_name);
                Ok(xml::indent(&flat, options.indent_width)?.into_bytes())
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where and how to write a record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl OutputTarget {
    pub fn new(format: OutputFormat, path: impl Into<PathBuf>) -> Self {
        Self { format, path: path.into() }
    }

    /// Classify `path` by extension; `None` when the extension is unsupported.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        OutputFormat::from_path(&path).map(|format| Self { format, path })
    }

    /// Whether the path's extension agrees with the format.
    pub fn is_consistent(&self) -> bool {
        self.format.matches(&self.path)
    }
}
