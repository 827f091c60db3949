//! Conversion options.
//!
//! The CLI fills these from flags, environment variables and an optional
//! `.env` file; library callers can start from [`ConvertOptions::default`].

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_DELIMITER;

/// Directory bare output file names are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Options shared by every step of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Field delimiter of the input file.
    pub delimiter: char,

    /// Where bare output file names are placed.
    pub output_dir: PathBuf,

    /// Name of the XML root element.
    pub root_name: String,

    /// Name of the XML element wrapping each record.
    pub item_name: String,

    /// Spaces per nesting level in XML output.
    pub indent_width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            root_name: "hotels".to_string(),
            item_name: "hotel".to_string(),
            indent_width: 4,
        }
    }
}

impl ConvertOptions {
    /// Place a bare file name under [`Self::output_dir`].
    ///
    /// Absolute paths and paths that already name a directory are returned
    /// unchanged.
    pub fn resolve_output_path(&self, output: &Path) -> PathBuf {
        let mut components = output.components();
        let bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if bare {
            self.output_dir.join(output)
        } else {
            output.to_path_buf()
        }
    }
}
