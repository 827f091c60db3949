//! # Converter - validate delimited records and write them as JSON or XML
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌───────────┐     ┌─────────────┐     ┌────────────┐
//! │ CSV file  │────▶│  Parser   │────▶│ RecordStore │────▶│ JSON / XML │
//! │ (UTF-8)   │     │ (header)  │     │ validate,   │     │  (+indent) │
//! └───────────┘     └───────────┘     │ sort        │     └────────────┘
//!                                     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use converter::{ConvertOptions, RecordStore, TracingSink};
//!
//! let options = ConvertOptions::default();
//! let mut store = RecordStore::load(Path::new("data/hotels.csv"), options.delimiter, &TracingSink);
//! store.sort_by("name", &TracingSink);
//! store.emit_to(Path::new("data/hotels.json"), &options, &TracingSink);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - error types
//! - [`models`] - the [`Record`] type
//! - [`parser`] - delimited input
//! - [`validation`] - URL and record rules
//! - [`store`] - load / sort / emit orchestration
//! - [`serialize`] - JSON and XML output
//! - [`config`] - conversion options
//! - [`logs`] - diagnostics sinks

pub mod config;
pub mod error;
pub mod logs;
pub mod models;
pub mod parser;
pub mod serialize;
pub mod store;
pub mod validation;

pub use config::{ConvertOptions, DEFAULT_OUTPUT_DIR};

pub use error::{ConvertError, CsvError, RejectionReason, SerializeError};

pub use logs::{Diagnostics, LogEntry, LogLevel, MemorySink, TracingSink};

pub use models::Record;

pub use parser::{csv_to_records, parse_csv, parse_csv_file, DEFAULT_DELIMITER};

pub use validation::{is_valid, is_valid_url, validate};

pub use serialize::json::{from_json, to_json};
pub use serialize::xml::{indent, list_to_xml};
pub use serialize::{OutputFormat, OutputTarget};

pub use store::{EmitOutcome, RecordStore};
