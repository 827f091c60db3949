//! The record store: load, sort and emit one record set.
//!
//! Every failure here is reported through the [`Diagnostics`] sink passed
//! to each operation and then absorbed:
//!
//! | condition                      | level   | outcome                 |
//! |--------------------------------|---------|-------------------------|
//! | input file missing/unreadable  | error   | empty store             |
//! | record fails validation        | info    | record excluded         |
//! | sort key missing on a record   | error   | order unchanged         |
//! | extension/format mismatch      | error   | nothing written         |
//! | unsupported output extension   | error   | nothing written         |
//!
//! # Example
//!
//! ```
//! use converter::logs::{LogLevel, MemorySink};
//! use converter::models::Record;
//! use converter::store::RecordStore;
//!
//! let sink = MemorySink::new();
//! let rows: Vec<Record> = vec![
//!     [("name", "b"), ("stars", "3"), ("uri", "http://b.com")].into_iter().collect(),
//!     [("name", "a"), ("stars", "9"), ("uri", "http://a.com")].into_iter().collect(),
//! ];
//!
//! let mut store = RecordStore::from_records(rows, &sink);
//! assert_eq!(store.len(), 1);
//! assert_eq!(sink.messages(LogLevel::Info).len(), 1);
//!
//! store.sort_by("missing", &sink);
//! assert!(sink.has_errors());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConvertOptions;
use crate::logs::{Diagnostics, LogEntry};
use crate::models::Record;
use crate::parser::parse_csv_file;
use crate::serialize::OutputTarget;
use crate::validation::validate;

/// What [`RecordStore::emit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Output was written to this path.
    Written(PathBuf),
    /// Nothing was written; the reason went to the diagnostics sink.
    Skipped,
}

impl EmitOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Validated records of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    rejected: usize,
}

impl RecordStore {
    /// Read a delimited file and keep the rows that pass validation.
    ///
    /// A missing or unreadable file is reported as an error and yields an
    /// empty store.
    pub fn load(path: &Path, delimiter: char, diagnostics: &dyn Diagnostics) -> Self {
        match parse_csv_file(path, delimiter) {
            Ok(rows) => Self::from_records(rows, diagnostics),
            Err(e) => {
                diagnostics.report(LogEntry::error(e.to_string()));
                Self::default()
            }
        }
    }

    /// Keep the rows that pass validation, in their original order.
    pub fn from_records(rows: Vec<Record>, diagnostics: &dyn Diagnostics) -> Self {
        let mut store = Self::default();

        for row in rows {
            match validate(&row) {
                Ok(()) => store.records.push(row),
                Err(reason) => {
                    store.rejected += 1;
                    diagnostics.report(LogEntry::info(format!(
                        "{} with {}",
                        row.display_name(),
                        reason
                    )));
                }
            }
        }

        store
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows excluded by validation.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Stable ascending sort by the string value of `key`.
    ///
    /// If any record lacks `key` the order is left untouched and an error
    /// is reported.
    pub fn sort_by(&mut self, key: &str, diagnostics: &dyn Diagnostics) {
        if self.records.iter().any(|r| !r.contains(key)) {
            diagnostics.report(LogEntry::error(format!("{key} is not a valid key")));
            return;
        }

        self.records.sort_by(|a, b| a.get(key).cmp(&b.get(key)));
    }

    /// Serialize the records to `target`.
    ///
    /// Writes nothing when the target's extension disagrees with its format
    /// or when rendering/writing fails.
    pub fn emit(
        &self,
        target: &OutputTarget,
        options: &ConvertOptions,
        diagnostics: &dyn Diagnostics,
    ) -> EmitOutcome {
        if !target.is_consistent() {
            diagnostics.report(LogEntry::error(format!(
                "invalid output file type {}, please specify a {} output file",
                target.path.display(),
                target.format
            )));
            return EmitOutcome::Skipped;
        }

        let bytes = match target.format.render(&self.records, options) {
            Ok(bytes) => bytes,
            Err(e) => {
                diagnostics.report(LogEntry::error(format!(
                    "failed to render {}: {e}",
                    target.path.display()
                )));
                return EmitOutcome::Skipped;
            }
        };

        if let Err(e) = fs::write(&target.path, bytes) {
            diagnostics.report(LogEntry::error(format!(
                "failed to write {}: {e}",
                target.path.display()
            )));
            return EmitOutcome::Skipped;
        }

        diagnostics.report(LogEntry::success(format!(
            "{} created successfully",
            target.path.display()
        )));
        EmitOutcome::Written(target.path.clone())
    }

    /// Pick the format from `path`'s extension, then [`Self::emit`].
    pub fn emit_to(
        &self,
        path: &Path,
        options: &ConvertOptions,
        diagnostics: &dyn Diagnostics,
    ) -> EmitOutcome {
        match OutputTarget::from_path(path) {
            Some(target) => self.emit(&target, options, diagnostics),
            None => {
                diagnostics.report(LogEntry::error(format!(
                    "file type conversion not supported: {}",
                    path.display()
                )));
                EmitOutcome::Skipped
            }
        }
    }
}
