//! Diagnostics reporting.
//!
//! Core operations never print or abort on their own: they hand a
//! [`LogLevel`] and a message to whatever [`Diagnostics`] sink the caller
//! passes in. [`TracingSink`] forwards to `tracing` for the CLI,
//! [`MemorySink`] keeps entries around for inspection.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Informational, e.g. a rejected row.
    Info,
    /// Informational confirmation that output was written.
    Success,
    Error,
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }
}

/// Sink for diagnostics produced by the pipeline.
pub trait Diagnostics {
    fn report(&self, entry: LogEntry);
}

/// Forwards diagnostics to the `tracing` subscriber installed by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Diagnostics for TracingSink {
    fn report(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Info => tracing::info!("{}", entry.message),
            LogLevel::Success => tracing::info!(status = "success", "{}", entry.message),
            LogLevel::Error => tracing::error!("{}", entry.message),
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<LogEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Messages reported at `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.borrow().iter().any(|e| e.level == LogLevel::Error)
    }
}

impl Diagnostics for MemorySink {
    fn report(&self, entry: LogEntry) {
        self.entries.borrow_mut().push(entry);
    }
}

/// Install a stdout `tracing` subscriber for the binary.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.report(LogEntry::info("first"));
        sink.report(LogEntry::error("second"));
        sink.report(LogEntry::success("third"));

        let entries = sink.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], LogEntry::info("first"));
        assert_eq!(entries[1].level, LogLevel::Error);
        assert_eq!(sink.messages(LogLevel::Success), vec!["third".to_string()]);
        assert!(sink.has_errors());
    }

    #[test]
    fn test_report_through_trait_object() {
        let sink = MemorySink::new();
        let dyn_sink: &dyn Diagnostics = &sink;
        dyn_sink.report(LogEntry::info("via dyn"));
        assert!(!sink.has_errors());
        assert_eq!(sink.messages(LogLevel::Info), vec!["via dyn".to_string()]);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&LogEntry::error("boom")).unwrap();
        assert_eq!(json, r#"{"level":"error","message":"boom"}"#);
    }
}
