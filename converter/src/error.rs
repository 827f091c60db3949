//! Error types for the conversion pipeline.
//!
//! - [`CsvError`] - delimited input could not be read
//! - [`RejectionReason`] - a single record failed validation
//! - [`SerializeError`] - JSON/XML rendering or indentation failed
//! - [`ConvertError`] - top-level wrapper used by the CLI
//!
//! None of these cross the [`crate::store::RecordStore`] boundary: the store
//! reports them through [`crate::logs::Diagnostics`] and carries on.

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading a delimited input file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input file does not exist.
    #[error("input file not found: {0}")]
    NotFound(String),

    /// Failed to open or read the file.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited data (bad quoting, invalid UTF-8, ...).
    #[error("invalid CSV on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Delimiter is not a single-byte character.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

// =============================================================================
// Record Validation
// =============================================================================

/// Why a record was excluded from the record set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// `uri` is missing, empty or not a URL with a host.
    #[error("url {uri} is not valid")]
    InvalidUri { uri: String },

    /// `stars` is present but not an integer.
    #[error("star {value} is not an integer")]
    StarsNotInteger { value: String },

    /// `stars` is outside 0..=5.
    #[error("star {stars} not within star range 0-5")]
    StarsOutOfRange { stars: i64 },
}

// =============================================================================
// Serialization Errors
// =============================================================================

/// Errors while rendering records.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The markup could not be re-read by the indentation pass.
    #[error("XML error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// The indented output was not valid UTF-8.
    #[error("indented XML is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Top-level Errors
// =============================================================================

/// Top-level conversion errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] SerializeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output path has no usable file name.
    #[error("invalid output path: {0}")]
    InvalidOutputPath(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for serializers.
pub type SerializeResult<T> = Result<T, SerializeError>;

/// Result type for top-level operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::NotFound("data/missing.csv".into());
        let err: ConvertError = csv_err.into();
        assert!(err.to_string().contains("missing.csv"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ConvertError = io.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_rejection_reason_format() {
        let reason = RejectionReason::StarsOutOfRange { stars: -3 };
        assert_eq!(reason.to_string(), "star -3 not within star range 0-5");

        let reason = RejectionReason::InvalidUri { uri: "nope".into() };
        assert_eq!(reason.to_string(), "url nope is not valid");
    }

    #[test]
    fn test_parse_error_mentions_line() {
        let err = CsvError::Parse { line: 4, message: "bad quote".into() };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("bad quote"));
    }
}
