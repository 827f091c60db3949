//! Delimited text reader.
//!
//! The first row names the fields; every following row becomes a
//! [`Record`] whose fields keep the header's column order. No validation
//! happens here.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::Record;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

fn delimiter_byte(delimiter: char) -> CsvResult<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(CsvError::InvalidDelimiter(delimiter))
    }
}

fn parse_error(err: csv::Error) -> CsvError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    CsvError::Parse {
        line,
        message: err.to_string(),
    }
}

/// Parse delimited data from a string.
///
/// # Example
/// ```
/// use converter::parser::csv_to_records;
///
/// let rows = csv_to_records("name;stars\nAlice;3\nBob;5", ';').unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].get("name"), Some("Alice"));
/// assert_eq!(rows[1].get("stars"), Some("5"));
/// ```
pub fn csv_to_records(csv: &str, delimiter: char) -> CsvResult<Vec<Record>> {
    parse_csv(csv.as_bytes(), delimiter)
}

/// Parse delimited data from a reader.
///
/// Short rows get `""` for their missing trailing fields, extra fields past
/// the header are dropped, blank lines are skipped.
pub fn parse_csv<R: Read>(reader: R, delimiter: char) -> CsvResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(parse_error)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(parse_error)?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header, row.get(i).unwrap_or("")))
            .collect();
        rows.push(record);
    }

    Ok(rows)
}

/// Parse a delimited file.
///
/// A missing file is reported as [`CsvError::NotFound`] so callers can tell
/// it apart from other I/O failures.
pub fn parse_csv_file(path: &Path, delimiter: char) -> CsvResult<Vec<Record>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CsvError::NotFound(path.display().to_string()),
        _ => CsvError::Io(e),
    })?;
    parse_csv(file, delimiter)
}
