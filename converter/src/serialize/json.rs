//! Structured-object notation (JSON) output.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::SerializeResult;
use crate::models::Record;

const INDENT: &[u8] = b"    ";

/// Render records as a pretty-printed JSON array.
///
/// Keys are sorted within each object, indentation is four spaces and
/// non-ASCII text is written as-is. The same input always yields the same
/// bytes.
pub fn to_json(records: &[Record]) -> SerializeResult<Vec<u8>> {
    let objects: Vec<BTreeMap<&str, &str>> = records.iter().map(|r| r.iter().collect()).collect();

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    objects.serialize(&mut serializer)?;
    Ok(out)
}

/// Read back a JSON array of string-valued objects.
pub fn from_json(bytes: &[u8]) -> SerializeResult<Vec<Record>> {
    Ok(serde_json::from_slice(bytes)?)
}
