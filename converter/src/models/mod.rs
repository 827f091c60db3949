//! Domain models for the conversion pipeline.
//!
//! - [`Record`] - one row of input, keyed by header name, in column order

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field holding the record's URL.
pub const URI_FIELD: &str = "uri";

/// Field holding the star rating.
pub const STARS_FIELD: &str = "stars";

/// Field used to name a record in diagnostics.
pub const NAME_FIELD: &str = "name";

// =============================================================================
// Record
// =============================================================================

/// An ordered mapping from field name to field value.
///
/// Fields keep the order they were inserted in (the column order of the
/// input file). Lookups return `None` for absent fields; callers decide
/// whether absence means a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Insert or replace a field. Replacing keeps the original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label used when reporting on this record.
    pub fn display_name(&self) -> &str {
        self.get(NAME_FIELD).unwrap_or("<unnamed>")
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
