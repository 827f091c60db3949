//! Per-record validation rules.

use crate::error::RejectionReason;
use crate::models::{Record, STARS_FIELD, URI_FIELD};

use super::url::is_valid_url;

/// Lowest accepted star rating.
pub const MIN_STARS: i64 = 0;

/// Highest accepted star rating.
pub const MAX_STARS: i64 = 5;

/// Check a record, stopping at the first failing rule.
///
/// A missing `uri` is treated as empty (and so rejected); a missing `stars`
/// counts as 0.
pub fn validate(record: &Record) -> Result<(), RejectionReason> {
    let uri = record.get(URI_FIELD).unwrap_or("");
    if !is_valid_url(uri) {
        return Err(RejectionReason::InvalidUri { uri: uri.to_string() });
    }

    let stars = match record.get(STARS_FIELD) {
        None => 0,
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| RejectionReason::StarsNotInteger { value: raw.to_string() })?,
    };

    if !(MIN_STARS..=MAX_STARS).contains(&stars) {
        return Err(RejectionReason::StarsOutOfRange { stars });
    }

    Ok(())
}

/// Quick yes/no version of [`validate`].
pub fn is_valid(record: &Record) -> bool {
    validate(record).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(stars: &str, uri: &str) -> Record {
        [
            ("name", "test"),
            ("address", "Some address"),
            ("stars", stars),
            ("contact", "Some contact"),
            ("phone", "Some phone number"),
            ("uri", uri),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_correct_star_rating() {
        assert!(is_valid(&hotel("3", "http://www.example.com")));
    }

    #[test]
    fn test_star_boundaries() {
        assert!(is_valid(&hotel("0", "http://www.example.com")));
        assert!(is_valid(&hotel("5", "http://www.example.com")));
        assert_eq!(
            validate(&hotel("-1", "http://www.example.com")),
            Err(RejectionReason::StarsOutOfRange { stars: -1 })
        );
        assert_eq!(
            validate(&hotel("6", "http://www.example.com")),
            Err(RejectionReason::StarsOutOfRange { stars: 6 })
        );
    }

    #[test]
    fn test_negative_and_above_range() {
        assert!(!is_valid(&hotel("-3", "http://www.example3.com")));
        assert!(!is_valid(&hotel("7", "http://www.example2.com")));
    }

    #[test]
    fn test_missing_stars_defaults_to_zero() {
        let record: Record = [("name", "x"), ("uri", "https://x.org")].into_iter().collect();
        assert!(is_valid(&record));
    }

    #[test]
    fn test_stars_not_an_integer() {
        assert_eq!(
            validate(&hotel("three", "http://www.example.com")),
            Err(RejectionReason::StarsNotInteger { value: "three".into() })
        );
        assert!(!is_valid(&hotel("", "http://www.example.com")));
        assert!(is_valid(&hotel(" 4 ", "http://www.example.com")));
    }

    #[test]
    fn test_bad_uri() {
        assert_eq!(
            validate(&hotel("3", "")),
            Err(RejectionReason::InvalidUri { uri: String::new() })
        );
        assert!(!is_valid(&hotel("3", "some_bad_url")));
    }

    #[test]
    fn test_missing_uri() {
        let record: Record = [("name", "x"), ("stars", "2")].into_iter().collect();
        assert_eq!(
            validate(&record),
            Err(RejectionReason::InvalidUri { uri: String::new() })
        );
    }

    #[test]
    fn test_uri_checked_before_stars() {
        assert!(matches!(
            validate(&hotel("9", "nope")),
            Err(RejectionReason::InvalidUri { .. })
        ));
    }
}
