//! Record validation.
//!
//! - [`url`] - syntactic URL check (scheme + host, or IP literal host)
//! - [`record`] - per-record rules: valid `uri`, `stars` in 0..=5
//!
//! # Example
//!
//! ```
//! use converter::models::Record;
//! use converter::validation::{is_valid, is_valid_url};
//!
//! assert!(is_valid_url("https://168.172.58.24"));
//! assert!(!is_valid_url("some_bad_url"));
//!
//! let record: Record = [("name", "Dörr"), ("stars", "3"), ("uri", "http://www.example.com")]
//!     .into_iter()
//!     .collect();
//! assert!(is_valid(&record));
//! ```

pub mod record;
pub mod url;

pub use record::{is_valid, validate, MAX_STARS, MIN_STARS};
pub use self::url::is_valid_url;
