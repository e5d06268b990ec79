//! Postal code geocoding stub.
//!
//! # Responsibility
//! - Map a postal code to a coordinate using a small in-memory table.
//!
//! # Invariants
//! - `GEOCODE_TABLE` is sorted by postal code; lookups binary search it.
//! - A miss never errors. `geocode_postal_code` falls back to the first
//!   table entry (`GEOCODE_FALLBACK_POSTAL_CODE`), which is not a real
//!   default location.

use crate::model::location::Coordinate;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid digit regex"));

const POSTAL_CODE_DIGITS: usize = 5;

/// Known postal codes, ascending.
pub const GEOCODE_TABLE: &[(&str, Coordinate)] = &[
    ("10001", Coordinate::new(40.7505, -73.9934)),  // New York, NY
    ("20001", Coordinate::new(38.9072, -77.0369)),  // Washington, DC
    ("28202", Coordinate::new(35.2271, -80.8431)),  // Charlotte, NC
    ("30303", Coordinate::new(33.7490, -84.3880)),  // Atlanta, GA
    ("37203", Coordinate::new(36.1627, -86.7816)),  // Nashville, TN
    ("48201", Coordinate::new(42.3314, -83.0458)),  // Detroit, MI
    ("60609", Coordinate::new(41.8781, -87.6298)),  // Chicago, IL
    ("63101", Coordinate::new(38.6270, -90.1994)),  // St. Louis, MO
    ("77001", Coordinate::new(29.7604, -95.3698)),  // Houston, TX
    ("90210", Coordinate::new(34.0901, -118.4065)), // Beverly Hills, CA
];

/// Postal code whose coordinate is returned for any unmatched lookup.
pub const GEOCODE_FALLBACK_POSTAL_CODE: &str = "10001";

/// Coordinate returned for unmatched postal codes.
pub const GEOCODE_FALLBACK: Coordinate = GEOCODE_TABLE[0].1;

/// Reduces user input to a five-digit ZIP key.
///
/// Non-digits are stripped, so `30303-1234` and ` 30303 ` both become
/// `30303`.
pub fn normalize_postal_code(raw: &str) -> String {
    NON_DIGIT_RE
        .replace_all(raw, "")
        .chars()
        .take(POSTAL_CODE_DIGITS)
        .collect()
}

/// Strict lookup. Returns `None` when the postal code is not in the table.
pub fn lookup_postal_code(postal_code: &str) -> Option<Coordinate> {
    let key = normalize_postal_code(postal_code);
    GEOCODE_TABLE
        .binary_search_by(|(code, _)| (*code).cmp(key.as_str()))
        .ok()
        .map(|index| GEOCODE_TABLE[index].1)
}

/// Lookup with the stub fallback applied on a miss.
pub fn geocode_postal_code(postal_code: &str) -> Coordinate {
    lookup_postal_code(postal_code).unwrap_or(GEOCODE_FALLBACK)
}
