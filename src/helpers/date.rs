//! Date helper functions
//!
//! Front-matter dates are kept as the strings the author wrote. These helpers
//! only judge whether such a string sorts chronologically as plain text.

use chrono::{NaiveDate, NaiveDateTime};

/// Date formats whose string order matches chronological order
const SORTABLE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%z",
];

/// Parse a zero-padded ISO-like date string
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let parsed = SORTABLE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    // chrono accepts unpadded fields, which would not sort as text
    if s.starts_with(&parsed.format("%Y-%m-%d").to_string()) {
        Some(parsed)
    } else {
        None
    }
}

/// Whether a date string orders correctly under plain string comparison
///
/// Empty dates count as sortable; they simply go last.
pub fn is_sortable_date(s: &str) -> bool {
    s.is_empty() || parse_date(s).is_some()
}

/// Today's date as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
