//! Shape checks for values entered at the console.
//!
//! The core trusts the values it is given; these helpers are what the input
//! layer uses before handing them over.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Date format accepted at the prompt, e.g. `2020, 02, 23`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y, %m, %d";

lazy_static! {
    // local-part @ domain . TLD of two or more letters
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

/// Check an email address against the accepted pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Parse a date with the given `chrono` format string.
pub fn parse_date(input: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format).ok()
}

/// Split a comma-separated author list, dropping blanks.
pub fn parse_author_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
