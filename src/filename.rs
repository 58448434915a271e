//! Filename patterns and composition.
//!
//! Tracks are expected to carry their tempo at the end of the name, e.g.
//! `"01. Artist - Title - 128.mp3"`. The adjustment is inserted right after an
//! optional leading track number, or prepended when there is none.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the BPM capture, e.g. `" - 128."`.
static BPM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s-\s(\d{2,3})\.").expect("BPM pattern is a valid regex"));

/// Matches a leading track number such as `"01. "`, `"01 "` or `"1. "`.
static TRACK_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.? ").expect("track number pattern is a valid regex"));

/// Matches an adjustment that was already inserted, e.g. `"(+1.56) "` or `"(0) "`.
static ENCODED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\((?:0|[+-]\d+\.\d{1,2})\) ").expect("encoded pattern is a valid regex")
});

/// Returns the BPM digits embedded in `name`, if any.
///
/// Only the first `" - NN."` / `" - NNN."` occurrence counts.
#[must_use]
pub fn extract_bpm(name: &str) -> Option<&str> {
    BPM_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Splits `name` into its track number prefix (possibly empty) and the rest.
#[must_use]
pub fn split_track_number(name: &str) -> (&str, &str) {
    TRACK_NUMBER_PATTERN
        .find(name)
        .map_or(("", name), |m| name.split_at(m.end()))
}

/// Builds the new filename for `original_name` with `adjustment` spliced in.
///
/// # Examples
///
/// ```
/// use beatmatch_encoder::compose_filename;
///
/// assert_eq!(
///     compose_filename("01. Artist - Track - 128.mp3", "+1.56"),
///     "01. (+1.56) Artist - Track - 128.mp3"
/// );
/// assert_eq!(
///     compose_filename("Artist - Track - 128.mp3", "-2.5"),
///     "(-2.5) Artist - Track - 128.mp3"
/// );
/// ```
#[must_use]
pub fn compose_filename(original_name: &str, adjustment: &str) -> String {
    let (prefix, rest) = split_track_number(original_name);
    format!("{prefix}({adjustment}) {rest}")
}

/// Returns true if `name` already carries an inserted adjustment.
#[must_use]
pub fn is_encoded(name: &str) -> bool {
    let (_, rest) = split_track_number(name);
    ENCODED_PATTERN.is_match(rest)
}
