//! Input normalization shared by every format.
//!
//! Normalization never fails: it only removes formatting characters and
//! format markers. Malformed input is rejected by the length and digit gates
//! that run afterwards.

/// Formatting characters removed before any length or checksum test.
const FORMATTING: [char; 5] = ['-', '/', ' ', '\t', '\n'];

/// Removes hyphens, slashes, spaces, tabs, and newlines.
///
/// Idempotent: a string that is already clean comes back unchanged.
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| !FORMATTING.contains(c)).collect()
}

/// Strips a case-insensitive leading marker such as `ISBN` or `ISSN`.
///
/// Returns the remainder when the marker is present, `None` otherwise.
pub fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

/// Replaces the leading publisher-element `M` of an ISMN with digit `3`,
/// per the ISMN-to-EAN mapping.
pub fn replace_leading_m(code: &str) -> String {
    match code.strip_prefix('M') {
        Some(rest) => format!("3{}", rest),
        None => code.to_string(),
    }
}
