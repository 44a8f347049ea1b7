//! ISBN, ISSN, and ISMN entry points.
//!
//! ISSN and ISMN delegate to the shared control-number check after their own
//! normalization. ISBN-10 keeps its inline form: the check digit participates
//! in the weighted sum and validity is divisibility by 11, which is
//! equivalent to comparing a computed check value against the provided one.

use crate::control::check_control_number;
use crate::format::Scheme;
use crate::normalize::{replace_leading_m, strip_formatting, strip_prefix_ignore_case};
use crate::validation::ValidationError;

/// Characters permitted anywhere in a raw ISBN: digits, space, hyphen, and
/// the marker letters themselves.
const ISBN_ALPHABET: &str = "0123456789 IXSBN-";

/// Validates an ISBN-10, which must carry its `ISBN` marker.
pub fn isbn(input: &str) -> bool {
    validate_isbn(input).is_ok()
}

/// Validates an ISSN, with or without its `ISSN` marker.
pub fn issn(input: &str) -> bool {
    validate_issn(input).is_ok()
}

/// Validates an ISMN, with or without its `ISMN` marker.
pub fn ismn(input: &str) -> bool {
    validate_ismn(input).is_ok()
}

pub(crate) fn validate_isbn(input: &str) -> Result<(), ValidationError> {
    if !input.chars().all(|c| ISBN_ALPHABET.contains(c)) {
        return Err(ValidationError::ForbiddenCharacter {
            value: input.to_string(),
        });
    }
    let rest = strip_prefix_ignore_case(input, "ISBN").ok_or_else(|| {
        ValidationError::MissingPrefix {
            prefix: "ISBN",
            value: input.to_string(),
        }
    })?;
    let code = strip_formatting(rest);
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 10 {
        return Err(ValidationError::WrongLength {
            expected: 10,
            found: chars.len(),
        });
    }
    let mut sum: u32 = 0;
    for (i, c) in chars[..9].iter().enumerate() {
        let digit = c.to_digit(10).ok_or_else(|| ValidationError::NotNumeric {
            value: code.clone(),
        })?;
        sum += digit * (10 - i as u32);
    }
    // The check digit joins the same sum; X stands for 10.
    sum += match chars[9] {
        'X' => 10,
        c => c.to_digit(10).ok_or_else(|| ValidationError::NotNumeric {
            value: code.clone(),
        })?,
    };
    if sum % 11 != 0 {
        return Err(ValidationError::ControlNumber { value: code });
    }
    Ok(())
}

pub(crate) fn validate_issn(input: &str) -> Result<(), ValidationError> {
    let upper = input.to_ascii_uppercase();
    let rest = strip_prefix_ignore_case(&upper, "ISSN").unwrap_or(&upper);
    let code = strip_formatting(rest);
    // X is a valid control character; the digit gate runs on an X-to-0 variant.
    let numeric: String = code
        .chars()
        .map(|c| if c == 'X' { '0' } else { c })
        .collect();
    if !numeric.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric { value: code });
    }
    let found = code.chars().count();
    if found != Scheme::ISSN.length {
        return Err(ValidationError::WrongLength {
            expected: Scheme::ISSN.length,
            found,
        });
    }
    if !check_control_number(
        &code,
        Scheme::ISSN.weights,
        Scheme::ISSN.modulo,
        Scheme::ISSN.subtract,
    ) {
        return Err(ValidationError::ControlNumber { value: code });
    }
    Ok(())
}

pub(crate) fn validate_ismn(input: &str) -> Result<(), ValidationError> {
    let rest = strip_prefix_ignore_case(input, "ISMN").unwrap_or(input);
    let code = replace_leading_m(&strip_formatting(rest));
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric { value: code });
    }
    let found = code.chars().count();
    if found != Scheme::ISMN.length {
        return Err(ValidationError::WrongLength {
            expected: Scheme::ISMN.length,
            found,
        });
    }
    if !check_control_number(
        &code,
        Scheme::ISMN.weights,
        Scheme::ISMN.modulo,
        Scheme::ISMN.subtract,
    ) {
        return Err(ValidationError::ControlNumber { value: code });
    }
    Ok(())
}
