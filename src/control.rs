//! The shared weighted-modulo control-number check.
//!
//! Every format except ISBN-10 routes through [`check_control_number`]: the
//! weight table covers all positions but the last, and the final character
//! must carry the check value derived from the weighted sum.

use crate::format::Scheme;
use crate::normalize::strip_formatting;
use crate::validation::ValidationError;

/// Verifies the control number of a normalized code.
///
/// Computes `sum` as the weighted sum of the digits covered by `weights`
/// (every position but the last), then expects the final character to carry
/// the value `(subtract - sum % modulo) mod modulo`. The subtraction is
/// reduced with a Euclidean remainder, so the boundary where it yields
/// `modulo` maps to 0. A literal `X` in the final position counts as 10
/// (the ISSN convention); a non-digit in any weighted position fails the
/// check.
pub fn check_control_number(code: &str, weights: &[u32], modulo: u32, subtract: u32) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != weights.len() + 1 || modulo == 0 {
        return false;
    }
    let mut sum: u32 = 0;
    for (c, weight) in chars.iter().zip(weights) {
        match c.to_digit(10) {
            Some(digit) => sum += digit * weight,
            None => return false,
        }
    }
    let remainder = i64::from(sum % modulo);
    let expected = (i64::from(subtract) - remainder).rem_euclid(i64::from(modulo)) as u32;
    let control = match chars[chars.len() - 1] {
        'X' => 10,
        c => match c.to_digit(10) {
            Some(digit) => digit,
            None => return false,
        },
    };
    control == expected
}

/// Generic length and digit gate in front of the checker.
///
/// Returns `true` when `data`, once formatting characters are removed, is
/// all-digit, exactly `scheme.length` characters long, and carries a valid
/// control number.
pub fn process(data: &str, scheme: &Scheme) -> bool {
    run(data, scheme).is_ok()
}

/// Checked form of [`process`]; reports the gate that rejected the code.
pub(crate) fn run(data: &str, scheme: &Scheme) -> Result<(), ValidationError> {
    let code = strip_formatting(data);
    let found = code.chars().count();
    if found != scheme.length {
        return Err(ValidationError::WrongLength {
            expected: scheme.length,
            found,
        });
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric { value: code });
    }
    if !check_control_number(&code, scheme.weights, scheme.modulo, scheme.subtract) {
        return Err(ValidationError::ControlNumber { value: code });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_zero_maps_to_control_zero() {
        // weighted sum 0, so (10 - 0) mod 10 must land on 0, not 10
        assert!(check_control_number("00000000", Scheme::EAN8.weights, 10, 10));
    }

    #[test]
    fn final_x_counts_as_ten() {
        assert!(check_control_number("2434561X", Scheme::ISSN.weights, 11, 11));
    }

    #[test]
    fn weighted_positions_must_be_digits() {
        assert!(!check_control_number("243X5614", Scheme::ISSN.weights, 11, 11));
    }

    #[test]
    fn length_must_match_the_weight_table() {
        assert!(!check_control_number("1234", Scheme::EAN8.weights, 10, 10));
        assert!(!check_control_number("123456789", Scheme::EAN8.weights, 10, 10));
    }

    #[test]
    fn gate_reports_length_before_content() {
        let err = run("12a", &Scheme::EAN8).unwrap_err();
        assert!(matches!(err, ValidationError::WrongLength { expected: 8, found: 3 }));
    }
}
