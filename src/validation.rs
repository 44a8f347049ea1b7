use thiserror::Error;

/// Reasons a code fails validation.
///
/// The boolean entry points collapse every variant to `false`; callers that
/// need to know which gate rejected a code go through
/// [`Format::validate`](crate::Format::validate).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When the raw input contains a character outside the permitted set.
    #[error("'{value}' contains characters that are not allowed")]
    ForbiddenCharacter {
        /// Offending raw input.
        value: String,
    },
    /// When a required format marker is absent.
    #[error("'{value}' does not start with the required '{prefix}' marker")]
    MissingPrefix {
        /// Marker the format requires.
        prefix: &'static str,
        /// Offending raw input.
        value: String,
    },
    /// When the normalized code has the wrong number of characters.
    #[error("expected {expected} characters after normalization, found {found}")]
    WrongLength {
        /// Length the format requires.
        expected: usize,
        /// Length actually found.
        found: usize,
    },
    /// When the normalized code contains a non-digit where a digit is required.
    #[error("'{value}' is not numeric")]
    NotNumeric {
        /// Offending normalized code.
        value: String,
    },
    /// When the weighted checksum does not match the control number.
    #[error("control number check failed for '{value}'")]
    ControlNumber {
        /// Offending normalized code.
        value: String,
    },
}
