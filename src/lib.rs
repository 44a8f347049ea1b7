//! Checksum validation for publishing and trade identifier codes.
//!
//! This crate verifies ISBN-10, ISSN, and ISMN publishing numbers and the
//! EAN-8/13/14, UCC-12, and SSCC trade-item family. Every check is a pure
//! function of the input string and a constant parameter table:
//! - Raw input is normalized first: formatting characters and format markers
//!   are stripped before any length or checksum test runs.
//! - Each format supplies a fixed length and weight table; all formats except
//!   ISBN-10 share one weighted-modulo control-number check.
//! - Malformed input is never an error. Every failure collapses to `false`
//!   through the boolean entry points; callers that need the failing gate go
//!   through [`Format::validate`].
//!
//! ```
//! assert!(codecheck::ean13("4006381333931"));
//! assert!(!codecheck::ean13("4006381333932"));
//! assert!(codecheck::isbn("ISBN 0-306-40615-2"));
//! ```
//!
#![deny(missing_docs)]

/// The shared weighted-modulo control-number check and its gate.
pub mod control;
/// Format registry and checksum parameter tables.
pub mod format;
/// Input normalization helpers.
pub mod normalize;
/// ISBN, ISSN, and ISMN entry points.
pub mod publishing;
/// EAN, UCC, and SSCC entry points.
pub mod trade;
/// Failure reasons reported by checked validation.
pub mod validation;

pub use control::{check_control_number, process};
pub use format::{Format, Scheme};
pub use publishing::{isbn, ismn, issn};
pub use trade::{ean13, ean14, ean8, sscc, ucc12};
pub use validation::ValidationError;
