//! EAN, UCC, and SSCC entry points.
//!
//! Each wrapper supplies its fixed [`Scheme`] to the shared gate; the
//! formats differ only in length and weight table.

use crate::control::process;
use crate::format::Scheme;

/// Validates an EAN-8 trade item number.
pub fn ean8(input: &str) -> bool {
    process(input, &Scheme::EAN8)
}

/// Validates an EAN-13 trade item number.
pub fn ean13(input: &str) -> bool {
    process(input, &Scheme::EAN13)
}

/// Validates an EAN-14 logistics number.
pub fn ean14(input: &str) -> bool {
    process(input, &Scheme::EAN14)
}

/// Validates a UCC-12 (UPC-A) trade item number.
pub fn ucc12(input: &str) -> bool {
    process(input, &Scheme::UCC12)
}

/// Validates an SSCC logistics unit number.
pub fn sscc(input: &str) -> bool {
    process(input, &Scheme::SSCC)
}
