use serde::{Deserialize, Serialize};
use std::fmt;

use crate::control;
use crate::publishing;
use crate::validation::ValidationError;

/// Fixed checksum parameters for one code format.
///
/// The weight table covers every position except the final control number,
/// so `weights.len()` is always `length - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    /// Required length of the normalized code.
    pub length: usize,
    /// Positional multipliers for the digits before the control number.
    pub weights: &'static [u32],
    /// Modulus of the weighted sum.
    pub modulo: u32,
    /// Constant the remainder is subtracted from.
    pub subtract: u32,
}

impl Scheme {
    /// ISSN: eight characters, descending weights, mod-11.
    pub const ISSN: Scheme = Scheme {
        length: 8,
        weights: &[8, 7, 6, 5, 4, 3, 2],
        modulo: 11,
        subtract: 11,
    };
    /// ISMN after the `M` to `3` mapping: ten digits, mod-10.
    pub const ISMN: Scheme = Scheme {
        length: 10,
        weights: &[3, 1, 3, 1, 3, 1, 3, 1, 3],
        modulo: 10,
        subtract: 10,
    };
    /// EAN-8 trade item number.
    pub const EAN8: Scheme = Scheme {
        length: 8,
        weights: &[3, 1, 3, 1, 3, 1, 3],
        modulo: 10,
        subtract: 10,
    };
    /// EAN-13 trade item number.
    pub const EAN13: Scheme = Scheme {
        length: 13,
        weights: &[1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3],
        modulo: 10,
        subtract: 10,
    };
    /// EAN-14 logistics number.
    pub const EAN14: Scheme = Scheme {
        length: 14,
        weights: &[3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3],
        modulo: 10,
        subtract: 10,
    };
    /// UCC-12 (UPC-A) trade item number.
    pub const UCC12: Scheme = Scheme {
        length: 12,
        weights: &[3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3],
        modulo: 10,
        subtract: 10,
    };
    /// SSCC logistics unit number.
    pub const SSCC: Scheme = Scheme {
        length: 18,
        weights: &[3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3],
        modulo: 10,
        subtract: 10,
    };
}

/// Identifier formats understood by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// ISBN-10 book number, carrying its `ISBN` marker.
    Isbn,
    /// ISSN serial number.
    Issn,
    /// ISMN printed-music number.
    Ismn,
    /// EAN-8 trade item number.
    #[serde(rename = "ean-8")]
    Ean8,
    /// EAN-13 trade item number.
    #[serde(rename = "ean-13")]
    Ean13,
    /// EAN-14 logistics number.
    #[serde(rename = "ean-14")]
    Ean14,
    /// UCC-12 (UPC-A) trade item number.
    #[serde(rename = "ucc-12")]
    Ucc12,
    /// SSCC logistics unit number.
    Sscc,
}

impl Format {
    /// All formats, in declaration order.
    pub const ALL: [Format; 8] = [
        Format::Isbn,
        Format::Issn,
        Format::Ismn,
        Format::Ean8,
        Format::Ean13,
        Format::Ean14,
        Format::Ucc12,
        Format::Sscc,
    ];

    /// Checks `input` against this format, reporting the gate that failed.
    pub fn validate(self, input: &str) -> Result<(), ValidationError> {
        match self {
            Format::Isbn => publishing::validate_isbn(input),
            Format::Issn => publishing::validate_issn(input),
            Format::Ismn => publishing::validate_ismn(input),
            Format::Ean8 => control::run(input, &Scheme::EAN8),
            Format::Ean13 => control::run(input, &Scheme::EAN13),
            Format::Ean14 => control::run(input, &Scheme::EAN14),
            Format::Ucc12 => control::run(input, &Scheme::UCC12),
            Format::Sscc => control::run(input, &Scheme::SSCC),
        }
    }

    /// Boolean form of [`Format::validate`].
    pub fn is_valid(self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    /// Checksum parameters for the formats that share the generic checker.
    ///
    /// ISBN-10 keeps its inline mod-11 divisibility test and has no scheme.
    pub fn scheme(self) -> Option<&'static Scheme> {
        match self {
            Format::Isbn => None,
            Format::Issn => Some(&Scheme::ISSN),
            Format::Ismn => Some(&Scheme::ISMN),
            Format::Ean8 => Some(&Scheme::EAN8),
            Format::Ean13 => Some(&Scheme::EAN13),
            Format::Ean14 => Some(&Scheme::EAN14),
            Format::Ucc12 => Some(&Scheme::UCC12),
            Format::Sscc => Some(&Scheme::SSCC),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Isbn => "ISBN",
            Format::Issn => "ISSN",
            Format::Ismn => "ISMN",
            Format::Ean8 => "EAN-8",
            Format::Ean13 => "EAN-13",
            Format::Ean14 => "EAN-14",
            Format::Ucc12 => "UCC-12",
            Format::Sscc => "SSCC",
        };
        f.write_str(name)
    }
}
