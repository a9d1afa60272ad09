//! Error types for value rules and row generation.

use thiserror::Error;
use vcf_core::MandatoryColumn;

/// Configuration errors raised while building rules or generating rows.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// `make` called before any mandatory column was defined
    #[error("No mandatory fields defined")]
    NoMandatoryFields,

    /// `make` called before any INFO field was defined
    #[error("No INFO fields defined")]
    NoInfoFields,

    /// One of the seven mandatory columns is not defined
    #[error("Mandatory field <{0}> is not defined")]
    MissingMandatoryField(MandatoryColumn),

    /// Range bounds of different numeric types
    #[error("Invalid range: bounds {start} and {finish} must both be integers or both floats")]
    MismatchedRange { start: String, finish: String },

    /// Range with `start > finish`
    #[error("Invalid range: start {start} is greater than finish {finish}")]
    InvertedRange { start: String, finish: String },

    /// Float range with an infinite bound or an infinite span
    #[error("Invalid range: bounds {start} and {finish} must be finite with a finite span")]
    NonFiniteRange { start: String, finish: String },

    /// Rounding precision beyond what f64 carries
    #[error("Invalid round_digits {digits}: at most {max} decimal places are supported")]
    InvalidRoundDigits { digits: u32, max: u32 },

    /// Choice rule without candidates
    #[error("Invalid choice rule: no values to choose from")]
    EmptyChoiceSet,

    /// Value with no VCF rendering
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Identifier known to neither namespace
    #[error("Unknown field <{0}>")]
    UnknownField(String),
}
