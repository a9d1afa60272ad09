//! Header-level types of a VCF file.
//!
//! This module defines the vocabulary used by field declarations:
//! the value [`FieldType`], the cardinality [`Number`] and the seven
//! fixed [`MandatoryColumn`]s that precede the INFO column of every
//! data line.
//!
//! # YAML Format
//!
//! `Number` accepts either an integer or one of the VCF shorthand strings:
//! ```yaml
//! number: 1
//! number: "A"
//! number: "."
//! ```
//!
//! `FieldType` uses the VCF spelling:
//! ```yaml
//! type: Integer
//! type: Flag
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Label of the column that follows the mandatory columns.
pub const INFO_COLUMN: &str = "INFO";

/// Error returned when parsing a header-level type from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeParseError {
    /// Not a valid `Number` attribute
    #[error("invalid Number value: {0:?}")]
    Number(String),

    /// Not a valid `Type` attribute
    #[error("invalid Type value: {0:?}")]
    FieldType(String),

    /// Not one of the seven mandatory columns
    #[error("unknown mandatory column: {0:?}")]
    MandatoryColumn(String),
}

// ============================================================================
// FieldType
// ============================================================================

/// Declared value type of a column or INFO key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Flag,
    Character,
}

impl FieldType {
    /// The spelling used in `Type=` header attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Flag => "Flag",
            Self::Character => "Character",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(Self::String),
            "Integer" => Ok(Self::Integer),
            "Float" => Ok(Self::Float),
            "Flag" => Ok(Self::Flag),
            "Character" => Ok(Self::Character),
            other => Err(TypeParseError::FieldType(other.to_string())),
        }
    }
}

// ============================================================================
// Number
// ============================================================================

/// Declared cardinality (`Number=`) of a column or INFO key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// Fixed number of values; `Count(0)` marks a flag
    Count(u32),
    /// One value per alternate allele (`A`)
    PerAllele,
    /// One value per allele including the reference (`R`)
    PerAlleleWithRef,
    /// One value per genotype (`G`)
    PerGenotype,
    /// Unknown or varying number of values (`.`)
    Variable,
}

impl Number {
    /// Cardinality of a flag field.
    pub const FLAG: Number = Number::Count(0);

    pub fn is_flag(&self) -> bool {
        *self == Self::FLAG
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::PerAllele => f.write_str("A"),
            Self::PerAlleleWithRef => f.write_str("R"),
            Self::PerGenotype => f.write_str("G"),
            Self::Variable => f.write_str("."),
        }
    }
}

impl FromStr for Number {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::PerAllele),
            "R" => Ok(Self::PerAlleleWithRef),
            "G" => Ok(Self::PerGenotype),
            "." => Ok(Self::Variable),
            digits => digits
                .parse::<u32>()
                .map(Self::Count)
                .map_err(|_| TypeParseError::Number(digits.to_string())),
        }
    }
}

impl From<u32> for Number {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or one of \"A\", \"R\", \"G\", \".\"")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                u32::try_from(value)
                    .map(Number::Count)
                    .map_err(|_| E::custom(format!("Number out of range: {value}")))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                u32::try_from(value)
                    .map(Number::Count)
                    .map_err(|_| E::custom(format!("Number out of range: {value}")))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

// ============================================================================
// MandatoryColumn
// ============================================================================

/// One of the seven fixed columns preceding INFO in every data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MandatoryColumn {
    Chrom,
    Pos,
    Id,
    Ref,
    Alt,
    Qual,
    Filter,
}

impl MandatoryColumn {
    /// All mandatory columns in canonical order.
    pub const ALL: [MandatoryColumn; 7] = [
        Self::Chrom,
        Self::Pos,
        Self::Id,
        Self::Ref,
        Self::Alt,
        Self::Qual,
        Self::Filter,
    ];

    /// Column name as written in the header line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrom => "CHROM",
            Self::Pos => "POS",
            Self::Id => "ID",
            Self::Ref => "REF",
            Self::Alt => "ALT",
            Self::Qual => "QUAL",
            Self::Filter => "FILTER",
        }
    }
}

impl fmt::Display for MandatoryColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MandatoryColumn {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| TypeParseError::MandatoryColumn(s.to_string()))
    }
}
