//! Generated values and data rows.
//!
//! A [`FieldValue`] is what one value rule yields for one field of one row.
//! A [`DataRow`] collects the values of every mandatory column and every
//! INFO key for a single variant record.

use crate::types::MandatoryColumn;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One generated value: a scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer scalar
    Integer(i64),

    /// Floating point scalar
    Float(f64),

    /// Text scalar
    String(String),

    /// Fixed-size list of values, rendered comma-joined
    List(Vec<FieldValue>),

    /// No value; renders as the empty string
    Empty,
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Render a float so that integral values keep a trailing `.0`.
fn format_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        write!(f, "{text}.0")
    } else {
        f.write_str(&text)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => format_float(*v, f),
            Self::String(s) => f.write_str(s),
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::Empty => Ok(()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// DataRow
// ============================================================================

/// One generated variant record.
///
/// Mandatory columns and INFO keys live in separate maps, so an INFO key
/// named like a mandatory column (e.g. `ID`) never collides with it.
/// Rows are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRow {
    /// Position of the row in its dataset
    index: u64,

    #[serde(flatten)]
    mandatory: BTreeMap<MandatoryColumn, FieldValue>,

    #[serde(rename = "INFO")]
    info: BTreeMap<String, FieldValue>,
}

impl DataRow {
    /// Start building the row at `index`.
    pub fn builder(index: u64) -> DataRowBuilder {
        DataRowBuilder {
            row: DataRow {
                index,
                mandatory: BTreeMap::new(),
                info: BTreeMap::new(),
            },
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    /// Value of a mandatory column.
    pub fn get(&self, column: MandatoryColumn) -> Option<&FieldValue> {
        self.mandatory.get(&column)
    }

    /// Value of an INFO key.
    pub fn get_info(&self, id: &str) -> Option<&FieldValue> {
        self.info.get(id)
    }

    /// INFO values in ascending key order.
    pub fn info(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.info.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Builder for [`DataRow`].
#[derive(Debug)]
pub struct DataRowBuilder {
    row: DataRow,
}

impl DataRowBuilder {
    pub fn mandatory(mut self, column: MandatoryColumn, value: FieldValue) -> Self {
        self.row.mandatory.insert(column, value);
        self
    }

    pub fn info(mut self, id: impl Into<String>, value: FieldValue) -> Self {
        self.row.info.insert(id.into(), value);
        self
    }

    pub fn build(self) -> DataRow {
        self.row
    }
}
