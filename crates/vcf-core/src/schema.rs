//! Schema definitions for VCF fixture generation.
//!
//! A [`VcfSchema`] is loaded from YAML and declares the seven mandatory
//! columns, the INFO fields, the value rule of each, and an ordered list of
//! parts. Each part can swap the rule of any field before its rows are made.
//!
//! ```yaml
//! version: 1
//! fileformat: VCFv4.1
//! lines: 100
//! seed: 42
//!
//! mandatory:
//!   CHROM: { number: 1, type: Integer, rule: { type: static, value: 1 } }
//!   POS:   { number: 1, type: Integer, rule: { type: sequential, start: 100000, step: 1 } }
//!   QUAL:  { number: 1, type: Float,   rule: { type: range, start: 200.0, finish: 599.9 } }
//!   # ...
//!
//! info:
//!   - id: DP
//!     number: 1
//!     type: Integer
//!     rule: { type: range, start: 10, finish: 200 }
//!
//! parts:
//!   - lines: 100
//!   - changes:
//!       - field: DP
//!         rule: { type: one_of, values: [1, 2, 4] }
//! ```

use crate::types::{FieldType, MandatoryColumn, Number};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Rows produced by one part when no count is given.
pub const DEFAULT_VCF_CHUNK_SIZE: usize = 100;

/// Value of the `##fileformat=` line when none is configured.
pub const DEFAULT_VCF_FILE_FORMAT: &str = "VCFv4.1";

/// Decimal digits kept by float range rules unless configured otherwise.
pub const DEFAULT_ROUND_DIGITS: u32 = 4;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The same INFO key is declared twice
    #[error("INFO field declared more than once: {0}")]
    DuplicateInfoField(String),

    /// INFO field with an empty identifier
    #[error("INFO field with empty ID")]
    EmptyInfoId,
}

// ============================================================================
// Rule Configuration
// ============================================================================

/// One endpoint of a numeric range.
///
/// The YAML scalar decides the variant: `10` is an integer, `10.0` a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeBound {
    Integer(i64),
    Float(f64),
}

impl From<i64> for RangeBound {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RangeBound {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

fn default_step() -> i64 {
    1
}

/// Declarative value rule of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Uniform draw from `[start, finish]`
    Range {
        /// Lower bound (inclusive)
        start: RangeBound,
        /// Upper bound (inclusive)
        finish: RangeBound,
        /// Produce a list of this many independent draws
        #[serde(default, skip_serializing_if = "Option::is_none")]
        list_size: Option<usize>,
        /// Decimal digits kept by float draws
        #[serde(default, skip_serializing_if = "Option::is_none")]
        round_digits: Option<u32>,
    },

    /// Uniform pick from a set of values
    OneOf {
        /// Candidate values
        values: Vec<serde_yaml::Value>,
    },

    /// Counter starting at `start`, advancing by `step` on every draw
    Sequential {
        /// First value
        #[serde(default)]
        start: i64,
        /// Increment
        #[serde(default = "default_step")]
        step: i64,
    },

    /// Always the same value; an omitted value yields the empty value
    Static {
        /// The static value to use
        #[serde(default)]
        value: serde_yaml::Value,
    },
}

// ============================================================================
// Field Definitions
// ============================================================================

fn default_number() -> Number {
    Number::Count(1)
}

/// Definition of one mandatory column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryFieldDefinition {
    /// Declared cardinality
    #[serde(default = "default_number")]
    pub number: Number,

    /// Declared value type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Value rule
    pub rule: RuleConfig,
}

/// Definition of one INFO key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoFieldDefinition {
    /// INFO key
    pub id: String,

    /// Declared cardinality
    #[serde(default = "default_number")]
    pub number: Number,

    /// Declared value type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Header description; looked up from the built-in table when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value rule
    pub rule: RuleConfig,
}

/// Rule replacement applied at the start of a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleChange {
    /// Mandatory column name or INFO key
    pub field: String,

    /// New value rule
    pub rule: RuleConfig,
}

/// One batch of rows generated under the rules in force at that point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    /// Optional label used in logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Row count; the schema-level `lines` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,

    /// Rule replacements applied before generating this part
    #[serde(default)]
    pub changes: Vec<RuleChange>,
}

fn default_version() -> u32 {
    1
}

fn default_lines() -> usize {
    DEFAULT_VCF_CHUNK_SIZE
}

/// Full generation schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcfSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// `##fileformat=` value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fileformat: Option<String>,

    /// Default rows per part
    #[serde(default = "default_lines")]
    pub lines: usize,

    /// Seed for reproducible output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Mandatory column definitions
    #[serde(default)]
    pub mandatory: BTreeMap<MandatoryColumn, MandatoryFieldDefinition>,

    /// INFO field definitions
    #[serde(default)]
    pub info: Vec<InfoFieldDefinition>,

    /// Parts generated in order; one default part when empty
    #[serde(default)]
    pub parts: Vec<PartDefinition>,
}

impl VcfSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: VcfSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.info {
            if field.id.is_empty() {
                return Err(SchemaError::EmptyInfoId);
            }
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateInfoField(field.id.clone()));
            }
        }
        Ok(())
    }

    /// Get an INFO field definition by key.
    pub fn get_info(&self, id: &str) -> Option<&InfoFieldDefinition> {
        self.info.iter().find(|f| f.id == id)
    }

    /// Get all INFO keys in declaration order.
    pub fn info_ids(&self) -> Vec<&str> {
        self.info.iter().map(|f| f.id.as_str()).collect()
    }

    /// Parts to generate; a single default part when none are declared.
    pub fn effective_parts(&self) -> Vec<PartDefinition> {
        if self.parts.is_empty() {
            vec![PartDefinition::default()]
        } else {
            self.parts.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SCHEMA: &str = r#"
version: 1
fileformat: VCFv4.2
lines: 10
seed: 7

mandatory:
  CHROM: { type: Integer, rule: { type: static, value: 1 } }
  POS:
    number: 1
    type: Integer
    rule: { type: sequential, start: 100000 }
  QUAL:
    type: Float
    rule: { type: range, start: 200.0, finish: 599.9 }

info:
  - id: DP
    type: Integer
    rule: { type: range, start: 10, finish: 200 }
  - id: HS
    number: 0
    type: Flag
    rule: { type: static }
  - id: OID
    number: "."
    type: String
    description: List of original Hotspot IDs
    rule: { type: static, value: "." }

parts:
  - name: first
  - lines: 5
    changes:
      - field: DP
        rule: { type: one_of, values: [1, 2, 4] }
"#;

    #[test]
    fn test_parse_schema() {
        let schema = VcfSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.fileformat.as_deref(), Some("VCFv4.2"));
        assert_eq!(schema.lines, 10);
        assert_eq!(schema.seed, Some(7));
        assert_eq!(schema.mandatory.len(), 3);
        assert_eq!(schema.info_ids(), vec!["DP", "HS", "OID"]);
        assert_eq!(schema.parts.len(), 2);
    }

    #[test]
    fn test_defaults() {
        let schema = VcfSchema::from_yaml("mandatory: {}\n").unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.lines, DEFAULT_VCF_CHUNK_SIZE);
        assert!(schema.fileformat.is_none());
        assert!(schema.seed.is_none());
        assert_eq!(schema.effective_parts(), vec![PartDefinition::default()]);
    }

    #[test]
    fn test_range_bound_typing() {
        let schema = VcfSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        let qual = &schema.mandatory[&MandatoryColumn::Qual];
        assert_eq!(
            qual.rule,
            RuleConfig::Range {
                start: RangeBound::Float(200.0),
                finish: RangeBound::Float(599.9),
                list_size: None,
                round_digits: None,
            }
        );

        let dp = schema.get_info("DP").unwrap();
        assert!(matches!(
            dp.rule,
            RuleConfig::Range {
                start: RangeBound::Integer(10),
                finish: RangeBound::Integer(200),
                ..
            }
        ));
    }

    #[test]
    fn test_field_attributes() {
        let schema = VcfSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        let hs = schema.get_info("HS").unwrap();
        assert_eq!(hs.number, Number::FLAG);
        assert_eq!(hs.field_type, FieldType::Flag);
        assert_eq!(hs.rule, RuleConfig::Static { value: serde_yaml::Value::Null });

        let oid = schema.get_info("OID").unwrap();
        assert_eq!(oid.number, Number::Variable);
        assert_eq!(oid.description.as_deref(), Some("List of original Hotspot IDs"));

        let chrom = &schema.mandatory[&MandatoryColumn::Chrom];
        assert_eq!(chrom.number, Number::Count(1));

        let pos = &schema.mandatory[&MandatoryColumn::Pos];
        assert_eq!(pos.rule, RuleConfig::Sequential { start: 100000, step: 1 });
    }

    #[test]
    fn test_part_changes() {
        let schema = VcfSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(schema.parts[0].name.as_deref(), Some("first"));
        assert_eq!(schema.parts[0].lines, None);
        assert_eq!(schema.parts[1].lines, Some(5));
        assert_eq!(schema.parts[1].changes[0].field, "DP");
        assert!(matches!(
            schema.parts[1].changes[0].rule,
            RuleConfig::OneOf { ref values } if values.len() == 3
        ));
    }

    #[test]
    fn test_duplicate_info_rejected() {
        let yaml = r#"
info:
  - { id: DP, type: Integer, rule: { type: static, value: 1 } }
  - { id: DP, type: Integer, rule: { type: static, value: 2 } }
"#;
        let result = VcfSchema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::DuplicateInfoField(id)) if id == "DP"));
    }

    #[test]
    fn test_unknown_rule_type_rejected() {
        let yaml = r#"
info:
  - { id: DP, type: Integer, rule: { type: gaussian } }
"#;
        assert!(matches!(
            VcfSchema::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }

    #[test]
    fn test_unknown_mandatory_column_rejected() {
        let yaml = r#"
mandatory:
  FORMAT: { type: String, rule: { type: static, value: GT } }
"#;
        assert!(VcfSchema::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.yaml");
        fs::write(&path, SAMPLE_SCHEMA).unwrap();

        let schema = VcfSchema::from_file(&path).unwrap();
        assert_eq!(schema.info.len(), 3);

        let missing = temp_dir.path().join("missing.yaml");
        assert!(matches!(
            VcfSchema::from_file(&missing),
            Err(SchemaError::IoError(_))
        ));
    }
}
