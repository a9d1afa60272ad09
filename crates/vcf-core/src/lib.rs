//! Core types for the vcf-factory fixture generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`FieldType`], [`Number`], [`MandatoryColumn`] - header-level vocabulary
//! - [`FieldValue`] - one generated value (scalar or list)
//! - [`DataRow`] - one generated variant record
//! - [`InfoDescriptions`] - lookup table of well-known INFO key descriptions
//! - [`VcfSchema`] - generation schema loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! vcf-core (this crate)
//!    │
//!    ├─── vcf-generator   (value rules, field metadata, row generation)
//!    │
//!    └─── vcf-populate    (VCF text rendering and file output)
//! ```

pub mod descriptions;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use descriptions::{InfoDescriptions, DEFAULT_INFO_DESCRIPTION};
pub use schema::{
    InfoFieldDefinition, MandatoryFieldDefinition, PartDefinition, RangeBound, RuleChange,
    RuleConfig, SchemaError, VcfSchema, DEFAULT_ROUND_DIGITS, DEFAULT_VCF_CHUNK_SIZE,
    DEFAULT_VCF_FILE_FORMAT,
};
pub use types::{FieldType, MandatoryColumn, Number, TypeParseError, INFO_COLUMN};
pub use values::{DataRow, DataRowBuilder, FieldValue};
