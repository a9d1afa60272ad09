//! Value rules, field metadata and row generation for vcf-factory.
//!
//! This crate provides [`VcfData`], a registry of mandatory-column and INFO
//! field metadata that synthesizes VCF data rows from declarative value rules.
//!
//! # Architecture
//!
//! ```text
//! RuleConfig / ValueRule / SequenceFactory
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  FieldMetadata       │  spec (ID, Number, Type, Description)
//! │  (Mandatory / Info)  │  + active ValueRule
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │  VcfData             │  mandatory + INFO fields
//! │                      │  rng (StdRng), rows
//! └──────────┬───────────┘
//!            │ make()
//!            ▼
//!    DataRow { index, CHROM..FILTER, INFO }
//! ```
//!
//! # Example
//!
//! ```rust
//! use vcf_core::{FieldType, FieldValue, MandatoryColumn, Number};
//! use vcf_generator::{generator_factory, one_of_rule, VcfData};
//!
//! let mut data = VcfData::new().with_seed(42);
//! let bases: Vec<FieldValue> = ["A", "C", "G", "T"].into_iter().map(FieldValue::from).collect();
//!
//! for column in MandatoryColumn::ALL {
//!     match column {
//!         MandatoryColumn::Pos => data.define_mandatory_field(
//!             column, generator_factory(100000, 1), Number::Count(1), FieldType::Integer),
//!         MandatoryColumn::Ref | MandatoryColumn::Alt => data.define_mandatory_field(
//!             column, one_of_rule(bases.clone()).unwrap(), Number::Count(1), FieldType::String),
//!         _ => data.define_mandatory_field(
//!             column, FieldValue::from("."), Number::Count(1), FieldType::String),
//!     }
//! }
//! data.define_info_field("X", FieldValue::Integer(5), Number::Count(1), FieldType::Integer, None);
//!
//! data.make(Some(3)).unwrap();
//! assert_eq!(data.len(), 3);
//! ```
//!
//! # Rules
//!
//! - `range` - uniform integer or rounded float in `[start, finish]`, optionally a list
//! - `one_of` - uniform pick from a set of values
//! - `sequential` - counter advancing by a fixed step, shared across batches
//! - `static` - constant value

pub mod error;
pub mod field;
pub mod generators;
pub mod registry;

// Re-exports for convenience
pub use error::GeneratorError;
pub use field::{ChoiceSource, FieldMetadata, FieldSpec, InfoField, MandatoryField};
pub use generators::{
    choice_rules_factory, generator_factory, one_of_rule, range_rule, SequenceFactory,
    ValueGenerator, ValueRule, MAX_ROUND_DIGITS,
};
pub use registry::VcfData;
