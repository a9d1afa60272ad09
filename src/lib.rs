//! vcf-factory library
//!
//! Synthetic VCF fixture generation: a YAML schema declares how each of the
//! seven mandatory columns and every INFO key gets its values, and a list of
//! parts that switch rules between batches of rows.
//!
//! # Crates
//!
//! - `vcf_core` - header vocabulary, values, rows and the YAML schema
//! - `vcf_generator` - value rules, field metadata and the `VcfData` registry
//! - `vcf_populate` - VCF rendering and file output
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate a VCF file from a schema
//! vcf-factory generate --schema tests/fixtures/vcf_schema.yaml --output out.vcf --seed 42
//!
//! # Remove it again
//! vcf-factory remove --output out.vcf
//! ```

pub mod build;
pub mod commands;

pub use build::{build_vcf_data, run_parts};
pub use commands::{run_generate, run_remove};

pub use vcf_core::VcfSchema;
pub use vcf_generator::VcfData;
pub use vcf_populate::{PopulateMetrics, VcfPopulator, VcfRenderer};
