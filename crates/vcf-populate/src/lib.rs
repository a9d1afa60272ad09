//! VCF file populator.
//!
//! This crate renders the rows accumulated by the vcf-generator crate as VCF
//! text and writes them to disk.
//!
//! # Example
//!
//! ```ignore
//! use vcf_populate::VcfPopulator;
//!
//! data.make(Some(1000))?;
//! let metrics = VcfPopulator::new().write(&data, "/path/to/output.vcf")?;
//! ```

pub mod args;
mod error;
mod populator;
mod renderer;

pub use args::{VcfPopulateArgs, VcfRemoveArgs};
pub use error::VcfPopulatorError;
pub use populator::{PopulateMetrics, VcfPopulator, DEFAULT_BUFFER_SIZE};
pub use renderer::{VcfRenderer, FILE_DATE_FORMAT};
