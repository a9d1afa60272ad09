//! CLI argument definitions for the VCF populator.

use clap::Args;
use std::path::PathBuf;

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct VcfPopulateArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Output VCF file (overwritten if it exists)
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Random seed for deterministic generation (overrides the schema seed)
    #[arg(long, env = "VCF_FACTORY_SEED")]
    pub seed: Option<u64>,

    /// Rows per part (overrides the schema `lines`)
    #[arg(long)]
    pub lines: Option<usize>,

    /// Also dump the generated rows as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub rows_json: Option<PathBuf>,

    /// Validate the schema and generate rows without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments of the `remove` command.
#[derive(Args, Clone, Debug)]
pub struct VcfRemoveArgs {
    /// VCF file to delete
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}
