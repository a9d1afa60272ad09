//! Command handlers for the `vcf-factory` binary.

use crate::build::{build_vcf_data, run_parts};
use anyhow::Context;
use vcf_core::VcfSchema;
use vcf_populate::{PopulateMetrics, VcfPopulateArgs, VcfPopulator, VcfRemoveArgs};

/// Run the generate command.
///
/// Returns `None` for a dry run, which generates rows but writes nothing.
pub fn run_generate(args: &VcfPopulateArgs) -> anyhow::Result<Option<PopulateMetrics>> {
    let schema = VcfSchema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;

    tracing::info!(
        "Generating {} part(s) with {} INFO fields (seed={:?})",
        schema.effective_parts().len(),
        schema.info.len(),
        args.seed.or(schema.seed)
    );

    let mut data = build_vcf_data(&schema, args.seed, args.lines)?;
    let total = run_parts(&mut data, &schema)?;

    if args.dry_run {
        tracing::info!("Dry run: generated {total} rows, nothing written");
        return Ok(None);
    }

    let populator = VcfPopulator::new();
    let metrics = populator
        .write(&data, &args.output)
        .with_context(|| format!("Failed to write VCF file {:?}", args.output))?;

    if let Some(path) = &args.rows_json {
        populator
            .write_rows_json(&data, path)
            .with_context(|| format!("Failed to write rows to {path:?}"))?;
        tracing::info!("Dumped {} rows to {:?}", data.len(), path);
    }

    Ok(Some(metrics))
}

/// Run the remove command.
pub fn run_remove(args: &VcfRemoveArgs) -> anyhow::Result<()> {
    let removed = VcfPopulator::remove(&args.output)
        .with_context(|| format!("Failed to remove {:?}", args.output))?;
    if !removed {
        tracing::info!("Nothing to remove at {:?}", args.output);
    }
    Ok(())
}
