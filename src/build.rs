//! Building a [`VcfData`] registry from a YAML schema and running its parts.

use anyhow::Context;
use vcf_core::{VcfSchema, DEFAULT_VCF_FILE_FORMAT};
use vcf_generator::{choice_rules_factory, VcfData};

/// Create a registry with every field the schema declares.
///
/// `seed` and `lines` override the schema's own values when given.
pub fn build_vcf_data(
    schema: &VcfSchema,
    seed: Option<u64>,
    lines: Option<usize>,
) -> anyhow::Result<VcfData> {
    let fileformat = schema
        .fileformat
        .as_deref()
        .unwrap_or(DEFAULT_VCF_FILE_FORMAT);
    let mut data = VcfData::new()
        .with_fileformat(fileformat)
        .with_chunk_size(lines.unwrap_or(schema.lines));

    if let Some(seed) = seed.or(schema.seed) {
        tracing::debug!("Seeding generator with {seed}");
        data = data.with_seed(seed);
    }

    for (&column, definition) in &schema.mandatory {
        let source = choice_rules_factory(&definition.rule)
            .with_context(|| format!("Invalid rule for mandatory field {column}"))?;
        data.define_mandatory_field(column, source, definition.number, definition.field_type);
    }

    for definition in &schema.info {
        let source = choice_rules_factory(&definition.rule)
            .with_context(|| format!("Invalid rule for INFO field {}", definition.id))?;
        data.define_info_field(
            definition.id.as_str(),
            source,
            definition.number,
            definition.field_type,
            definition.description.as_deref(),
        );
    }

    Ok(data)
}

/// Generate every part of the schema in order and return the rows added.
///
/// Each part first applies its rule changes, then appends its rows. Rows
/// from earlier parts keep the values drawn under the earlier rules.
pub fn run_parts(data: &mut VcfData, schema: &VcfSchema) -> anyhow::Result<usize> {
    let mut total = 0;
    for (number, part) in schema.effective_parts().iter().enumerate() {
        let label = part
            .name
            .clone()
            .unwrap_or_else(|| format!("part {}", number + 1));

        for change in &part.changes {
            let source = choice_rules_factory(&change.rule)
                .with_context(|| format!("Invalid rule for field {} in {label}", change.field))?;
            data.change_choice_func(&change.field, source)
                .with_context(|| format!("Failed to apply rule change in {label}"))?;
        }

        let rows = data
            .make(part.lines)
            .with_context(|| format!("Failed to generate rows for {label}"))?;
        tracing::info!("Generated {label}: {rows} rows");
        total += rows;
    }
    Ok(total)
}
