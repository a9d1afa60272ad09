//! Field registry and row generator.

use crate::error::GeneratorError;
use crate::field::{ChoiceSource, InfoField, MandatoryField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};
use vcf_core::{
    DataRow, FieldType, FieldValue, InfoDescriptions, MandatoryColumn, Number,
    DEFAULT_VCF_CHUNK_SIZE, DEFAULT_VCF_FILE_FORMAT,
};

/// Prefix accepted in front of INFO keys by lookups.
const INFO_PREFIX: &str = "INFO_";

/// Registry of mandatory and INFO field metadata plus the rows generated so far.
///
/// Fields are declared first, then [`VcfData::make`] appends batches of rows.
/// Replacing a field's rule between batches changes only later rows, which
/// is how one dataset is built out of several differing parts.
///
/// All producers draw from one RNG owned by the registry. With a seed the
/// output is reproducible across runs.
pub struct VcfData {
    fileformat: String,
    chunk_size: usize,
    mandatory: HashMap<MandatoryColumn, MandatoryField>,
    /// Keyed by INFO id; iteration order is the render order
    info: BTreeMap<String, InfoField>,
    rows: Vec<DataRow>,
    rng: StdRng,
    descriptions: InfoDescriptions,
}

impl VcfData {
    /// Create an empty registry with the default batch size, file format and
    /// the built-in INFO description table, seeded from the OS.
    pub fn new() -> Self {
        Self {
            fileformat: DEFAULT_VCF_FILE_FORMAT.to_string(),
            chunk_size: DEFAULT_VCF_CHUNK_SIZE,
            mandatory: HashMap::new(),
            info: BTreeMap::new(),
            rows: Vec::new(),
            rng: StdRng::from_os_rng(),
            descriptions: InfoDescriptions::builtin(),
        }
    }

    /// Set the default number of rows per [`VcfData::make`] call.
    pub fn with_chunk_size(mut self, lines: usize) -> Self {
        self.chunk_size = lines;
        self
    }

    /// Set the `##fileformat=` value.
    pub fn with_fileformat(mut self, fileformat: impl Into<String>) -> Self {
        self.fileformat = fileformat.into();
        self
    }

    /// Seed the RNG for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Use `descriptions` for INFO fields defined from now on.
    pub fn with_descriptions(mut self, descriptions: InfoDescriptions) -> Self {
        self.descriptions = descriptions;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn fileformat(&self) -> &str {
        &self.fileformat
    }

    /// Number of rows generated so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in generation order.
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// INFO keys in ascending order.
    pub fn info_fields(&self) -> Vec<&str> {
        self.info.keys().map(String::as_str).collect()
    }

    /// INFO field metadata in ascending key order.
    pub fn info_metadata(&self) -> impl Iterator<Item = &InfoField> {
        self.info.values()
    }

    /// INFO field by key; an `INFO_` prefix is ignored.
    pub fn info_field(&self, id: &str) -> Option<&InfoField> {
        self.info.get(strip_info_prefix(id))
    }

    pub fn mandatory_field(&self, column: MandatoryColumn) -> Option<&MandatoryField> {
        self.mandatory.get(&column)
    }

    /// Register or overwrite a mandatory column.
    pub fn define_mandatory_field(
        &mut self,
        column: MandatoryColumn,
        source: impl Into<ChoiceSource>,
        number: Number,
        field_type: FieldType,
    ) {
        debug!("Defining mandatory field {column}");
        self.mandatory.insert(
            column,
            MandatoryField::new(column, source, number, field_type),
        );
    }

    /// Register or overwrite an INFO field.
    pub fn define_info_field(
        &mut self,
        id: impl Into<String>,
        source: impl Into<ChoiceSource>,
        number: Number,
        field_type: FieldType,
        description: Option<&str>,
    ) {
        let id = id.into();
        debug!("Defining INFO field {id}");
        let field = InfoField::new(
            id.clone(),
            source,
            number,
            field_type,
            description,
            &self.descriptions,
        );
        self.info.insert(id, field);
    }

    /// Replace the rule of a field.
    ///
    /// `field` is looked up among the defined mandatory columns first, then
    /// among INFO keys. Fails with [`GeneratorError::UnknownField`] when
    /// neither knows it, leaving every binding unchanged.
    pub fn change_choice_func(
        &mut self,
        field: &str,
        source: impl Into<ChoiceSource>,
    ) -> Result<(), GeneratorError> {
        if let Ok(column) = field.parse::<MandatoryColumn>() {
            if let Some(metadata) = self.mandatory.get_mut(&column) {
                debug!("Changing rule of mandatory field {column}");
                metadata.set_choice_func(source);
                return Ok(());
            }
        }

        match self.info.get_mut(strip_info_prefix(field)) {
            Some(metadata) => {
                debug!("Changing rule of INFO field {}", metadata.id());
                metadata.set_choice_func(source);
                Ok(())
            }
            None => Err(GeneratorError::UnknownField(field.to_string())),
        }
    }

    /// Check that row generation is permitted.
    pub fn check_ready(&self) -> Result<(), GeneratorError> {
        if self.mandatory.is_empty() {
            return Err(GeneratorError::NoMandatoryFields);
        }
        if self.info.is_empty() {
            return Err(GeneratorError::NoInfoFields);
        }
        if let Some(column) = MandatoryColumn::ALL
            .into_iter()
            .find(|column| !self.mandatory.contains_key(column))
        {
            return Err(GeneratorError::MissingMandatoryField(column));
        }
        Ok(())
    }

    /// Generate `lines` rows (the chunk size when `None`) and append them.
    ///
    /// Either the whole batch is appended or, on error, none of it.
    ///
    /// REF and ALT are redrawn together until they differ. The loop has no
    /// bound: rules that can only yield equal REF and ALT never terminate.
    pub fn make(&mut self, lines: Option<usize>) -> Result<usize, GeneratorError> {
        self.check_ready()?;

        let count = lines.unwrap_or(self.chunk_size);
        let first_index = self.rows.len() as u64;
        let mut batch = Vec::with_capacity(count);
        for offset in 0..count {
            batch.push(self.next_row(first_index + offset as u64)?);
        }

        self.rows.extend(batch);
        debug!(
            "Generated {} rows ({} rows total)",
            count,
            self.rows.len()
        );
        Ok(count)
    }

    fn next_row(&mut self, index: u64) -> Result<DataRow, GeneratorError> {
        let Self {
            mandatory,
            info,
            rng,
            ..
        } = self;

        let mut draw = |column: MandatoryColumn| -> Result<FieldValue, GeneratorError> {
            mandatory
                .get_mut(&column)
                .map(|field| field.choice_value(&mut *rng))
                .ok_or(GeneratorError::MissingMandatoryField(column))
        };

        let (ref_value, alt_value) = loop {
            let ref_value = draw(MandatoryColumn::Ref)?;
            let alt_value = draw(MandatoryColumn::Alt)?;
            if ref_value != alt_value {
                break (ref_value, alt_value);
            }
            trace!("REF equals ALT ({ref_value}), redrawing");
        };

        let mut builder = DataRow::builder(index)
            .mandatory(MandatoryColumn::Ref, ref_value)
            .mandatory(MandatoryColumn::Alt, alt_value);

        for column in MandatoryColumn::ALL {
            if matches!(column, MandatoryColumn::Ref | MandatoryColumn::Alt) {
                continue;
            }
            builder = builder.mandatory(column, draw(column)?);
        }

        for (id, field) in info.iter_mut() {
            builder = builder.info(id.clone(), field.choice_value(&mut *rng));
        }

        Ok(builder.build())
    }
}

impl Default for VcfData {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_info_prefix(id: &str) -> &str {
    id.strip_prefix(INFO_PREFIX).unwrap_or(id)
}
