//! Field metadata: one column or INFO key bound to its active value rule.

use crate::generators::{SequenceFactory, ValueGenerator, ValueRule};
use rand::Rng;
use vcf_core::{FieldType, FieldValue, InfoDescriptions, MandatoryColumn, Number};

/// Where a field's values come from.
///
/// Exactly one source is active per field. A `Generator` is instantiated
/// into a fresh counter each time it is installed.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceSource {
    /// An explicit rule
    Rule(ValueRule),
    /// A sequential generator constructor
    Generator(SequenceFactory),
    /// A constant default, possibly [`FieldValue::Empty`]
    Default(FieldValue),
}

impl ChoiceSource {
    fn into_rule(self) -> ValueRule {
        match self {
            Self::Rule(rule) => rule,
            Self::Generator(factory) => factory.instantiate(),
            Self::Default(value) => ValueRule::Constant { value },
        }
    }
}

impl Default for ChoiceSource {
    fn default() -> Self {
        Self::Default(FieldValue::Empty)
    }
}

impl From<ValueRule> for ChoiceSource {
    fn from(rule: ValueRule) -> Self {
        Self::Rule(rule)
    }
}

impl From<SequenceFactory> for ChoiceSource {
    fn from(factory: SequenceFactory) -> Self {
        Self::Generator(factory)
    }
}

impl From<FieldValue> for ChoiceSource {
    fn from(value: FieldValue) -> Self {
        Self::Default(value)
    }
}

/// Rendering attributes of a column or INFO key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: String,
    pub number: Number,
    pub field_type: FieldType,
    pub description: Option<String>,
}

/// A field spec bound to exactly one active value rule.
#[derive(Debug, Clone)]
pub struct FieldMetadata {
    spec: FieldSpec,
    rule: ValueRule,
}

impl FieldMetadata {
    pub fn new(spec: FieldSpec, source: impl Into<ChoiceSource>) -> Self {
        Self {
            spec,
            rule: source.into().into_rule(),
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The active rule.
    pub fn rule(&self) -> &ValueRule {
        &self.rule
    }

    /// Draw the next value from the active rule.
    pub fn choice_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FieldValue {
        self.rule.generate(rng)
    }

    /// Replace the active rule. Values drawn earlier are unaffected.
    pub fn set_choice_func(&mut self, source: impl Into<ChoiceSource>) {
        self.rule = source.into().into_rule();
    }
}

/// Metadata of one mandatory column, e.g. CHROM or QUAL.
#[derive(Debug, Clone)]
pub struct MandatoryField {
    column: MandatoryColumn,
    metadata: FieldMetadata,
}

impl MandatoryField {
    pub fn new(
        column: MandatoryColumn,
        source: impl Into<ChoiceSource>,
        number: Number,
        field_type: FieldType,
    ) -> Self {
        let spec = FieldSpec {
            id: column.as_str().to_string(),
            number,
            field_type,
            description: None,
        };
        Self {
            column,
            metadata: FieldMetadata::new(spec, source),
        }
    }

    pub fn column(&self) -> MandatoryColumn {
        self.column
    }

    pub fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    pub fn choice_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FieldValue {
        self.metadata.choice_value(rng)
    }

    pub fn set_choice_func(&mut self, source: impl Into<ChoiceSource>) {
        self.metadata.set_choice_func(source);
    }
}

/// Metadata of one INFO key.
///
/// The description is resolved once at construction: explicit text, else
/// the lookup table entry, else the default placeholder.
#[derive(Debug, Clone)]
pub struct InfoField {
    metadata: FieldMetadata,
}

impl InfoField {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<ChoiceSource>,
        number: Number,
        field_type: FieldType,
        description: Option<&str>,
        descriptions: &InfoDescriptions,
    ) -> Self {
        let id = id.into();
        let description = descriptions.resolve(&id, description);
        let spec = FieldSpec {
            id,
            number,
            field_type,
            description: Some(description),
        };
        Self {
            metadata: FieldMetadata::new(spec, source),
        }
    }

    pub fn id(&self) -> &str {
        &self.metadata.spec.id
    }

    pub fn description(&self) -> &str {
        self.metadata.spec.description.as_deref().unwrap_or_default()
    }

    pub fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    pub fn choice_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FieldValue {
        self.metadata.choice_value(rng)
    }

    pub fn set_choice_func(&mut self, source: impl Into<ChoiceSource>) {
        self.metadata.set_choice_func(source);
    }

    /// Header declaration of this key:
    /// `##INFO=<ID=..,Number=..,Type=..,Description="..">`.
    pub fn rendered_info_items(&self) -> String {
        let spec = &self.metadata.spec;
        format!(
            "##INFO=<ID={},Number={},Type={},Description=\"{}\">",
            spec.id,
            spec.number,
            spec.field_type,
            self.description()
        )
    }
}
