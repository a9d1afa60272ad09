//! Static value generator and YAML to FieldValue conversion.

use crate::error::GeneratorError;
use serde_yaml::Value as YamlValue;
use vcf_core::FieldValue;

/// Convert a YAML value to a FieldValue.
///
/// Mappings have no VCF rendering and are rejected.
pub fn yaml_to_field_value(yaml: &YamlValue) -> Result<FieldValue, GeneratorError> {
    match yaml {
        YamlValue::Null => Ok(FieldValue::Empty),
        YamlValue::Bool(b) => Ok(FieldValue::String(b.to_string())),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(FieldValue::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(FieldValue::Float(f))
            } else {
                Ok(FieldValue::String(n.to_string()))
            }
        }
        YamlValue::String(s) => Ok(FieldValue::String(s.clone())),
        YamlValue::Sequence(arr) => arr
            .iter()
            .map(yaml_to_field_value)
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::List),
        YamlValue::Mapping(_) => Err(GeneratorError::UnsupportedValue(format!("{yaml:?}"))),
        YamlValue::Tagged(tagged) => yaml_to_field_value(&tagged.value),
    }
}
