//! Value rules and the factories that build them.
//!
//! A [`ValueRule`] is a closed set of producer kinds. Each kind carries its
//! own parameters, and a sequential rule carries its counter, so evaluation
//! is a single `match` with no runtime type inspection.

pub mod numeric;
pub mod sequence;
pub mod static_value;

use crate::error::GeneratorError;
use crate::field::ChoiceSource;
use rand::seq::IndexedRandom;
use rand::Rng;
use vcf_core::{FieldValue, RangeBound, RuleConfig, DEFAULT_ROUND_DIGITS};

pub use numeric::MAX_ROUND_DIGITS;
pub use sequence::{generator_factory, SequenceFactory};
pub use static_value::yaml_to_field_value;

/// Trait for generating values.
pub trait ValueGenerator {
    /// Produce the next value, advancing any internal state.
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FieldValue;
}

/// A value producer.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRule {
    /// Uniform integer in `[start, finish]`, optionally a list of draws
    IntRange {
        start: i64,
        finish: i64,
        list_size: Option<usize>,
    },

    /// Uniform float in `[start, finish]` rounded to `round_digits`,
    /// optionally a list of draws
    FloatRange {
        start: f64,
        finish: f64,
        list_size: Option<usize>,
        round_digits: u32,
    },

    /// Uniform pick from a non-empty set of values
    OneOf { values: Vec<FieldValue> },

    /// Counter returning `next` then advancing it by `step`
    Sequential { next: i64, step: i64 },

    /// Always the same value
    Constant { value: FieldValue },
}

impl ValueRule {
    /// A rule that always yields `value`.
    pub fn constant(value: impl Into<FieldValue>) -> Self {
        Self::Constant {
            value: value.into(),
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::Sequential { .. })
    }
}

impl ValueGenerator for ValueRule {
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FieldValue {
        match self {
            Self::IntRange {
                start,
                finish,
                list_size: Some(length),
            } => numeric::generate_int_list(rng, *start, *finish, *length),

            Self::IntRange { start, finish, .. } => {
                numeric::generate_int_range(rng, *start, *finish)
            }

            Self::FloatRange {
                start,
                finish,
                list_size: Some(length),
                round_digits,
            } => numeric::generate_float_list(rng, *start, *finish, *length, *round_digits),

            Self::FloatRange {
                start,
                finish,
                round_digits,
                ..
            } => numeric::generate_float_range(rng, *start, *finish, *round_digits),

            Self::OneOf { values } => values.choose(rng).cloned().unwrap_or(FieldValue::Empty),

            Self::Sequential { next, step } => {
                let current = *next;
                *next = next.wrapping_add(*step);
                FieldValue::Integer(current)
            }

            Self::Constant { value } => value.clone(),
        }
    }
}

/// Build a ranged rule.
///
/// Both bounds must be integers or both floats. Float bounds and their span
/// must be finite. `list_size` of `None` or `Some(0)` yields scalars.
/// `round_digits` applies to float ranges only, defaults to
/// [`DEFAULT_ROUND_DIGITS`] and may not exceed [`MAX_ROUND_DIGITS`].
pub fn range_rule(
    start: RangeBound,
    finish: RangeBound,
    list_size: Option<usize>,
    round_digits: Option<u32>,
) -> Result<ValueRule, GeneratorError> {
    let list_size = list_size.filter(|&n| n > 0);
    match (start, finish) {
        (RangeBound::Integer(start), RangeBound::Integer(finish)) => {
            if start > finish {
                return Err(GeneratorError::InvertedRange {
                    start: start.to_string(),
                    finish: finish.to_string(),
                });
            }
            Ok(ValueRule::IntRange {
                start,
                finish,
                list_size,
            })
        }
        (RangeBound::Float(start), RangeBound::Float(finish)) => {
            if start.is_nan() || finish.is_nan() || start > finish {
                return Err(GeneratorError::InvertedRange {
                    start: start.to_string(),
                    finish: finish.to_string(),
                });
            }
            if !start.is_finite() || !finish.is_finite() || !(finish - start).is_finite() {
                return Err(GeneratorError::NonFiniteRange {
                    start: start.to_string(),
                    finish: finish.to_string(),
                });
            }
            let round_digits = round_digits.unwrap_or(DEFAULT_ROUND_DIGITS);
            if round_digits > MAX_ROUND_DIGITS {
                return Err(GeneratorError::InvalidRoundDigits {
                    digits: round_digits,
                    max: MAX_ROUND_DIGITS,
                });
            }
            Ok(ValueRule::FloatRange {
                start,
                finish,
                list_size,
                round_digits,
            })
        }
        (start, finish) => Err(GeneratorError::MismatchedRange {
            start: format!("{start:?}"),
            finish: format!("{finish:?}"),
        }),
    }
}

/// Build a rule picking uniformly from `values`.
pub fn one_of_rule(values: Vec<FieldValue>) -> Result<ValueRule, GeneratorError> {
    if values.is_empty() {
        return Err(GeneratorError::EmptyChoiceSet);
    }
    Ok(ValueRule::OneOf { values })
}

/// Build the value source described by a rule configuration.
///
/// Ranges and choice sets become rules, sequences become generator
/// constructors, and static values become constant defaults.
pub fn choice_rules_factory(config: &RuleConfig) -> Result<ChoiceSource, GeneratorError> {
    match config {
        RuleConfig::Range {
            start,
            finish,
            list_size,
            round_digits,
        } => range_rule(*start, *finish, *list_size, *round_digits).map(ChoiceSource::Rule),

        RuleConfig::OneOf { values } => {
            let values = values
                .iter()
                .map(yaml_to_field_value)
                .collect::<Result<Vec<_>, _>>()?;
            one_of_rule(values).map(ChoiceSource::Rule)
        }

        RuleConfig::Sequential { start, step } => {
            Ok(ChoiceSource::Generator(generator_factory(*start, *step)))
        }

        RuleConfig::Static { value } => yaml_to_field_value(value).map(ChoiceSource::Default),
    }
}
