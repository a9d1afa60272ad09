//! Numeric value generators.

use rand::Rng;
use vcf_core::FieldValue;

/// Most decimal places a float rule can round to; f64 carries no more.
pub const MAX_ROUND_DIGITS: u32 = 15;

fn scale_factor(digits: u32) -> f64 {
    let exponent = i32::try_from(digits.min(MAX_ROUND_DIGITS)).unwrap_or_default();
    10f64.powi(exponent)
}

/// Round `value` to `digits` decimal places, at most [`MAX_ROUND_DIGITS`].
///
/// Values too large to scale are returned unchanged; they have no
/// fractional digits left to round.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = scale_factor(digits);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng + ?Sized>(rng: &mut R, start: i64, finish: i64) -> FieldValue {
    FieldValue::Integer(rng.random_range(start..=finish))
}

/// Generate a list of `length` independent random integers.
pub fn generate_int_list<R: Rng + ?Sized>(
    rng: &mut R,
    start: i64,
    finish: i64,
    length: usize,
) -> FieldValue {
    FieldValue::List(
        (0..length)
            .map(|_| generate_int_range(rng, start, finish))
            .collect(),
    )
}

/// Generate a random float in the given range (inclusive), rounded to
/// `digits` decimal places.
///
/// A draw that rounds past either bound is rounded toward the range instead,
/// so every value stays inside `[start, finish]`.
pub fn generate_float_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: f64,
    finish: f64,
    digits: u32,
) -> FieldValue {
    let raw = rng.random_range(start..=finish);
    let factor = scale_factor(digits);
    if !(raw * factor).is_finite() {
        return FieldValue::Float(raw);
    }
    let mut value = round_to(raw, digits);
    if value > finish {
        value = (raw * factor).floor() / factor;
    } else if value < start {
        value = (raw * factor).ceil() / factor;
    }
    FieldValue::Float(value)
}

/// Generate a list of `length` independent rounded random floats.
pub fn generate_float_list<R: Rng + ?Sized>(
    rng: &mut R,
    start: f64,
    finish: f64,
    length: usize,
    digits: u32,
) -> FieldValue {
    FieldValue::List(
        (0..length)
            .map(|_| generate_float_range(rng, start, finish, digits))
            .collect(),
    )
}
