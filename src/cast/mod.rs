//! Cast & round stage.
//!
//! Turns a transformed float into the representation named by the
//! descriptor's [`OutputKind`]. Integer output rounds half away from zero,
//! so `2.5 -> 3` and `-2.5 -> -3`. Downstream consumers compare cooked
//! integers exactly, which rules out banker's rounding or truncation.

use crate::core::types::CookedValue;
use crate::descriptor::OutputKind;
use crate::error::{Error, Result};

// 2^63 as f64. Every finite f64 strictly below it, and at or above its
// negation, converts to i64 without saturating.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Rounds to the nearest integer, with ties going away from zero
pub fn round_half_away_from_zero(value: f64) -> f64 {
    value.round()
}

/// Casts `value` for the metric `metric` into `kind`
#[allow(clippy::cast_possible_truncation)]
pub fn cast(metric: &str, value: f64, kind: OutputKind) -> Result<CookedValue> {
    match kind {
        OutputKind::Float => Ok(CookedValue::Float(value)),
        OutputKind::RoundedInteger => {
            let rounded = round_half_away_from_zero(value);
            if !rounded.is_finite() || rounded >= I64_BOUND || rounded < -I64_BOUND {
                return Err(Error::out_of_range(metric, value));
            }
            Ok(CookedValue::Integer(rounded as i64))
        }
    }
}
