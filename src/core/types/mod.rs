//! # Core Types Module
//!
//! Value types that leave the crate. The only one so far is [`CookedValue`],
//! the typed result of cooking a raw reading.
//!
//! ## Example
//!
//! ```rust
//! use snmp_metrics::core::types::CookedValue;
//!
//! let v = CookedValue::Integer(7);
//! assert_eq!(v.as_f64(), 7.0);
//! assert_eq!(v.as_i64(), Some(7));
//! ```

use std::fmt;

use serde::Serialize;

use crate::descriptor::OutputKind;

/// A cooked metric value, typed per the descriptor's [`OutputKind`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CookedValue {
    /// 64-bit floating point output
    Float(f64),
    /// Rounded 64-bit signed integer output
    Integer(i64),
}

impl CookedValue {
    /// The zero value for an output kind
    pub fn zero(kind: OutputKind) -> Self {
        match kind {
            OutputKind::Float => CookedValue::Float(0.0),
            OutputKind::RoundedInteger => CookedValue::Integer(0),
        }
    }

    /// The output kind this value belongs to
    pub fn kind(&self) -> OutputKind {
        match self {
            CookedValue::Float(_) => OutputKind::Float,
            CookedValue::Integer(_) => OutputKind::RoundedInteger,
        }
    }

    /// Returns the float payload, if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            CookedValue::Float(v) => Some(v),
            CookedValue::Integer(_) => None,
        }
    }

    /// Returns the integer payload, if this is an integer value
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            CookedValue::Integer(v) => Some(v),
            CookedValue::Float(_) => None,
        }
    }

    /// Widens the value to a float regardless of its kind
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            CookedValue::Float(v) => v,
            CookedValue::Integer(v) => v as f64,
        }
    }
}

impl fmt::Display for CookedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookedValue::Float(v) => write!(f, "{v}"),
            CookedValue::Integer(v) => write!(f, "{v}"),
        }
    }
}
