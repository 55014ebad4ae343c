//! Sample extraction.
//!
//! Maps a wire-typed [`RawValue`] onto a [`CanonicalValue`], checking the
//! wire type against what the descriptor's [`SourceKind`] accepts. Nothing is
//! coerced silently: an incompatible tag is a [`Error::TypeMismatch`], and a
//! compatible tag whose payload has no numeric reading is an
//! [`Error::ValueNotRepresentable`].
//!
//! | Source kind       | Accepted wire types                                      |
//! |-------------------|----------------------------------------------------------|
//! | `PlainInteger`    | every numeric tag, plus `OctetString` holding an integer |
//! | counter, 32 bits  | `Counter32`                                              |
//! | counter, 64 bits  | `Counter64`                                              |

mod types;

pub use types::{CanonicalValue, RawSample, RawValue};

use crate::descriptor::{CounterWidth, MetricDescriptor, SourceKind};
use crate::error::{Error, Result};

/// Extracts the canonical numeric value of `sample` for `descriptor`
pub fn extract(descriptor: &MetricDescriptor, sample: &RawSample) -> Result<CanonicalValue> {
    let metric = descriptor.id();
    let kind = descriptor.source_kind();

    match kind {
        SourceKind::PlainInteger => plain_value(metric, &sample.value),
        SourceKind::AbsoluteCounter(width) | SourceKind::DeltaCounter(width) => {
            counter_value(width, &sample.value).ok_or_else(|| {
                Error::type_mismatch(
                    metric,
                    format!("Counter{}", width.bits()),
                    sample.value.type_name().to_string(),
                )
            })
        }
    }
}

fn counter_value(width: CounterWidth, value: &RawValue) -> Option<CanonicalValue> {
    match (width, value) {
        (CounterWidth::Bits32, RawValue::Counter32(v)) => {
            Some(CanonicalValue::Unsigned(u64::from(*v)))
        }
        (CounterWidth::Bits64, RawValue::Counter64(v)) => Some(CanonicalValue::Unsigned(*v)),
        _ => None,
    }
}

fn plain_value(metric: &str, value: &RawValue) -> Result<CanonicalValue> {
    match value {
        RawValue::Integer(v) => Ok(CanonicalValue::Signed(*v)),
        RawValue::Counter32(v)
        | RawValue::Gauge32(v)
        | RawValue::TimeTicks(v)
        | RawValue::Uinteger32(v) => Ok(CanonicalValue::Unsigned(u64::from(*v))),
        RawValue::Counter64(v) => Ok(CanonicalValue::Unsigned(*v)),
        RawValue::OctetString(bytes) => parse_octets(metric, bytes),
        RawValue::Null
        | RawValue::NoSuchObject
        | RawValue::NoSuchInstance
        | RawValue::EndOfMibView => Err(Error::type_mismatch(
            metric,
            "a numeric type",
            value.type_name(),
        )),
    }
}

fn parse_octets(metric: &str, bytes: &[u8]) -> Result<CanonicalValue> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| Error::not_representable(metric, "octet string is not valid UTF-8"))?
        .trim();

    if let Ok(v) = text.parse::<i64>() {
        return Ok(CanonicalValue::Signed(v));
    }
    text.parse::<u64>()
        .map(CanonicalValue::Unsigned)
        .map_err(|_| Error::not_representable(metric, format!("{text:?} is not an integer")))
}
