use std::fmt;

use serde::Serialize;

/// A polled value tagged with the wire type it arrived as
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RawValue {
    /// Signed INTEGER / Integer32
    Integer(i64),
    Counter32(u32),
    Gauge32(u32),
    TimeTicks(u32),
    Uinteger32(u32),
    Counter64(u64),
    /// OCTET STRING payload; numeric only when it holds decimal text
    OctetString(Vec<u8>),
    Null,
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl RawValue {
    /// Wire type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Integer(_) => "Integer",
            RawValue::Counter32(_) => "Counter32",
            RawValue::Gauge32(_) => "Gauge32",
            RawValue::TimeTicks(_) => "TimeTicks",
            RawValue::Uinteger32(_) => "Uinteger32",
            RawValue::Counter64(_) => "Counter64",
            RawValue::OctetString(_) => "OctetString",
            RawValue::Null => "Null",
            RawValue::NoSuchObject => "NoSuchObject",
            RawValue::NoSuchInstance => "NoSuchInstance",
            RawValue::EndOfMibView => "EndOfMibView",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(v) => write!(f, "Integer({v})"),
            RawValue::Counter32(v) => write!(f, "Counter32({v})"),
            RawValue::Gauge32(v) => write!(f, "Gauge32({v})"),
            RawValue::TimeTicks(v) => write!(f, "TimeTicks({v})"),
            RawValue::Uinteger32(v) => write!(f, "Uinteger32({v})"),
            RawValue::Counter64(v) => write!(f, "Counter64({v})"),
            RawValue::OctetString(bytes) => {
                write!(f, "OctetString({:?})", String::from_utf8_lossy(bytes))
            }
            other => f.write_str(other.type_name()),
        }
    }
}

/// One polled reading: the identifier it was read from plus its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSample {
    /// Protocol identifier (OID) the value came from
    pub name: String,
    pub value: RawValue,
}

impl RawSample {
    pub fn new(name: impl Into<String>, value: RawValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A raw value reduced to one of two 64-bit numeric forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CanonicalValue {
    Signed(i64),
    Unsigned(u64),
}

impl CanonicalValue {
    /// Widens to f64 for the scale/shift and cast stages
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            CanonicalValue::Signed(v) => v as f64,
            CanonicalValue::Unsigned(v) => v as f64,
        }
    }

    /// The unsigned payload, as carried by counters
    pub fn as_unsigned(self) -> Option<u64> {
        match self {
            CanonicalValue::Unsigned(v) => Some(v),
            CanonicalValue::Signed(_) => None,
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Signed(v) => write!(f, "{v}"),
            CanonicalValue::Unsigned(v) => write!(f, "{v}"),
        }
    }
}
