use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Bit width of a device counter, used as the wraparound modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CounterWidth {
    /// 32-bit counter, wraps at 2^32
    Bits32,
    /// 64-bit counter, wraps at 2^64
    Bits64,
}

impl CounterWidth {
    /// Largest value a counter of this width can hold
    pub fn max_value(self) -> u64 {
        match self {
            CounterWidth::Bits32 => u64::from(u32::MAX),
            CounterWidth::Bits64 => u64::MAX,
        }
    }

    /// Number of bits
    pub fn bits(self) -> u32 {
        match self {
            CounterWidth::Bits32 => 32,
            CounterWidth::Bits64 => 64,
        }
    }
}

/// How a raw reading relates to the value that gets published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceKind {
    /// Plain numeric value, published as read
    PlainInteger,
    /// Counter published as its latest raw value, no differencing
    AbsoluteCounter(CounterWidth),
    /// Counter differenced against the previous poll
    DeltaCounter(CounterWidth),
}

impl SourceKind {
    /// Counter width, if this is a counter kind
    pub fn width(&self) -> Option<CounterWidth> {
        match *self {
            SourceKind::PlainInteger => None,
            SourceKind::AbsoluteCounter(w) | SourceKind::DeltaCounter(w) => Some(w),
        }
    }

    /// Whether consecutive samples are differenced
    pub fn is_delta(&self) -> bool {
        matches!(self, SourceKind::DeltaCounter(_))
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    /// Parses a configuration token. Tokens are case-sensitive: mixed-case
    /// counter names pass values through, upper-case ones are differenced.
    fn from_str(token: &str) -> Result<Self> {
        match token {
            "Integer" | "Integer32" | "Gauge32" | "TimeTicks" | "Unsigned32" | "UInteger32" => {
                Ok(SourceKind::PlainInteger)
            }
            "Counter32" => Ok(SourceKind::AbsoluteCounter(CounterWidth::Bits32)),
            "Counter64" => Ok(SourceKind::AbsoluteCounter(CounterWidth::Bits64)),
            "COUNTER32" => Ok(SourceKind::DeltaCounter(CounterWidth::Bits32)),
            "COUNTER64" => Ok(SourceKind::DeltaCounter(CounterWidth::Bits64)),
            other => Err(Error::UnrecognizedSourceKind(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::PlainInteger => write!(f, "Integer32"),
            SourceKind::AbsoluteCounter(w) => write!(f, "Counter{}", w.bits()),
            SourceKind::DeltaCounter(w) => write!(f, "COUNTER{}", w.bits()),
        }
    }
}

/// Representation of the published value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OutputKind {
    /// Published as a 64-bit float
    #[default]
    Float,
    /// Rounded half away from zero, published as a 64-bit signed integer
    RoundedInteger,
}

impl TryFrom<i64> for OutputKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(OutputKind::Float),
            1 => Ok(OutputKind::RoundedInteger),
            other => Err(Error::UnrecognizedOutputKind(other)),
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Float => write!(f, "Float"),
            OutputKind::RoundedInteger => write!(f, "RoundedInteger"),
        }
    }
}
