/// Error type for snmp-metrics operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Type mismatch for metric {metric}: expected {expected}, got {found}")]
    TypeMismatch {
        metric: String,
        expected: String,
        found: String,
    },

    #[error("Value for metric {metric} is not representable: {reason}")]
    ValueNotRepresentable { metric: String, reason: String },

    #[error("Invalid elapsed time for metric {metric}: {elapsed_ms} ms")]
    InvalidElapsedTime { metric: String, elapsed_ms: i128 },

    #[error("Unrecognized source kind: {0}")]
    UnrecognizedSourceKind(String),

    #[error("Unrecognized output kind: {0}")]
    UnrecognizedOutputKind(i64),

    #[error("Value {value} for metric {metric} does not fit the output type")]
    OutOfRange { metric: String, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sample source error: {0}")]
    Source(String),
}

impl Error {
    pub(crate) fn type_mismatch<S: Into<String>>(metric: &str, expected: S, found: S) -> Self {
        Error::TypeMismatch {
            metric: metric.to_string(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn not_representable<S: Into<String>>(metric: &str, reason: S) -> Self {
        Error::ValueNotRepresentable {
            metric: metric.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_elapsed(metric: &str, elapsed_ms: i128) -> Self {
        Error::InvalidElapsedTime {
            metric: metric.to_string(),
            elapsed_ms,
        }
    }

    pub(crate) fn out_of_range(metric: &str, value: f64) -> Self {
        Error::OutOfRange {
            metric: metric.to_string(),
            value,
        }
    }

    pub(crate) fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Wraps a failure reported by a [`SampleSource`](crate::traits::SampleSource).
    pub fn source_failure<S: Into<String>>(msg: S) -> Self {
        Error::Source(msg.into())
    }
}

/// Result type for snmp-metrics operations
pub type Result<T> = std::result::Result<T, Error>;
