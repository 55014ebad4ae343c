//! # Core Metrics Module
//!
//! Timestamped values shared by every stage of the cooking pipeline. Raw
//! readings, retained counter history and cooked output are all carried as a
//! [`Metric`] so that the time a value corresponds to never gets separated
//! from the value itself.
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, SystemTime};
//! use snmp_metrics::core::metrics::Metric;
//!
//! let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
//! let first = Metric::with_timestamp(156_000_u64, start);
//! let second = Metric::with_timestamp(162_600_u64, start + Duration::from_secs(60));
//!
//! assert_eq!(second.seconds_since(&first), Some(60.0));
//! ```
use std::time::{Duration, SystemTime};

use serde::Serialize;

/// A single metric measurement with a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric<T> {
    /// The value of the metric
    pub value: T,
    /// The timestamp when the metric was recorded
    pub timestamp: SystemTime,
}

impl<T> Metric<T> {
    /// Creates a new metric with the current time as timestamp
    pub fn new(value: T) -> Self {
        Self {
            value,
            timestamp: SystemTime::now(),
        }
    }

    /// Creates a new metric with a specific timestamp
    pub fn with_timestamp(value: T, timestamp: SystemTime) -> Self {
        Self { value, timestamp }
    }

    /// Replaces the value while keeping the timestamp
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Metric<U> {
        Metric {
            value: f(self.value),
            timestamp: self.timestamp,
        }
    }

    /// Seconds elapsed between `earlier` and this metric.
    ///
    /// Returns `None` when `earlier` was recorded after this metric.
    pub fn seconds_since<U>(&self, earlier: &Metric<U>) -> Option<f64> {
        self.timestamp
            .duration_since(earlier.timestamp)
            .ok()
            .map(|d| d.as_secs_f64())
    }

    /// Signed distance in milliseconds from `earlier` to this metric
    pub fn signed_millis_since<U>(&self, earlier: &Metric<U>) -> i128 {
        match self.timestamp.duration_since(earlier.timestamp) {
            Ok(forward) => millis(forward),
            Err(backward) => -millis(backward.duration()),
        }
    }
}

fn millis(d: Duration) -> i128 {
    i128::try_from(d.as_millis()).unwrap_or(i128::MAX)
}
