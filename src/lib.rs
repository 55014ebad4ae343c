//! SNMP Metrics - cooks raw SNMP probe readings into normalized metric values
//!
//! Every polled SNMP object yields a typed raw reading (an INTEGER, a 32-bit
//! or 64-bit counter, a gauge...). This crate turns one such reading per
//! polling cycle into a single "cooked" value that storage and
//! visualization layers can use directly.
//!
//! # Pipeline
//!
//! - **Descriptor**: immutable description of the metric ([`descriptor`]), usually
//!   loaded from a [`config::MetricConfig`]
//! - **Extraction**: wire-typed value to canonical 64-bit number ([`sample`])
//! - **Transform**: pass-through, counter delta or counter rate, then
//!   `value * scale + shift` ([`transform`])
//! - **Cast**: float output, or integer output rounded half away from zero ([`cast`])
//!
//! A [`metric::MetricInstance`] ties the stages together and keeps the one
//! prior sample needed for deltas.
//!
//! # Examples
//!
//! ```rust
//! use std::time::{Duration, SystemTime};
//! use snmp_metrics::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = MetricConfig::from_json(r#"{
//!         "id": "my_counter",
//!         "base_oid": ".1.3.6.1.4.1.2021.4.3.0",
//!         "data_src_type": "COUNTER64",
//!         "scale": 0.001,
//!         "conversion": 1
//!     }"#)?;
//!     let mut metric = MetricInstance::from_config(config)?;
//!
//!     let t0 = SystemTime::now();
//!     let oid = ".1.3.6.1.4.1.2021.4.3.0";
//!     metric.record(&RawSample::new(oid, RawValue::Counter64(156_000)), t0)?;
//!     let cooked = metric.record(
//!         &RawSample::new(oid, RawValue::Counter64(162_600)),
//!         t0 + Duration::from_secs(60),
//!     )?;
//!
//!     // 6600 * 0.001 = 6.6, rounded to 7
//!     assert_eq!(cooked.value(), CookedValue::Integer(7));
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every failure is returned from the call that caused it as an [`Error`]:
//!
//! ```rust
//! use std::time::SystemTime;
//! use snmp_metrics::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let descriptor = MetricDescriptor::new(
//!     "octets",
//!     ".1.3.6.1.2.1.2.2.1.10.1",
//!     SourceKind::DeltaCounter(CounterWidth::Bits32),
//!     OutputKind::Float,
//! );
//! let mut metric = MetricInstance::new(std::sync::Arc::new(descriptor))?;
//!
//! let err = metric
//!     .record(&RawSample::new(".1.3.6.1.2.1.2.2.1.10.1", RawValue::Integer(5)), SystemTime::now())
//!     .unwrap_err();
//! assert!(matches!(err, Error::TypeMismatch { .. }));
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! A `MetricInstance` is a plain synchronous state machine with no internal
//! locking. Calls for one instance must be sequential; use
//! [`metric::SharedMetric`] to share one between polling threads.

#![doc(html_root_url = "https://docs.rs/snmp-metrics/0.1.0")]

pub mod cast;
pub mod config;
pub mod core;
pub mod descriptor;
pub mod error;
pub mod metric;
pub mod sample;
pub mod traits;
pub mod transform;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::config::MetricConfig;
    pub use crate::core::metrics::Metric;
    pub use crate::core::types::CookedValue;
    pub use crate::descriptor::{CounterWidth, MetricDescriptor, OutputKind, SourceKind};
    pub use crate::metric::{CookedSample, MetricInstance, SampleState, SharedMetric};
    pub use crate::sample::{CanonicalValue, RawSample, RawValue};
    pub use crate::traits::{CookedSink, SampleSource};
    pub use crate::Error;
    pub use crate::Result;
}
