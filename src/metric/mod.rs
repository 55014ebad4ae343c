//! # Metric Instance
//!
//! A [`MetricInstance`] is the per-metric, per-target state machine that
//! turns one raw reading per polling cycle into a [`CookedSample`]:
//!
//! 1. [`extract`](crate::sample::extract) the canonical numeric value,
//! 2. [`apply`](crate::transform::apply) the temporal transform and scale/shift,
//! 3. [`cast`](crate::cast::cast) into the descriptor's output kind.
//!
//! The instance is `Uninitialized` until a sample has been recorded and
//! `Primed` afterwards. Calls for one instance must be sequential; wrap it
//! in a [`SharedMetric`] when several threads poll the same target.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::{Duration, SystemTime};
//! use snmp_metrics::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let descriptor = MetricDescriptor::new(
//!     "my_counter",
//!     ".1.3.6.1.4.1.2021.4.3.0",
//!     SourceKind::DeltaCounter(CounterWidth::Bits64),
//!     OutputKind::Float,
//! )
//! .with_rate(true);
//! let mut metric = MetricInstance::new(Arc::new(descriptor))?;
//!
//! let t0 = SystemTime::now();
//! let first = metric.record(&RawSample::new(".1.3.6.1.4.1.2021.4.3.0", RawValue::Counter64(156_000)), t0)?;
//! assert!(!first.is_measurement());
//!
//! let second = metric.record(
//!     &RawSample::new(".1.3.6.1.4.1.2021.4.3.0", RawValue::Counter64(162_600)),
//!     t0 + Duration::from_secs(60),
//! )?;
//! assert_eq!(second.value(), CookedValue::Float(110.0));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::{Mutex, MutexGuard};
use serde::Serialize;
use tracing::{trace, warn};

use crate::cast::cast;
use crate::config::MetricConfig;
use crate::core::metrics::Metric;
use crate::core::types::CookedValue;
use crate::descriptor::MetricDescriptor;
use crate::error::Result;
use crate::sample::{extract, CanonicalValue, RawSample};
use crate::traits::{CookedSink, SampleSource};
use crate::transform::{self, CounterState, Transformed};

/// Whether a cooked value is a real measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SampleState {
    /// Placeholder published while a delta counter records its first sample
    Baseline,
    /// A computed value
    Measured,
}

/// A cooked value together with the timestamp it corresponds to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CookedSample {
    pub metric: Metric<CookedValue>,
    pub state: SampleState,
}

impl CookedSample {
    pub fn value(&self) -> CookedValue {
        self.metric.value
    }

    pub fn timestamp(&self) -> SystemTime {
        self.metric.timestamp
    }

    /// `false` for the baseline placeholder of a delta counter
    pub fn is_measurement(&self) -> bool {
        self.state == SampleState::Measured
    }
}

/// Mutable state of one monitored metric on one target
#[derive(Debug, Clone)]
pub struct MetricInstance {
    descriptor: Arc<MetricDescriptor>,
    counter: CounterState,
    last: Option<Metric<CanonicalValue>>,
    current: Option<Metric<CanonicalValue>>,
    cooked: Option<CookedSample>,
}

impl MetricInstance {
    /// Creates an uninitialized instance for `descriptor`.
    ///
    /// Fails with [`Error::InvalidConfig`](crate::Error::InvalidConfig) when the
    /// descriptor does not pass [`MetricDescriptor::validate`].
    pub fn new(descriptor: Arc<MetricDescriptor>) -> Result<Self> {
        descriptor.validate()?;
        Ok(Self {
            descriptor,
            counter: CounterState::Uninitialized,
            last: None,
            current: None,
            cooked: None,
        })
    }

    /// Validates `config` and creates an instance from it
    pub fn from_config(config: MetricConfig) -> Result<Self> {
        Self::new(Arc::new(config.into_descriptor()?))
    }

    /// Records one raw sample taken at `timestamp` and cooks it.
    ///
    /// On error the previously cooked value stays in place. Raw history
    /// still advances to this sample unless it could not be extracted.
    pub fn record(&mut self, sample: &RawSample, timestamp: SystemTime) -> Result<CookedSample> {
        let descriptor = Arc::clone(&self.descriptor);
        let id = descriptor.id();

        let raw = match extract(&descriptor, sample) {
            Ok(raw) => Metric::with_timestamp(raw, timestamp),
            Err(e) => {
                warn!(metric = %id, oid = %sample.name, value = %sample.value, error = %e, "sample rejected");
                return Err(e);
            }
        };
        self.last = self.current.replace(raw);

        let cooked = match self.cook(raw) {
            Ok(cooked) => cooked,
            Err(e) => {
                warn!(metric = %id, raw = %raw.value, error = %e, "failed to cook sample");
                return Err(e);
            }
        };
        trace!(metric = %id, raw = %raw.value, cooked = %cooked.value(), state = ?cooked.state, "sample cooked");

        self.cooked = Some(cooked);
        Ok(cooked)
    }

    fn cook(&mut self, raw: Metric<CanonicalValue>) -> Result<CookedSample> {
        let output = self.descriptor.output_kind();
        match transform::apply(&self.descriptor, &mut self.counter, raw)? {
            Transformed::Baseline => Ok(CookedSample {
                metric: Metric::with_timestamp(CookedValue::zero(output), raw.timestamp),
                state: SampleState::Baseline,
            }),
            Transformed::Value(value) => Ok(CookedSample {
                metric: Metric::with_timestamp(cast(self.descriptor.id(), value, output)?, raw.timestamp),
                state: SampleState::Measured,
            }),
        }
    }

    /// Polls `source` once, records the result and forwards measured values to `sink`.
    ///
    /// Baseline placeholders are returned but not published.
    pub fn collect(
        &mut self,
        source: &mut dyn SampleSource,
        sink: &mut dyn CookedSink,
    ) -> Result<CookedSample> {
        let polled = source.poll(self.descriptor.source_address())?;
        let cooked = self.record(&polled.value, polled.timestamp)?;
        if cooked.is_measurement() {
            sink.publish(&self.descriptor, &cooked)?;
        }
        Ok(cooked)
    }

    /// Forgets all history, e.g. after the device restarted its counters
    pub fn reset(&mut self) {
        self.counter = CounterState::Uninitialized;
        self.last = None;
        self.current = None;
        self.cooked = None;
    }

    pub fn descriptor(&self) -> &Arc<MetricDescriptor> {
        &self.descriptor
    }

    /// `true` once at least one sample has been recorded
    pub fn is_primed(&self) -> bool {
        self.current.is_some()
    }

    /// Counter history used for delta computation
    pub fn counter_state(&self) -> &CounterState {
        &self.counter
    }

    /// The sample recorded before the current one
    pub fn last_raw(&self) -> Option<&Metric<CanonicalValue>> {
        self.last.as_ref()
    }

    /// The most recently recorded sample
    pub fn current_raw(&self) -> Option<&Metric<CanonicalValue>> {
        self.current.as_ref()
    }

    /// Result of the last successful computation
    pub fn cooked(&self) -> Option<&CookedSample> {
        self.cooked.as_ref()
    }

    pub fn cooked_value(&self) -> Option<CookedValue> {
        self.cooked.map(|c| c.value())
    }
}

/// A [`MetricInstance`] that can be shared between polling threads.
///
/// Each call holds the lock for the whole step, so two polls of the same
/// metric never interleave.
#[derive(Debug, Clone)]
pub struct SharedMetric {
    inner: Arc<Mutex<MetricInstance>>,
}

impl SharedMetric {
    pub fn new(instance: MetricInstance) -> Self {
        Self {
            inner: Arc::new(Mutex::new(instance)),
        }
    }

    pub fn record(&self, sample: &RawSample, timestamp: SystemTime) -> Result<CookedSample> {
        self.inner.lock().record(sample, timestamp)
    }

    pub fn cooked(&self) -> Option<CookedSample> {
        self.inner.lock().cooked().copied()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Exclusive access to the underlying instance
    pub fn lock(&self) -> MutexGuard<'_, MetricInstance> {
        self.inner.lock()
    }
}

impl From<MetricInstance> for SharedMetric {
    fn from(instance: MetricInstance) -> Self {
        Self::new(instance)
    }
}
