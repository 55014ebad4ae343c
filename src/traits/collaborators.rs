use crate::core::metrics::Metric;
use crate::descriptor::MetricDescriptor;
use crate::error::Result;
use crate::metric::CookedSample;
use crate::sample::RawSample;

#[cfg(test)]
use mockall::automock;

/// Source of raw readings, implemented by the polling/transport layer
///
/// # Examples
///
/// ```rust
/// use std::time::SystemTime;
/// use snmp_metrics::core::metrics::Metric;
/// use snmp_metrics::sample::{RawSample, RawValue};
/// use snmp_metrics::traits::SampleSource;
/// use snmp_metrics::Result;
///
/// struct FixedSource(u32);
///
/// impl SampleSource for FixedSource {
///     fn poll(&mut self, address: &str) -> Result<Metric<RawSample>> {
///         let sample = RawSample::new(address, RawValue::Counter32(self.0));
///         Ok(Metric::with_timestamp(sample, SystemTime::now()))
///     }
/// }
/// ```
#[cfg_attr(test, automock)]
pub trait SampleSource {
    /// Reads the value at `address`, stamped with the time it was read
    fn poll(&mut self, address: &str) -> Result<Metric<RawSample>>;
}

/// Consumer of cooked values, implemented by the storage/routing layer
#[cfg_attr(test, automock)]
pub trait CookedSink {
    /// Receives one measured value for `descriptor`
    fn publish(&mut self, descriptor: &MetricDescriptor, sample: &CookedSample) -> Result<()>;
}
