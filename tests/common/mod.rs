#![allow(dead_code)]


use std::time::{Duration, SystemTime};

use snmp_metrics::prelude::*;

pub use builders::metric::TestMetricBuilder;

const TOLERANCE: f64 = 0.000_000_000_000_1;

/// Fixed poll time `secs` seconds after an arbitrary origin
pub fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000 + secs)
}

/// Records one reading for the metric's own OID
pub fn poll(metric: &mut MetricInstance, value: RawValue, time: SystemTime) -> Result<CookedSample> {
    let oid = metric.descriptor().source_address().to_string();
    metric.record(&RawSample::new(oid, value), time)
}

/// Float comparison with a relative tolerance, for values that went through scaling
pub fn assert_close(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    let mean = (actual + expected).abs() / 2.0;
    assert!(diff / mean < TOLERANCE, "got {actual}, expected {expected}");
}
