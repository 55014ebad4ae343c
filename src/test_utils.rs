use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tracing_subscriber::EnvFilter;

use crate::config::MetricConfig;
use crate::descriptor::MetricDescriptor;
use crate::sample::{RawSample, RawValue};

/// Installs a test-writer subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixed reference time so tests never depend on the wall clock
pub fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + secs)
}

/// Builds a validated descriptor the way configuration loading would
pub fn descriptor(data_src_type: &str, get_rate: bool, scale: f64, conversion: i64) -> Arc<MetricDescriptor> {
    let cfg = MetricConfig {
        id: "my_counter".to_string(),
        field_name: "anycounter".to_string(),
        base_oid: ".1.3.6.1.2.1.6.10.0".to_string(),
        data_src_type: data_src_type.to_string(),
        get_rate,
        scale,
        conversion,
        ..Default::default()
    };
    match cfg.into_descriptor() {
        Ok(d) => Arc::new(d),
        Err(e) => panic!("test descriptor is invalid: {e}"),
    }
}

pub fn sample(value: RawValue) -> RawSample {
    RawSample::new(".1.3.6.1.2.1.6.10.0", value)
}
