use snmp_metrics::prelude::*;

use crate::common::{assert_close, at, poll, TestMetricBuilder};

/// Feeds 156000 and, 60 seconds later, 162600
fn two_polls(metric: &mut MetricInstance, wide: bool) -> Result<CookedSample> {
    let (first, second) = if wide {
        (RawValue::Counter64(156_000), RawValue::Counter64(162_600))
    } else {
        (RawValue::Counter32(156_000), RawValue::Counter32(162_600))
    };
    let baseline = poll(metric, first, at(0))?;
    assert_eq!(baseline.state, SampleState::Baseline);
    poll(metric, second, at(60))
}

#[test]
fn test_counter32_delta_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER32").build()?;

    // 162600 - 156000 = 6600
    let cooked = two_polls(&mut metric, false)?;
    assert_eq!(cooked.value(), CookedValue::Float(6600.0));
    assert!(cooked.is_measurement());
    Ok(())
}

#[test]
fn test_counter32_delta_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER32").to_integer().build()?;

    let cooked = two_polls(&mut metric, false)?;
    assert_eq!(cooked.value(), CookedValue::Integer(6600));
    Ok(())
}

#[test]
fn test_counter32_rate_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER32").rate(true).build()?;

    // 6600 / 60 = 110
    let cooked = two_polls(&mut metric, false)?;
    assert_eq!(cooked.value(), CookedValue::Float(110.0));
    Ok(())
}

#[test]
fn test_counter32_delta_scale_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER32").scale(0.001).build()?;

    // 6600 * 0.001 lands on 6.6000000000000005
    let cooked = two_polls(&mut metric, false)?;
    let value = cooked.value().as_float().expect("float output");
    assert_close(value, 6.6);
    Ok(())
}

#[test]
fn test_counter32_delta_scale_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER32").scale(0.001).to_integer().build()?;

    let cooked = two_polls(&mut metric, false)?;
    assert_eq!(cooked.value(), CookedValue::Integer(7));
    Ok(())
}

#[test]
fn test_counter64_delta_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").oid(".1.3.6.1.4.1.2021.4.3.0").build()?;

    let cooked = two_polls(&mut metric, true)?;
    assert_eq!(cooked.value(), CookedValue::Float(6600.0));
    Ok(())
}

#[test]
fn test_counter64_delta_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").to_integer().build()?;

    let cooked = two_polls(&mut metric, true)?;
    assert_eq!(cooked.value(), CookedValue::Integer(6600));
    Ok(())
}

#[test]
fn test_counter64_rate_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").rate(true).build()?;

    let cooked = two_polls(&mut metric, true)?;
    assert_eq!(cooked.value(), CookedValue::Float(110.0));
    Ok(())
}

#[test]
fn test_counter64_delta_scale_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").scale(0.001).build()?;

    let cooked = two_polls(&mut metric, true)?;
    assert_close(cooked.value().as_f64(), 6.6);
    Ok(())
}

#[test]
fn test_counter64_delta_scale_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").scale(0.001).to_integer().build()?;

    let cooked = two_polls(&mut metric, true)?;
    assert_eq!(cooked.value(), CookedValue::Integer(7));
    Ok(())
}

#[test]
fn test_counter32_wraparound() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER32").rate(true).build()?;

    poll(&mut metric, RawValue::Counter32(u32::MAX - 99), at(0))?;
    // 100 steps up to and through the wrap, then 500 more
    let cooked = poll(&mut metric, RawValue::Counter32(500), at(10))?;
    assert_eq!(cooked.value(), CookedValue::Float(60.0));
    Ok(())
}

#[test]
fn test_counter64_wraparound() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").to_integer().build()?;

    poll(&mut metric, RawValue::Counter64(u64::MAX), at(0))?;
    let cooked = poll(&mut metric, RawValue::Counter64(9), at(10))?;
    assert_eq!(cooked.value(), CookedValue::Integer(10));
    Ok(())
}

#[test]
fn test_rate_with_zero_elapsed_time_is_an_error() -> Result<()> {
    let mut metric = TestMetricBuilder::new("COUNTER64").rate(true).build()?;

    poll(&mut metric, RawValue::Counter64(156_000), at(60))?;
    let err = poll(&mut metric, RawValue::Counter64(162_600), at(60)).unwrap_err();
    assert!(matches!(err, Error::InvalidElapsedTime { .. }));

    // Recovers on the next well-ordered poll
    let cooked = poll(&mut metric, RawValue::Counter64(168_600), at(120))?;
    assert_eq!(cooked.value(), CookedValue::Float(100.0));
    Ok(())
}
