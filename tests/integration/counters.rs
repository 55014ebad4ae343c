use snmp_metrics::prelude::*;

use crate::common::{at, poll, TestMetricBuilder};

#[test]
fn test_counter32_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter32").build()?;

    let cooked = poll(&mut metric, RawValue::Counter32(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Float(15800.0));
    assert!(cooked.is_measurement());
    Ok(())
}

#[test]
fn test_counter32_scale_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter32").scale(0.001).build()?;

    // 15800 * 0.001 = 15.8
    let cooked = poll(&mut metric, RawValue::Counter32(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Float(15.8));
    Ok(())
}

#[test]
fn test_counter32_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter32").to_integer().build()?;

    let cooked = poll(&mut metric, RawValue::Counter32(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Integer(15800));
    Ok(())
}

#[test]
fn test_counter32_scale_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter32").scale(0.001).to_integer().build()?;

    // 15.8 rounds to 16
    let cooked = poll(&mut metric, RawValue::Counter32(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Integer(16));
    Ok(())
}

#[test]
fn test_counter64_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter64").oid(".1.3.6.1.2.1.31.1.1.1.11.8").build()?;

    let cooked = poll(&mut metric, RawValue::Counter64(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Float(15800.0));
    Ok(())
}

#[test]
fn test_counter64_scale_to_float() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter64").scale(0.001).build()?;

    let cooked = poll(&mut metric, RawValue::Counter64(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Float(15.8));
    Ok(())
}

#[test]
fn test_counter64_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter64").to_integer().build()?;

    let cooked = poll(&mut metric, RawValue::Counter64(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Integer(15800));
    Ok(())
}

#[test]
fn test_counter64_scale_to_integer() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter64").scale(0.001).to_integer().build()?;

    let cooked = poll(&mut metric, RawValue::Counter64(15800), at(0))?;
    assert_eq!(cooked.value(), CookedValue::Integer(16));
    Ok(())
}

#[test]
fn test_absolute_counter_is_never_differenced() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter64").rate(true).build()?;

    poll(&mut metric, RawValue::Counter64(156_000), at(0))?;
    let cooked = poll(&mut metric, RawValue::Counter64(162_600), at(60))?;
    assert_eq!(cooked.value(), CookedValue::Float(162_600.0));
    Ok(())
}

#[test]
fn test_counter_width_mismatch_is_rejected() -> Result<()> {
    let mut metric = TestMetricBuilder::new("Counter32").build()?;

    let err = poll(&mut metric, RawValue::Counter64(1), at(0)).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert!(metric.cooked().is_none());
    Ok(())
}
