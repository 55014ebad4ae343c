//! # Transform Engine
//!
//! Applies the source-kind specific temporal transform to a canonical raw
//! value and then the descriptor's linear scale/shift.
//!
//! * `PlainInteger` and `AbsoluteCounter`: the latest raw value, as is.
//! * `DeltaCounter`: the difference to the previous raw value, taken modulo
//!   the counter width so that a counter which wrapped between two polls
//!   still yields its true distance. With the rate flag set the difference
//!   is divided by the seconds elapsed between the two samples.
//!
//! Counter history lives in a [`CounterState`], owned by exactly one metric
//! instance. The first sample of a delta counter only primes that state and
//! yields [`Transformed::Baseline`].

use tracing::{debug, warn};

use crate::core::metrics::Metric;
use crate::descriptor::{CounterWidth, MetricDescriptor, SourceKind};
use crate::error::{Error, Result};
use crate::sample::CanonicalValue;

/// Retained history of a delta counter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CounterState {
    /// No sample recorded yet
    #[default]
    Uninitialized,
    /// Last raw counter value and when it was read
    Primed(Metric<u64>),
}

impl CounterState {
    pub fn is_primed(&self) -> bool {
        matches!(self, CounterState::Primed(_))
    }

    /// The previous sample, if any
    pub fn last(&self) -> Option<&Metric<u64>> {
        match self {
            CounterState::Primed(m) => Some(m),
            CounterState::Uninitialized => None,
        }
    }
}

/// Output of the temporal transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformed {
    /// First sample of a delta counter; no measurement exists yet
    Baseline,
    /// A transformed (and scaled) value
    Value(f64),
}

/// Difference between two counter readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterDelta {
    pub delta: u64,
    /// The counter went through its maximum between the two readings
    pub wrapped: bool,
}

/// Unsigned distance from `previous` to `current` modulo the counter width.
///
/// A decrease is read as one wrap past the width's maximum, never as a
/// negative value.
pub fn counter_delta(previous: u64, current: u64, width: CounterWidth) -> CounterDelta {
    let mask = width.max_value();
    CounterDelta {
        delta: current.wrapping_sub(previous) & mask,
        wrapped: current < previous,
    }
}

/// Applies `value * scale + shift`, or nothing when `scale` is zero
pub fn scale_shift(value: f64, scale: f64, shift: f64) -> f64 {
    if scale == 0.0 {
        value
    } else {
        value * scale + shift
    }
}

/// `delta` per second elapsed from `previous` to `current`.
///
/// Returns `None` when no positive time elapsed between the two readings.
pub fn per_second<T, U>(delta: f64, previous: &Metric<T>, current: &Metric<U>) -> Option<f64> {
    current
        .seconds_since(previous)
        .filter(|secs| *secs > 0.0)
        .map(|secs| delta / secs)
}

/// Runs one transform step for `current`, updating `state` for delta counters.
///
/// For delta counters the state always advances to `current`, including
/// when the elapsed time turns out to be invalid, so the next poll can
/// produce a value again.
pub fn apply(
    descriptor: &MetricDescriptor,
    state: &mut CounterState,
    current: Metric<CanonicalValue>,
) -> Result<Transformed> {
    let value = match descriptor.source_kind() {
        SourceKind::PlainInteger | SourceKind::AbsoluteCounter(_) => current.value.as_f64(),
        SourceKind::DeltaCounter(width) => {
            let raw = current.value.as_unsigned().ok_or_else(|| {
                Error::not_representable(descriptor.id(), "counter value must be unsigned")
            })?;
            let sample = Metric::with_timestamp(raw, current.timestamp);

            match std::mem::replace(state, CounterState::Primed(sample)) {
                CounterState::Uninitialized => {
                    debug!(metric = %descriptor.id(), raw, "counter baseline recorded");
                    return Ok(Transformed::Baseline);
                }
                CounterState::Primed(previous) => delta_value(descriptor, width, &previous, &sample)?,
            }
        }
    };

    Ok(Transformed::Value(scale_shift(value, descriptor.scale(), descriptor.shift())))
}

#[allow(clippy::cast_precision_loss)]
fn delta_value(
    descriptor: &MetricDescriptor,
    width: CounterWidth,
    previous: &Metric<u64>,
    current: &Metric<u64>,
) -> Result<f64> {
    let step = counter_delta(previous.value, current.value, width);
    if step.wrapped {
        warn!(
            metric = %descriptor.id(),
            previous = previous.value,
            current = current.value,
            bits = width.bits(),
            delta = step.delta,
            "counter wrapped"
        );
    }

    let delta = step.delta as f64;
    if !descriptor.rate_enabled() {
        return Ok(delta);
    }

    per_second(delta, previous, current).ok_or_else(|| {
        Error::invalid_elapsed(descriptor.id(), current.signed_millis_since(previous))
    })
}
