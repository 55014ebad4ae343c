//! # Metric Descriptor
//!
//! Immutable description of how one metric is computed: which raw wire
//! types it accepts, which temporal transform applies, the linear
//! scale/shift and the published representation.
//!
//! Descriptors are normally built from a [`MetricConfig`](crate::config::MetricConfig)
//! and then shared read-only (behind an `Arc`) by every
//! [`MetricInstance`](crate::metric::MetricInstance) polling that metric.
//!
//! ## Example
//!
//! ```rust
//! use snmp_metrics::descriptor::{CounterWidth, MetricDescriptor, OutputKind, SourceKind};
//!
//! let descriptor = MetricDescriptor::new(
//!     "ifHCInOctets",
//!     ".1.3.6.1.2.1.31.1.1.1.6.1",
//!     SourceKind::DeltaCounter(CounterWidth::Bits64),
//!     OutputKind::Float,
//! )
//! .with_rate(true);
//!
//! assert!(descriptor.rate_enabled());
//! assert!(descriptor.validate().is_ok());
//! ```

mod types;

pub use types::{CounterWidth, OutputKind, SourceKind};

use serde::Serialize;

use crate::error::{Error, Result};

/// Configuration describing how one metric is computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDescriptor {
    id: String,
    field_name: String,
    description: String,
    source_address: String,
    source_kind: SourceKind,
    compute_rate: bool,
    scale: f64,
    shift: f64,
    output_kind: OutputKind,
    is_tag: bool,
    extra_data: String,
}

impl MetricDescriptor {
    /// Creates a descriptor with no rate, no scaling and no metadata.
    ///
    /// The field name defaults to the id.
    pub fn new(
        id: impl Into<String>,
        source_address: impl Into<String>,
        source_kind: SourceKind,
        output_kind: OutputKind,
    ) -> Self {
        let id = id.into();
        Self {
            field_name: id.clone(),
            id,
            description: String::new(),
            source_address: source_address.into(),
            source_kind,
            compute_rate: false,
            scale: 0.0,
            shift: 0.0,
            output_kind,
            is_tag: false,
            extra_data: String::new(),
        }
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Divide counter deltas by the elapsed seconds between polls
    pub fn with_rate(mut self, compute_rate: bool) -> Self {
        self.compute_rate = compute_rate;
        self
    }

    /// Linear post-transform `value * scale + shift`; a zero scale disables it
    pub fn with_scale_shift(mut self, scale: f64, shift: f64) -> Self {
        self.scale = scale;
        self.shift = shift;
        self
    }

    pub fn with_tag(mut self, is_tag: bool) -> Self {
        self.is_tag = is_tag;
        self
    }

    pub fn with_extra_data(mut self, extra_data: impl Into<String>) -> Self {
        self.extra_data = extra_data.into();
        self
    }

    /// Checks the invariants a descriptor must hold before it is used
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_config("metric id must not be empty"));
        }
        if !self.scale.is_finite() {
            return Err(Error::invalid_config(format!(
                "metric {}: scale must be finite, got {}",
                self.id, self.scale
            )));
        }
        if !self.shift.is_finite() {
            return Err(Error::invalid_config(format!(
                "metric {}: shift must be finite, got {}",
                self.id, self.shift
            )));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Protocol identifier (OID) the samples are read from
    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    /// The configured rate flag, as given
    pub fn compute_rate(&self) -> bool {
        self.compute_rate
    }

    /// Whether a rate is actually computed. Only delta counters honour the flag.
    pub fn rate_enabled(&self) -> bool {
        self.compute_rate && self.source_kind.is_delta()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Whether scale/shift applies. A scale of exactly zero means "not configured".
    pub fn has_scaling(&self) -> bool {
        self.scale != 0.0
    }

    pub fn output_kind(&self) -> OutputKind {
        self.output_kind
    }

    pub fn is_tag(&self) -> bool {
        self.is_tag
    }

    pub fn extra_data(&self) -> &str {
        &self.extra_data
    }
}
