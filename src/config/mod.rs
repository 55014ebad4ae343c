//! Metric definitions as they appear in configuration files.
//!
//! [`MetricConfig`] is the loosely typed form read from JSON. Converting it
//! into a [`MetricDescriptor`] resolves the source-kind token and the output
//! code and checks the numeric fields, so a descriptor that exists is always
//! usable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptor::{MetricDescriptor, OutputKind, SourceKind};
use crate::error::{Error, Result};

/// Raw metric definition, field for field as stored in configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    pub id: String,
    pub field_name: String,
    pub description: String,
    /// OID the metric is read from
    pub base_oid: String,
    /// Source-kind token, e.g. `Integer32`, `Counter64`, `COUNTER32`
    pub data_src_type: String,
    pub get_rate: bool,
    pub scale: f64,
    pub shift: f64,
    pub is_tag: bool,
    pub extra_data: String,
    /// `0` for float output, `1` for rounded integer output
    pub conversion: i64,
}

impl MetricConfig {
    /// Parses one metric definition from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Parses a JSON array of metric definitions
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Validates the definition and builds the descriptor
    pub fn into_descriptor(self) -> Result<MetricDescriptor> {
        MetricDescriptor::try_from(self)
    }
}

impl TryFrom<MetricConfig> for MetricDescriptor {
    type Error = Error;

    fn try_from(cfg: MetricConfig) -> Result<Self> {
        let source_kind: SourceKind = cfg.data_src_type.parse()?;
        let output_kind = OutputKind::try_from(cfg.conversion)?;

        if cfg.get_rate && !source_kind.is_delta() {
            debug!(metric = %cfg.id, kind = %source_kind, "rate requested on a non-delta kind, ignoring");
        }

        let field_name = if cfg.field_name.is_empty() { cfg.id.clone() } else { cfg.field_name };

        let descriptor = MetricDescriptor::new(cfg.id, cfg.base_oid, source_kind, output_kind)
            .with_field_name(field_name)
            .with_description(cfg.description)
            .with_rate(cfg.get_rate)
            .with_scale_shift(cfg.scale, cfg.shift)
            .with_tag(cfg.is_tag)
            .with_extra_data(cfg.extra_data);
        descriptor.validate()?;

        debug!(
            metric = %descriptor.id(),
            kind = %descriptor.source_kind(),
            output = %descriptor.output_kind(),
            "metric descriptor loaded"
        );
        Ok(descriptor)
    }
}

/// Parses and validates a JSON array of metric definitions.
///
/// Fails on the first invalid definition.
pub fn load_descriptors(json: &str) -> Result<Vec<MetricDescriptor>> {
    MetricConfig::list_from_json(json)?
        .into_iter()
        .map(MetricDescriptor::try_from)
        .collect()
}
