use std::sync::Arc;

use snmp_metrics::prelude::*;

/// Builds metric instances through the configuration path
pub struct TestMetricBuilder {
    id: String,
    field_name: String,
    base_oid: String,
    data_src_type: String,
    get_rate: bool,
    scale: f64,
    shift: f64,
    conversion: i64,
}

impl TestMetricBuilder {
    pub fn new(data_src_type: &str) -> Self {
        Self {
            id: "my_counter".to_string(),
            field_name: "anycounter".to_string(),
            base_oid: ".1.3.6.1.2.1.6.10.0".to_string(),
            data_src_type: data_src_type.to_string(),
            get_rate: false,
            scale: 0.0,
            shift: 0.0,
            conversion: 0,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn oid(mut self, oid: &str) -> Self {
        self.base_oid = oid.to_string();
        self
    }

    pub fn rate(mut self, get_rate: bool) -> Self {
        self.get_rate = get_rate;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    pub fn to_integer(mut self) -> Self {
        self.conversion = 1;
        self
    }

    pub fn config(&self) -> MetricConfig {
        MetricConfig {
            id: self.id.clone(),
            field_name: self.field_name.clone(),
            base_oid: self.base_oid.clone(),
            data_src_type: self.data_src_type.clone(),
            get_rate: self.get_rate,
            scale: self.scale,
            shift: self.shift,
            conversion: self.conversion,
            ..Default::default()
        }
    }

    pub fn descriptor(&self) -> Result<Arc<MetricDescriptor>> {
        Ok(Arc::new(self.config().into_descriptor()?))
    }

    pub fn build(self) -> Result<MetricInstance> {
        MetricInstance::from_config(self.config())
    }
}
