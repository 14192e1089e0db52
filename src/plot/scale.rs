//! Scale fragments attached to the plot's coordinate properties.
//!
//! A scale only carries the options the caller set; everything else is left
//! to the downstream pipeline's defaults. The `datetime` flavor marks the
//! scale as date-time via an extra option, mirroring the output contract.

use serde_json::{Map, Value};

use crate::options;

/// Scale configuration for one aesthetic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scale {
    aesthetic: Option<String>,
    name: Option<String>,
    breaks: Option<Vec<Value>>,
    labels: Option<Vec<String>>,
    limits: Option<Vec<Value>>,
    expand: Option<Value>,
    na_value: Option<Value>,
    extra: Map<String, Value>,
}

impl Scale {
    /// A scale with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A date-time scale.
    pub fn datetime() -> Self {
        Self::new().with_extra(options::DATE_TIME, Value::Bool(true))
    }

    /// Set the scale title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set explicit break positions.
    pub fn with_breaks(mut self, breaks: Vec<Value>) -> Self {
        self.breaks = Some(breaks);
        self
    }

    /// Set labels for the break positions.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the domain limits.
    pub fn with_limits(mut self, limits: Vec<Value>) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Set the range expansion.
    pub fn with_expand(mut self, expand: impl Into<Value>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Set the replacement value for missing data.
    pub fn with_na_value(mut self, na_value: impl Into<Value>) -> Self {
        self.na_value = Some(na_value.into());
        self
    }

    /// Set an extra option passed through verbatim.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Bind the scale to the aesthetic whose property it is attached to.
    pub(crate) fn for_aesthetic(mut self, aesthetic: &str) -> Self {
        self.aesthetic = Some(aesthetic.to_string());
        self
    }

    /// Flatten into a scale fragment; only set options are emitted.
    pub fn to_spec(&self) -> Map<String, Value> {
        let mut spec = Map::new();
        if let Some(aesthetic) = &self.aesthetic {
            spec.insert(options::AESTHETIC.to_string(), Value::String(aesthetic.clone()));
        }
        if let Some(name) = &self.name {
            spec.insert(options::NAME.to_string(), Value::String(name.clone()));
        }
        if let Some(breaks) = &self.breaks {
            spec.insert(options::BREAKS.to_string(), Value::Array(breaks.clone()));
        }
        if let Some(labels) = &self.labels {
            let labels = labels.iter().cloned().map(Value::String).collect();
            spec.insert(options::LABELS.to_string(), Value::Array(labels));
        }
        if let Some(limits) = &self.limits {
            spec.insert(options::LIMITS.to_string(), Value::Array(limits.clone()));
        }
        if let Some(expand) = &self.expand {
            spec.insert(options::EXPAND.to_string(), expand.clone());
        }
        if let Some(na_value) = &self.na_value {
            spec.insert(options::NA_VALUE.to_string(), na_value.clone());
        }
        for (key, value) in &self.extra {
            spec.insert(key.clone(), value.clone());
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_scale_emits_nothing() {
        assert!(Scale::new().to_spec().is_empty());
    }

    #[test]
    fn test_datetime_scale_spec() {
        let spec = Scale::datetime()
            .with_name("date")
            .for_aesthetic("x")
            .to_spec();
        assert_eq!(
            Value::Object(spec),
            json!({"aesthetic": "x", "name": "date", "datetime": true})
        );
    }

    #[test]
    fn test_full_scale_spec() {
        let spec = Scale::new()
            .with_breaks(vec![json!(0), json!(10)])
            .with_labels(vec!["low".to_string(), "high".to_string()])
            .with_limits(vec![json!(0), json!(100)])
            .with_expand(json!([0.05, 0.0]))
            .with_na_value("none")
            .for_aesthetic("y")
            .to_spec();
        assert_eq!(
            Value::Object(spec),
            json!({
                "aesthetic": "y",
                "breaks": [0, 10],
                "labels": ["low", "high"],
                "limits": [0, 100],
                "expand": [0.05, 0.0],
                "na_value": "none"
            })
        );
    }
}
