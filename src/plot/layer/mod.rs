//! Layer builders: one per geometric layer of the plot.
//!
//! Every layer owns a reference to exactly one data-binding registry (by
//! default the plot's, or its own when constructed over a different data
//! source), a geometry kind, a statistic, a position adjustment, and a
//! property set. Flattening a layer produces its fragment of the output
//! specification; a layer bound to a registry other than the root's emits
//! its own materialized `data` entry.
//!
//! Layers are always constructed through the plot builder's geometry
//! methods ([`PlotBuilder::line`](crate::PlotBuilder::line) and friends),
//! never directly.

use serde_json::{Map, Value};
use std::rc::Rc;

use crate::bindings::{DataBindings, Extractor, SourceKey};
use crate::plot::property::PropertySet;
use crate::{options, Result};

pub mod geom;
pub mod position;
pub mod stat;

pub use geom::GeomType;
pub use position::Position;
pub use stat::{Stat, StatKind};

/// Construction context handed to a layer by the plot builder: the layer's
/// resolved registry plus the identity of the plot's data source.
pub(crate) struct LayerContext<T> {
    pub(crate) bindings: Rc<DataBindings<T>>,
    pub(crate) plot_key: SourceKey,
}

impl<T> LayerContext<T> {
    pub(crate) fn new(bindings: Rc<DataBindings<T>>, plot_key: SourceKey) -> Self {
        Self { bindings, plot_key }
    }
}

/// Flattening interface the plot stores its (heterogeneously typed) layers
/// under.
pub(crate) trait LayerFragment {
    fn fragment(&self) -> Result<Map<String, Value>>;
}

/// Common core of every layer builder.
pub struct LayerBuilder<T> {
    bindings: Rc<DataBindings<T>>,
    plot_key: SourceKey,
    geom: GeomType,
    stat: Stat,
    position: Position,
    props: PropertySet<T>,
}

impl<T> LayerBuilder<T> {
    pub(crate) fn new(
        context: LayerContext<T>,
        geom: GeomType,
        stat: Stat,
        position: Position,
    ) -> Self {
        Self {
            bindings: context.bindings,
            plot_key: context.plot_key,
            geom,
            stat,
            position,
            props: PropertySet::new(),
        }
    }

    /// Geometry kind of this layer.
    pub fn geom(&self) -> GeomType {
        self.geom
    }

    /// Override the statistic.
    pub fn stat(&mut self, stat: Stat) -> &mut Self {
        self.stat = stat;
        self
    }

    /// Override the position adjustment.
    pub fn position(&mut self, position: Position) -> &mut Self {
        self.position = position;
        self
    }

    /// Constant opacity.
    pub fn alpha(&mut self, alpha: f64) -> &mut Self {
        self.param("alpha", alpha)
    }

    /// Constant color.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.param("color", color.into())
    }

    /// Constant fill color.
    pub fn fill(&mut self, fill: impl Into<String>) -> &mut Self {
        self.param("fill", fill.into())
    }

    /// Bind any property to a column extractor.
    pub fn aes(&mut self, name: &str, extractor: &Extractor<T>) -> &mut Self {
        self.props.named(name).set_mapping(extractor.clone());
        self
    }

    /// Set any property to a constant value.
    pub fn param(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.props.named(name).set_constant(value.into());
        self
    }

    /// Flatten into this layer's fragment of the specification tree.
    pub(crate) fn fragment(&self) -> Result<Map<String, Value>> {
        let mut spec = self.props.parameters();
        spec.insert(
            options::MAPPING.to_string(),
            Value::Object(self.props.mappings(&self.bindings)?),
        );
        spec.insert(
            options::GEOM.to_string(),
            Value::String(self.geom.to_string()),
        );
        spec.insert(
            options::STAT.to_string(),
            Value::String(self.stat.kind().to_string()),
        );
        spec.insert(
            options::POSITION.to_string(),
            Value::String(self.position.to_string()),
        );
        for (name, value) in self.stat.parameters() {
            spec.insert(name.clone(), value.clone());
        }
        // Layers over the plot-wide data source share the root data entry.
        if self.bindings.source_key() != self.plot_key {
            spec.insert(
                options::DATA.to_string(),
                Value::Object(self.bindings.columns()),
            );
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{BindingsManager, DataSource};
    use serde_json::json;

    fn context_over(
        manager: &BindingsManager,
        data: &DataSource<i32>,
        plot_key: SourceKey,
    ) -> LayerContext<i32> {
        LayerContext::new(manager.bindings_for(data), plot_key)
    }

    #[test]
    fn test_fragment_carries_geom_stat_position() {
        let manager = BindingsManager::new();
        let data = DataSource::new(vec![1, 2]);
        let context = context_over(&manager, &data, data.key());
        let layer = LayerBuilder::new(context, GeomType::Line, Stat::identity(), Position::Identity);

        let fragment = layer.fragment().unwrap();
        assert_eq!(fragment.get("geom"), Some(&json!("line")));
        assert_eq!(fragment.get("stat"), Some(&json!("identity")));
        assert_eq!(fragment.get("position"), Some(&json!("identity")));
        assert_eq!(fragment.get("mapping"), Some(&json!({})));
        assert!(fragment.get("data").is_none());
    }

    #[test]
    fn test_fragment_merges_stat_parameters() {
        let manager = BindingsManager::new();
        let data = DataSource::new(vec![1, 2]);
        let context = context_over(&manager, &data, data.key());
        let mut layer =
            LayerBuilder::new(context, GeomType::Histogram, Stat::bin(), Position::Stack);
        layer.stat(Stat::bin().bins(25));

        let fragment = layer.fragment().unwrap();
        assert_eq!(fragment.get("stat"), Some(&json!("bin")));
        assert_eq!(fragment.get("bins"), Some(&json!(25)));
    }

    #[test]
    fn test_own_data_emitted_when_source_differs() {
        let manager = BindingsManager::new();
        let plot_data = DataSource::new(vec![1, 2]);
        let layer_data = DataSource::new(vec![10, 20]);
        let context = context_over(&manager, &layer_data, plot_data.key());
        let mut layer =
            LayerBuilder::new(context, GeomType::Point, Stat::identity(), Position::Identity);
        layer.aes("x", &Extractor::new(|v: &i32| json!(*v)));

        let fragment = layer.fragment().unwrap();
        assert_eq!(fragment.get("mapping"), Some(&json!({"x": "list0"})));
        assert_eq!(fragment.get("data"), Some(&json!({"list0": [10, 20]})));
    }

    #[test]
    fn test_constants_and_overrides() {
        let manager = BindingsManager::new();
        let data = DataSource::new(vec![1]);
        let context = context_over(&manager, &data, data.key());
        let mut layer =
            LayerBuilder::new(context, GeomType::Bar, Stat::count(), Position::Stack);
        layer.alpha(0.4).color("steelblue").position(Position::Dodge);

        let fragment = layer.fragment().unwrap();
        assert_eq!(fragment.get("alpha"), Some(&json!(0.4)));
        assert_eq!(fragment.get("color"), Some(&json!("steelblue")));
        assert_eq!(fragment.get("position"), Some(&json!("dodge")));
    }
}
