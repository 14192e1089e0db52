//! Root plot builder, plot features, the output tree, and the assembly
//! entry point.
//!
//! [`plot`] is the single way in: it creates a fresh
//! [`BindingsManager`](crate::BindingsManager), resolves the root registry
//! for the given data source, runs the caller's configurator synchronously
//! against a [`PlotBuilder`], and flattens the builder tree into a
//! [`PlotSpec`]. Any error aborts the invocation; a partially built tree is
//! never returned.

use serde::Serialize;
use serde_json::{Map, Value};
use std::rc::Rc;

use crate::bindings::{BindingsManager, DataBindings, DataSource, Extractor};
use crate::plot::layer::geom::{
    AreaLayer, BarLayer, DensityLayer, HLineLayer, HistogramLayer, LineLayer, PointLayer,
    VLineLayer,
};
use crate::plot::layer::{LayerContext, LayerFragment};
use crate::plot::property::PropertySet;
use crate::plot::scale::Scale;
use crate::{options, Result};

/// Auxiliary plot-level feature: one named top-level entry in the output
/// tree, e.g. the `ggsize` size directive.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFeature {
    kind: String,
    options: Map<String, Value>,
}

impl PlotFeature {
    /// A feature emitting `options` under the top-level key `kind`.
    pub fn new(kind: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            options,
        }
    }

    /// The plot size directive.
    pub fn size(width: u32, height: u32) -> Self {
        let mut opts = Map::new();
        opts.insert(options::WIDTH.to_string(), Value::from(width));
        opts.insert(options::HEIGHT.to_string(), Value::from(height));
        Self::new(options::GGSIZE, opts)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }
}

/// The output specification tree, consumed by the external rendering
/// pipeline. Produced by [`plot`], never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlotSpec {
    options: Map<String, Value>,
}

impl PlotSpec {
    /// All top-level options.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Look up one top-level option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// The tree as a single JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.options.clone())
    }

    /// Consume the tree into its option map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.options
    }
}

/// Root builder of one plot.
pub struct PlotBuilder<T> {
    manager: Rc<BindingsManager>,
    bindings: Rc<DataBindings<T>>,
    props: PropertySet<T>,
    layers: Vec<Box<dyn LayerFragment>>,
    features: Vec<PlotFeature>,
}

impl<T: 'static> PlotBuilder<T> {
    fn new(manager: Rc<BindingsManager>, bindings: Rc<DataBindings<T>>) -> Self {
        Self {
            manager,
            bindings,
            props: PropertySet::new(),
            layers: Vec::new(),
            features: Vec::new(),
        }
    }

    // --- plot-wide properties ---

    /// Map the plot-wide x coordinate.
    pub fn x(&mut self, extractor: &Extractor<T>) -> &mut Self {
        self.aes("x", extractor)
    }

    /// Map the plot-wide y coordinate.
    pub fn y(&mut self, extractor: &Extractor<T>) -> &mut Self {
        self.aes("y", extractor)
    }

    /// Attach a scale to the x coordinate.
    pub fn scale_x(&mut self, scale: Scale) -> &mut Self {
        self.props.named("x").set_scale(scale.for_aesthetic("x"));
        self
    }

    /// Attach a scale to the y coordinate.
    pub fn scale_y(&mut self, scale: Scale) -> &mut Self {
        self.props.named("y").set_scale(scale.for_aesthetic("y"));
        self
    }

    /// Constant plot-wide opacity.
    pub fn alpha(&mut self, alpha: f64) -> &mut Self {
        self.param("alpha", alpha)
    }

    /// Constant plot-wide color.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.param("color", color.into())
    }

    /// Constant plot-wide fill color.
    pub fn fill(&mut self, fill: impl Into<String>) -> &mut Self {
        self.param("fill", fill.into())
    }

    /// Bind any plot-wide property to a column extractor.
    pub fn aes(&mut self, name: &str, extractor: &Extractor<T>) -> &mut Self {
        self.props.named(name).set_mapping(extractor.clone());
        self
    }

    /// Set any plot-wide property to a constant value.
    pub fn param(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.props.named(name).set_constant(value.into());
        self
    }

    // --- features ---

    /// Fix the rendered plot size.
    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.feature(PlotFeature::size(width, height))
    }

    /// Append an auxiliary feature entry.
    pub fn feature(&mut self, feature: PlotFeature) -> &mut Self {
        self.features.push(feature);
        self
    }

    // --- layers ---

    /// Add a line layer over the plot-wide data source.
    pub fn line(&mut self, configure: impl FnOnce(&mut LineLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(LineLayer::new(context), configure)
    }

    /// Add a line layer over its own data source.
    pub fn line_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut LineLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(LineLayer::new(context), configure)
    }

    /// Add a point layer over the plot-wide data source.
    pub fn points(&mut self, configure: impl FnOnce(&mut PointLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(PointLayer::new(context), configure)
    }

    /// Add a point layer over its own data source.
    pub fn points_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut PointLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(PointLayer::new(context), configure)
    }

    /// Add a vertical-line layer over the plot-wide data source.
    pub fn vline(&mut self, configure: impl FnOnce(&mut VLineLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(VLineLayer::new(context), configure)
    }

    /// Add a vertical-line layer over its own data source.
    pub fn vline_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut VLineLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(VLineLayer::new(context), configure)
    }

    /// Add a horizontal-line layer over the plot-wide data source.
    pub fn hline(&mut self, configure: impl FnOnce(&mut HLineLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(HLineLayer::new(context), configure)
    }

    /// Add a horizontal-line layer over its own data source.
    pub fn hline_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut HLineLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(HLineLayer::new(context), configure)
    }

    /// Add a bar layer over the plot-wide data source.
    pub fn bar(&mut self, configure: impl FnOnce(&mut BarLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(BarLayer::new(context), configure)
    }

    /// Add a bar layer over its own data source.
    pub fn bar_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut BarLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(BarLayer::new(context), configure)
    }

    /// Add an area layer over the plot-wide data source.
    pub fn area(&mut self, configure: impl FnOnce(&mut AreaLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(AreaLayer::new(context), configure)
    }

    /// Add an area layer over its own data source.
    pub fn area_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut AreaLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(AreaLayer::new(context), configure)
    }

    /// Add a density layer over the plot-wide data source.
    pub fn density(&mut self, configure: impl FnOnce(&mut DensityLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(DensityLayer::new(context), configure)
    }

    /// Add a density layer over its own data source.
    pub fn density_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut DensityLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(DensityLayer::new(context), configure)
    }

    /// Add a histogram layer over the plot-wide data source.
    pub fn histogram(&mut self, configure: impl FnOnce(&mut HistogramLayer<T>)) -> &mut Self {
        let context = self.own_context();
        self.add_layer(HistogramLayer::new(context), configure)
    }

    /// Add a histogram layer over its own data source.
    pub fn histogram_over<C: 'static>(
        &mut self,
        data: &DataSource<C>,
        configure: impl FnOnce(&mut HistogramLayer<C>),
    ) -> &mut Self {
        let context = self.context_over(data);
        self.add_layer(HistogramLayer::new(context), configure)
    }

    fn own_context(&self) -> LayerContext<T> {
        LayerContext::new(Rc::clone(&self.bindings), self.bindings.source_key())
    }

    fn context_over<C: 'static>(&self, data: &DataSource<C>) -> LayerContext<C> {
        LayerContext::new(self.manager.bindings_for(data), self.bindings.source_key())
    }

    fn add_layer<L: LayerFragment + 'static>(
        &mut self,
        mut layer: L,
        configure: impl FnOnce(&mut L),
    ) -> &mut Self {
        configure(&mut layer);
        self.layers.push(Box::new(layer));
        log::debug!("added layer {} to plot", self.layers.len());
        self
    }

    // --- assembly ---

    /// Flatten the builder tree into the final option map.
    ///
    /// Layer fragments are flattened before the root data materializes, so
    /// every mapping declared against the shared registry registers its
    /// column first.
    fn build(&self) -> Result<Map<String, Value>> {
        let mut spec = self.props.parameters();
        spec.insert(
            options::MAPPING.to_string(),
            Value::Object(self.props.mappings(&self.bindings)?),
        );
        spec.insert(
            options::KIND.to_string(),
            Value::String(options::PLOT_KIND.to_string()),
        );
        let mut layers = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            layers.push(Value::Object(layer.fragment()?));
        }
        spec.insert(options::LAYERS.to_string(), Value::Array(layers));
        spec.insert(
            options::DATA.to_string(),
            Value::Object(self.bindings.columns()),
        );
        spec.insert(
            options::SCALES.to_string(),
            Value::Array(self.props.scales()),
        );
        for feature in &self.features {
            spec.insert(
                feature.kind().to_string(),
                Value::Object(feature.options().clone()),
            );
        }
        Ok(spec)
    }
}

/// Assemble a plot specification.
///
/// Creates a fresh bindings manager, resolves the root registry for
/// `data`, runs `configure` synchronously against the root builder, and
/// flattens the result. The whole operation is synchronous and
/// side-effect-free beyond the returned tree.
///
/// # Example
/// ```
/// use ggbuild::{plot, DataSource, Extractor};
/// use serde_json::json;
///
/// let data = DataSource::new(vec![1.0, 2.0, 4.0]);
/// let value = Extractor::new(|v: &f64| json!(*v));
/// let spec = plot(data, |p| {
///     p.histogram(|l| {
///         l.x(&value);
///     });
/// })
/// .unwrap();
/// assert_eq!(spec.get("data"), Some(&json!({"list0": [1.0, 2.0, 4.0]})));
/// ```
pub fn plot<T: 'static>(
    data: impl Into<DataSource<T>>,
    configure: impl FnOnce(&mut PlotBuilder<T>),
) -> Result<PlotSpec> {
    let manager = Rc::new(BindingsManager::new());
    let bindings = manager.bindings_for(&data.into());
    let mut builder = PlotBuilder::new(manager, bindings);
    configure(&mut builder);
    let options = builder.build()?;
    Ok(PlotSpec { options })
}
