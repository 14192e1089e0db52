/*!
# ggbuild - Fluent Plot Specification Builder

ggbuild lets a caller describe a statistical chart - data, aesthetic
mappings, geometric layers, scales, statistics, positions - through a
fluent builder API and flattens that description into a declarative plot
specification: a nested mapping of option keys to values, consumed verbatim
by an external rendering pipeline.

There is no rendering, no layout, and no statistical computation here;
those belong to the downstream spec-transform and renderer, which this
crate treats as opaque collaborators.

## Example

```
use ggbuild::{plot, DataSource, Extractor, Stat};
use serde_json::json;

let data = DataSource::new(vec![(1, 2), (2, 3)]);
let first = Extractor::new(|r: &(i32, i32)| json!(r.0));

let spec = plot(data, |p| {
    p.x(&first);
    p.line(|l| {
        l.x(&first);
        l.color("red");
    });
    p.bar(|l| {
        l.stat(Stat::density());
    });
})
.unwrap();

assert_eq!(spec.get("kind"), Some(&json!("plot")));
```

## Architecture

- [`bindings`] - data sources, column extractors, and the lazy
  column-binding registry shared across builders
- [`plot`] - the builder hierarchy (plot, layers, properties, scales)
  and the assembly entry point
- [`naming`] - generated column-name conventions
- [`options`] - the verbatim option-key strings of the output contract

Column extraction runs exactly once per data source, after all builders
have declared their mappings. Registering a new mapping after the shared
columns have been read is a construction-order bug and fails loudly with
[`GgbuildError::FinalizedBindings`].
*/

pub mod bindings;
pub mod naming;
pub mod options;
pub mod plot;

// Re-export key types for convenience
pub use bindings::{BindingsManager, DataBindings, DataSource, Extractor};
pub use plot::layer::geom::{
    AreaLayer, BarLayer, DensityLayer, GeomType, HLineLayer, HistogramLayer, LineLayer,
    PointLayer, VLineLayer,
};
pub use plot::layer::{LayerBuilder, Position, Stat, StatKind};
pub use plot::main::{plot, PlotBuilder, PlotFeature, PlotSpec};
pub use plot::property::{Property, PropertySet};
pub use plot::scale::Scale;

/// Main library error type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GgbuildError {
    /// A new aesthetic mapping was registered against a data-binding
    /// registry whose columns were already materialized. This is a
    /// construction-order bug in caller code: some builder read the shared
    /// dataset before every layer finished declaring its mappings.
    #[error("data bindings already materialized: cannot register a new mapping")]
    FinalizedBindings,
}

pub type Result<T> = std::result::Result<T, GgbuildError>;
