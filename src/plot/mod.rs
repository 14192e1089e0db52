//! The builder hierarchy and the assembly entry point.
//!
//! A plot is a tree of builders: one root ([`main::PlotBuilder`]) owning
//! zero or more layer builders plus auxiliary feature entries. Each builder
//! owns a property set and knows how to flatten itself into its fragment of
//! the output specification tree.
//!
//! The module is organized into submodules:
//!
//! - `main` - root plot builder, plot features, output tree, entry point
//! - `layer` - layer builder core and the per-geometry typed builders
//! - `property` - named property slots (constants, mappings, scales)
//! - `scale` - scale fragments for the coordinate properties

pub mod layer;
pub mod main;
pub mod property;
pub mod scale;

// Re-export key types for convenience
pub use layer::geom::GeomType;
pub use layer::{LayerBuilder, Position, Stat, StatKind};
pub use main::{plot, PlotBuilder, PlotFeature, PlotSpec};
pub use property::{Property, PropertySet};
pub use scale::Scale;
