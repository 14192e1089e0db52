//! Geometry kinds and the typed layer builders, one per geometry.
//!
//! Each geometry variant is a thin wrapper around [`LayerBuilder`] that
//! fixes the geometry kind, its default statistic and position, and the
//! properties that variant declares. The wrappers deref to the core
//! builder, so the shared configuration surface (`alpha`, `color`, `fill`,
//! `stat`, `position`, `aes`, `param`) stays available on every layer.

use serde::{Deserialize, Serialize};

mod area;
mod bar;
mod density;
mod histogram;
mod hline;
mod line;
mod point;
mod vline;

pub use area::AreaLayer;
pub use bar::BarLayer;
pub use density::DensityLayer;
pub use histogram::HistogramLayer;
pub use hline::HLineLayer;
pub use line::LineLayer;
pub use point::PointLayer;
pub use vline::VLineLayer;

/// Closed set of geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeomType {
    Line,
    Point,
    VLine,
    HLine,
    Bar,
    Area,
    Density,
    Histogram,
}

impl std::fmt::Display for GeomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GeomType::Line => "line",
            GeomType::Point => "point",
            GeomType::VLine => "vline",
            GeomType::HLine => "hline",
            GeomType::Bar => "bar",
            GeomType::Area => "area",
            GeomType::Density => "density",
            GeomType::Histogram => "histogram",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GeomType::Line.to_string(), "line");
        assert_eq!(GeomType::VLine.to_string(), "vline");
        assert_eq!(GeomType::Histogram.to_string(), "histogram");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&GeomType::HLine).unwrap(), "\"hline\"");
        let geom: GeomType = serde_json::from_str("\"area\"").unwrap();
        assert_eq!(geom, GeomType::Area);
    }
}
