//! Statistic kinds and their parameters.
//!
//! A layer's statistic names a transform the downstream pipeline applies to
//! the raw data before rendering; ggbuild never computes it. The statistic
//! contributes its kind under the `stat` key plus its parameters, merged
//! directly into the layer fragment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed set of statistic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Identity,
    Count,
    Bin,
    Density,
    Boxplot,
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatKind::Identity => "identity",
            StatKind::Count => "count",
            StatKind::Bin => "bin",
            StatKind::Density => "density",
            StatKind::Boxplot => "boxplot",
        };
        write!(f, "{}", s)
    }
}

/// A statistic kind plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    kind: StatKind,
    parameters: Map<String, Value>,
}

impl Stat {
    fn of(kind: StatKind) -> Self {
        Self {
            kind,
            parameters: Map::new(),
        }
    }

    /// No-op transform: the data is rendered as-is.
    pub fn identity() -> Self {
        Self::of(StatKind::Identity)
    }

    /// Count records per group.
    pub fn count() -> Self {
        Self::of(StatKind::Count)
    }

    /// Bin records along x.
    pub fn bin() -> Self {
        Self::of(StatKind::Bin)
    }

    /// Kernel density estimate along x.
    pub fn density() -> Self {
        Self::of(StatKind::Density)
    }

    /// Five-number summary per group.
    pub fn boxplot() -> Self {
        Self::of(StatKind::Boxplot)
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Set a parameter passed through verbatim to the layer fragment.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    // --- bin parameters ---

    /// Number of bins (bin).
    pub fn bins(self, count: u32) -> Self {
        self.with_param("bins", count)
    }

    /// Bin width (bin).
    pub fn binwidth(self, width: f64) -> Self {
        self.with_param("binwidth", width)
    }

    /// Bin alignment by center (bin).
    pub fn center(self, center: f64) -> Self {
        self.with_param("center", center)
    }

    /// Bin alignment by boundary (bin).
    pub fn boundary(self, boundary: f64) -> Self {
        self.with_param("boundary", boundary)
    }

    // --- density parameters ---

    /// Bandwidth: a number or a method name such as `"nrd0"` (density).
    pub fn bw(self, bw: impl Into<Value>) -> Self {
        self.with_param("bw", bw)
    }

    /// Kernel name (density).
    pub fn kernel(self, kernel: &str) -> Self {
        self.with_param("kernel", kernel)
    }

    /// Bandwidth multiplier (density).
    pub fn adjust(self, adjust: f64) -> Self {
        self.with_param("adjust", adjust)
    }

    /// Trim the estimate to the data range (density).
    pub fn trim(self, trim: bool) -> Self {
        self.with_param("trim", trim)
    }

    /// Per-record weight column hint (density).
    pub fn weight(self, weight: impl Into<Value>) -> Self {
        self.with_param("weight", weight)
    }

    // --- boxplot parameters ---

    /// Box width proportional to group size (boxplot).
    pub fn varwidth(self, varwidth: bool) -> Self {
        self.with_param("varwidth", varwidth)
    }

    /// Whisker length as a multiple of the IQR (boxplot).
    pub fn coef(self, coef: f64) -> Self {
        self.with_param("coef", coef)
    }
}
