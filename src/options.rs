//! Option-key constants for the output specification tree.
//!
//! The specification produced by [`plot`](crate::plot()) is consumed by an
//! external spec-transform/rendering pipeline. The key strings below are
//! that collaborator's contract and must be reproduced verbatim.

// ============================================================================
// Top-level plot keys
// ============================================================================

/// Discriminator key identifying the kind of specification
pub const KIND: &str = "kind";

/// The `kind` value for a plot specification
pub const PLOT_KIND: &str = "plot";

/// Materialized columns of the plot-wide data source
pub const DATA: &str = "data";

/// Aesthetic mappings: property name -> generated column name
pub const MAPPING: &str = "mapping";

/// Ordered sequence of layer fragments
pub const LAYERS: &str = "layers";

/// Ordered sequence of scale fragments
pub const SCALES: &str = "scales";

// ============================================================================
// Layer keys
// ============================================================================

/// Geometry kind of a layer
pub const GEOM: &str = "geom";

/// Statistic kind of a layer
pub const STAT: &str = "stat";

/// Position-adjustment kind of a layer
pub const POSITION: &str = "position";

// ============================================================================
// Scale keys
// ============================================================================

/// Aesthetic a scale applies to
pub const AESTHETIC: &str = "aesthetic";

/// Scale title
pub const NAME: &str = "name";

/// Explicit break positions
pub const BREAKS: &str = "breaks";

/// Labels for the break positions
pub const LABELS: &str = "labels";

/// Domain limits
pub const LIMITS: &str = "limits";

/// Expansion of the scale range
pub const EXPAND: &str = "expand";

/// Replacement value for missing data
pub const NA_VALUE: &str = "na_value";

/// Marks a scale as date-time
pub const DATE_TIME: &str = "datetime";

// ============================================================================
// Plot feature keys
// ============================================================================

/// Plot size feature entry
pub const GGSIZE: &str = "ggsize";

/// Width option of the size feature
pub const WIDTH: &str = "width";

/// Height option of the size feature
pub const HEIGHT: &str = "height";
