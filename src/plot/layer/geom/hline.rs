//! Horizontal-line layer builder

use std::ops::{Deref, DerefMut};

use super::GeomType;
use crate::plot::layer::{LayerBuilder, LayerContext, LayerFragment, Position, Stat};
use crate::Result;

/// Horizontal reference line at a fixed y intercept.
pub struct HLineLayer<T> {
    layer: LayerBuilder<T>,
}

impl<T> HLineLayer<T> {
    pub(crate) fn new(context: LayerContext<T>) -> Self {
        Self {
            layer: LayerBuilder::new(
                context,
                GeomType::HLine,
                Stat::identity(),
                Position::Identity,
            ),
        }
    }

    /// Constant y intercept.
    pub fn yintercept(&mut self, yintercept: f64) -> &mut Self {
        self.layer.param("yintercept", yintercept);
        self
    }

    /// Constant line type (e.g. `"dotted"`).
    pub fn linetype(&mut self, linetype: impl Into<String>) -> &mut Self {
        self.layer.param("linetype", linetype.into());
        self
    }

    /// Constant line width.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.layer.param("size", size);
        self
    }
}

impl<T> Deref for HLineLayer<T> {
    type Target = LayerBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}

impl<T> DerefMut for HLineLayer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

impl<T> LayerFragment for HLineLayer<T> {
    fn fragment(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.layer.fragment()
    }
}
