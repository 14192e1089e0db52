//! Vertical-line layer builder

use std::ops::{Deref, DerefMut};

use super::GeomType;
use crate::plot::layer::{LayerBuilder, LayerContext, LayerFragment, Position, Stat};
use crate::Result;

/// Vertical reference line at a fixed x intercept.
pub struct VLineLayer<T> {
    layer: LayerBuilder<T>,
}

impl<T> VLineLayer<T> {
    pub(crate) fn new(context: LayerContext<T>) -> Self {
        Self {
            layer: LayerBuilder::new(
                context,
                GeomType::VLine,
                Stat::identity(),
                Position::Identity,
            ),
        }
    }

    /// Constant x intercept.
    pub fn xintercept(&mut self, xintercept: f64) -> &mut Self {
        self.layer.param("xintercept", xintercept);
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

impl<T> Deref for VLineLayer<T> {
    type Target = LayerBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}

impl<T> DerefMut for VLineLayer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

impl<T> LayerFragment for VLineLayer<T> {
    fn fragment(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.layer.fragment()
    }
}
