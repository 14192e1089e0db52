//! Line layer builder

use std::ops::{Deref, DerefMut};

use super::GeomType;
use crate::bindings::Extractor;
use crate::plot::layer::{LayerBuilder, LayerContext, LayerFragment, Position, Stat};
use crate::Result;

/// Line layer: records connected in x order.
pub struct LineLayer<T> {
    layer: LayerBuilder<T>,
}

impl<T> LineLayer<T> {
    pub(crate) fn new(context: LayerContext<T>) -> Self {
        Self {
            layer: LayerBuilder::new(context, GeomType::Line, Stat::identity(), Position::Identity),
        }
    }

    /// Map the x position.
    pub fn x(&mut self, extractor: &Extractor<T>) -> &mut Self {
        self.layer.aes("x", extractor);
        self
    }

    /// Map the y position.
    pub fn y(&mut self, extractor: &Extractor<T>) -> &mut Self {
        self.layer.aes("y", extractor);
        self
    }

    /// Constant line type (e.g. `"dashed"`).
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

impl<T> Deref for LineLayer<T> {
    type Target = LayerBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}

impl<T> DerefMut for LineLayer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

impl<T> LayerFragment for LineLayer<T> {
    fn fragment(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.layer.fragment()
    }
}
