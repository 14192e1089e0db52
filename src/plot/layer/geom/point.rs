//! Point layer builder

use std::ops::{Deref, DerefMut};

use super::GeomType;
use crate::bindings::Extractor;
use crate::plot::layer::{LayerBuilder, LayerContext, LayerFragment, Position, Stat};
use crate::Result;

/// Point layer: one mark per record.
pub struct PointLayer<T> {
    layer: LayerBuilder<T>,
}

impl<T> PointLayer<T> {
    pub(crate) fn new(context: LayerContext<T>) -> Self {
        Self {
            layer: LayerBuilder::new(
                context,
                GeomType::Point,
                Stat::identity(),
                Position::Identity,
            ),
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

    /// Constant point shape.
    pub fn shape(&mut self, shape: impl Into<String>) -> &mut Self {
        self.layer.param("shape", shape.into());
        self
    }

    /// Constant stroke color.
    pub fn stroke(&mut self, stroke: impl Into<String>) -> &mut Self {
        self.layer.param("stroke", stroke.into());
        self
    }

    /// Constant point size.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.layer.param("size", size);
        self
    }
}

impl<T> Deref for PointLayer<T> {
    type Target = LayerBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}

impl<T> DerefMut for PointLayer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

impl<T> LayerFragment for PointLayer<T> {
    fn fragment(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.layer.fragment()
    }
}
