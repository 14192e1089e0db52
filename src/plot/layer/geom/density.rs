//! Density layer builder

use std::ops::{Deref, DerefMut};

use super::GeomType;
use crate::bindings::Extractor;
use crate::plot::layer::{LayerBuilder, LayerContext, LayerFragment, Position, Stat};
use crate::Result;

/// Density layer. Defaults to the `density` statistic.
pub struct DensityLayer<T> {
    layer: LayerBuilder<T>,
}

impl<T> DensityLayer<T> {
    pub(crate) fn new(context: LayerContext<T>) -> Self {
        Self {
            layer: LayerBuilder::new(
                context,
                GeomType::Density,
                Stat::density(),
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

    /// Constant curve width.
    pub fn width(&mut self, width: f64) -> &mut Self {
        self.layer.param("width", width);
        self
    }

    /// Constant outline width.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.layer.param("size", size);
        self
    }
}

impl<T> Deref for DensityLayer<T> {
    type Target = LayerBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}

impl<T> DerefMut for DensityLayer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

impl<T> LayerFragment for DensityLayer<T> {
    fn fragment(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.layer.fragment()
    }
}
