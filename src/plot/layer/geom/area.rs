//! Area layer builder

use std::ops::{Deref, DerefMut};

use super::GeomType;
use crate::bindings::Extractor;
use crate::plot::layer::{LayerBuilder, LayerContext, LayerFragment, Position, Stat};
use crate::Result;

/// Area layer. Defaults to stacked areas.
pub struct AreaLayer<T> {
    layer: LayerBuilder<T>,
}

impl<T> AreaLayer<T> {
    pub(crate) fn new(context: LayerContext<T>) -> Self {
        Self {
            layer: LayerBuilder::new(context, GeomType::Area, Stat::identity(), Position::Stack),
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

    /// Constant outline type.
    pub fn linetype(&mut self, linetype: impl Into<String>) -> &mut Self {
        self.layer.param("linetype", linetype.into());
        self
    }

    /// Constant outline width.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.layer.param("size", size);
        self
    }
}

impl<T> Deref for AreaLayer<T> {
    type Target = LayerBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}

impl<T> DerefMut for AreaLayer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

impl<T> LayerFragment for AreaLayer<T> {
    fn fragment(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.layer.fragment()
    }
}
