//! Named builder properties: constants, aesthetic mappings, and scales.
//!
//! Every builder owns a [`PropertySet`]: a first-declaration-ordered map
//! from property name to [`Property`]. Properties are created lazily on
//! first access by name and cached, so chained configuration calls across
//! multiple statements keep addressing the same slot.
//!
//! A property carries up to three independent slots: a constant value
//! (flattened into the builder's parameters), a column extractor
//! (flattened into the builder's `mapping` via the owning registry), and a
//! scale (plot-level only). Constant and mapping are not mutually
//! exclusive; when both are set, both are emitted, to their respective
//! output keys. Last write wins per slot.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::bindings::{DataBindings, Extractor};
use crate::plot::scale::Scale;
use crate::Result;

/// One named builder property.
#[derive(Debug, Clone)]
pub struct Property<T> {
    name: String,
    constant: Option<Value>,
    mapping: Option<Extractor<T>>,
    scale: Option<Scale>,
}

impl<T> Property<T> {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constant: None,
            mapping: None,
            scale: None,
        }
    }

    /// Property name, as assigned at its declaration site.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the constant value. Last write wins.
    pub fn set_constant(&mut self, value: Value) {
        self.constant = Some(value);
    }

    /// Bind the property to a column extractor. Last write wins.
    pub fn set_mapping(&mut self, extractor: Extractor<T>) {
        self.mapping = Some(extractor);
    }

    /// Attach a scale to the property. Last write wins.
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = Some(scale);
    }

    pub fn constant(&self) -> Option<&Value> {
        self.constant.as_ref()
    }

    pub fn mapping(&self) -> Option<&Extractor<T>> {
        self.mapping.as_ref()
    }

    pub fn scale(&self) -> Option<&Scale> {
        self.scale.as_ref()
    }
}

/// Declaration-ordered property set of one builder.
#[derive(Debug, Clone, Default)]
pub struct PropertySet<T> {
    entries: IndexMap<String, Property<T>>,
}

impl<T> PropertySet<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Get-or-create the property registered under `name`.
    pub fn named(&mut self, name: &str) -> &mut Property<T> {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| Property::new(name))
    }

    /// Look up a property without creating it.
    pub fn get(&self, name: &str) -> Option<&Property<T>> {
        self.entries.get(name)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Constant parameters fragment: unset and `Null` constants omitted.
    pub fn parameters(&self) -> Map<String, Value> {
        let mut parameters = Map::new();
        for (name, property) in &self.entries {
            match property.constant() {
                Some(Value::Null) | None => {}
                Some(value) => {
                    parameters.insert(name.clone(), value.clone());
                }
            }
        }
        parameters
    }

    /// Mapping fragment: property name -> generated column name, resolved
    /// against the owning registry. Properties with no bound extractor are
    /// omitted.
    pub fn mappings(&self, bindings: &DataBindings<T>) -> Result<Map<String, Value>> {
        let mut mappings = Map::new();
        for (name, property) in &self.entries {
            if let Some(extractor) = property.mapping() {
                let column = bindings.column_name(extractor)?;
                mappings.insert(name.clone(), Value::String(column));
            }
        }
        Ok(mappings)
    }

    /// Scale fragments attached to the properties, in declaration order.
    pub fn scales(&self) -> Vec<Value> {
        self.entries
            .values()
            .filter_map(|property| property.scale())
            .map(|scale| Value::Object(scale.to_spec()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{BindingsManager, DataSource};
    use serde_json::json;

    #[test]
    fn test_named_returns_same_slot() {
        let mut props: PropertySet<i32> = PropertySet::new();
        props.named("alpha").set_constant(json!(0.1));
        props.named("alpha").set_constant(json!(0.7));
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("alpha").unwrap().constant(), Some(&json!(0.7)));
    }

    #[test]
    fn test_parameters_skip_unset_and_null() {
        let mut props: PropertySet<i32> = PropertySet::new();
        props.named("alpha");
        props.named("color").set_constant(Value::Null);
        props.named("fill").set_constant(json!("red"));

        let parameters = props.parameters();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get("fill"), Some(&json!("red")));
    }

    #[test]
    fn test_mappings_resolve_column_names() {
        let manager = BindingsManager::new();
        let data = DataSource::new(vec![1, 2, 3]);
        let bindings = manager.bindings_for(&data);

        let mut props: PropertySet<i32> = PropertySet::new();
        let double = Extractor::new(|v: &i32| json!(v * 2));
        props.named("x").set_mapping(double);
        props.named("alpha").set_constant(json!(0.5));

        let mappings = props.mappings(&bindings).unwrap();
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings.get("x"), Some(&json!("list0")));
    }

    #[test]
    fn test_constant_and_mapping_both_emitted() {
        let manager = BindingsManager::new();
        let data = DataSource::new(vec![1]);
        let bindings = manager.bindings_for(&data);

        let mut props: PropertySet<i32> = PropertySet::new();
        props.named("y").set_constant(json!("a"));
        props.named("y").set_mapping(Extractor::new(|v: &i32| json!(*v)));

        assert_eq!(props.parameters().get("y"), Some(&json!("a")));
        let mappings = props.mappings(&bindings).unwrap();
        assert_eq!(mappings.get("y"), Some(&json!("list0")));
    }

    #[test]
    fn test_mapping_last_write_wins() {
        let manager = BindingsManager::new();
        let data = DataSource::new(vec![4, 5]);
        let bindings = manager.bindings_for(&data);

        let mut props: PropertySet<i32> = PropertySet::new();
        props.named("x").set_mapping(Extractor::new(|v: &i32| json!(*v)));
        let negated = Extractor::new(|v: &i32| json!(-v));
        props.named("x").set_mapping(negated);

        // Only the final extractor reaches the registry.
        let mappings = props.mappings(&bindings).unwrap();
        assert_eq!(mappings.get("x"), Some(&json!("list0")));
        assert_eq!(bindings.columns().get("list0"), Some(&json!([-4, -5])));
    }
}
