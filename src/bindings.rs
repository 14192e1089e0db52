//! Data sources, column extractors, and the lazy column-binding registry.
//!
//! A [`DataSource`] is a shared handle over an ordered record sequence,
//! compared by identity: cloning a handle shares the identity, constructing
//! from a fresh `Vec` makes a new one. An [`Extractor`] is a shared handle
//! over a pure `record -> value` closure, also compared by identity.
//!
//! Each distinct data source gets one [`DataBindings`] registry, resolved
//! through the per-assembly [`BindingsManager`]. The registry assigns
//! deduplicated column names (`list0`, `list1`, ...) to extractors in
//! first-seen order, and materializes the name -> values columns lazily,
//! exactly once, on first read. Materialization freezes the registry: the
//! value mapping is cached and registering a new extractor afterwards fails
//! with [`GgbuildError::FinalizedBindings`].
//!
//! Deferring extraction this way lets every layer sharing a data source
//! finish declaring its mappings before any extraction runs, and keeps
//! extraction O(records x extractors) exactly once, never per layer.

use serde_json::{Map, Value};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{naming, GgbuildError, Result};

/// Identity key of a data source handle (stable while the handle is alive)
pub(crate) type SourceKey = usize;

/// Shared handle over an ordered, finite, re-iterable record sequence.
///
/// Records are opaque to ggbuild; the only thing ever done with them is
/// applying caller-supplied extractors. Two sources with identical contents
/// but separate allocations are distinct for binding purposes.
pub struct DataSource<T> {
    records: Rc<Vec<T>>,
}

impl<T> DataSource<T> {
    /// Create a new data source with a fresh identity.
    pub fn new(records: impl Into<Vec<T>>) -> Self {
        Self {
            records: Rc::new(records.into()),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Identity key: the allocation address of the shared record vector.
    /// The registry holding this source keeps the allocation alive, so the
    /// key cannot be reused by another live source.
    pub(crate) fn key(&self) -> SourceKey {
        Rc::as_ptr(&self.records) as SourceKey
    }
}

impl<T> Clone for DataSource<T> {
    fn clone(&self) -> Self {
        Self {
            records: Rc::clone(&self.records),
        }
    }
}

impl<T> From<Vec<T>> for DataSource<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T> std::fmt::Debug for DataSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("len", &self.len())
            .field("key", &self.key())
            .finish()
    }
}

/// Shared handle over a pure column-extractor closure.
///
/// Extractors are compared by identity, not behavior: two structurally
/// identical closures are different columns unless they share one handle.
/// Clone the handle to reuse a column across builders.
pub struct Extractor<T> {
    func: Rc<dyn Fn(&T) -> Value>,
}

impl<T> Extractor<T> {
    /// Wrap an extraction closure in a shared handle.
    pub fn new(func: impl Fn(&T) -> Value + 'static) -> Self {
        Self {
            func: Rc::new(func),
        }
    }

    /// Apply the extractor to one record.
    pub fn apply(&self, record: &T) -> Value {
        (self.func)(record)
    }

    /// Identity key of the underlying closure allocation.
    pub(crate) fn key(&self) -> usize {
        Rc::as_ptr(&self.func) as *const () as usize
    }
}

impl<T> Clone for Extractor<T> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<T> std::fmt::Debug for Extractor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Extractor({:#x})", self.key())
    }
}

/// Per-data-source column registry: extractor identity -> generated name,
/// plus the lazily materialized name -> values columns.
///
/// State machine: Open (names may be assigned) -> Materialized (columns
/// cached, name assignment frozen). The transition happens on the first
/// call to [`DataBindings::columns`] and is permanent.
pub struct DataBindings<T> {
    source: DataSource<T>,
    names: RefCell<Vec<(Extractor<T>, String)>>,
    columns: RefCell<Option<Map<String, Value>>>,
}

impl<T> DataBindings<T> {
    fn new(source: DataSource<T>) -> Self {
        Self {
            source,
            names: RefCell::new(Vec::new()),
            columns: RefCell::new(None),
        }
    }

    /// The data source this registry is bound to.
    pub fn source(&self) -> &DataSource<T> {
        &self.source
    }

    pub(crate) fn source_key(&self) -> SourceKey {
        self.source.key()
    }

    /// True once the columns have been materialized and names are frozen.
    pub fn is_materialized(&self) -> bool {
        self.columns.borrow().is_some()
    }

    /// Return the column name assigned to this extractor, assigning the
    /// next `list<n>` name on first sight.
    ///
    /// Looking up an already-registered extractor always succeeds;
    /// assigning a new name after [`DataBindings::columns`] has been read
    /// fails with [`GgbuildError::FinalizedBindings`].
    pub fn column_name(&self, extractor: &Extractor<T>) -> Result<String> {
        let mut names = self.names.borrow_mut();
        if let Some((_, name)) = names.iter().find(|(e, _)| e.key() == extractor.key()) {
            return Ok(name.clone());
        }
        if self.is_materialized() {
            return Err(GgbuildError::FinalizedBindings);
        }
        let name = naming::column_name(names.len());
        names.push((extractor.clone(), name.clone()));
        Ok(name)
    }

    /// Materialized columns: generated name -> ordered value array, one
    /// entry per registered extractor, one value per record.
    ///
    /// The first call runs every extractor over every record and freezes
    /// name assignment; later calls return the cached result.
    pub fn columns(&self) -> Map<String, Value> {
        if let Some(columns) = self.columns.borrow().as_ref() {
            return columns.clone();
        }
        let names = self.names.borrow();
        let mut columns = Map::new();
        for (extractor, name) in names.iter() {
            let values: Vec<Value> = self.source.iter().map(|r| extractor.apply(r)).collect();
            columns.insert(name.clone(), Value::Array(values));
        }
        log::debug!(
            "materialized {} column(s) over {} record(s)",
            columns.len(),
            self.source.len()
        );
        *self.columns.borrow_mut() = Some(columns.clone());
        columns
    }
}

impl<T> std::fmt::Debug for DataBindings<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataBindings")
            .field("source", &self.source)
            .field("columns", &self.names.borrow().len())
            .field("materialized", &self.is_materialized())
            .finish()
    }
}

/// Per-assembly cache mapping data-source identity to its registry.
///
/// Guarantees a single [`DataBindings`] per distinct data source, even when
/// nested layer builders reference the source independently. Lives exactly
/// as long as one assembly invocation.
#[derive(Default)]
pub struct BindingsManager {
    // Type-erased: one manager serves layers over record types other than
    // the plot's. Keyed by source identity, which pins the record type.
    registries: RefCell<HashMap<SourceKey, Rc<dyn Any>>>,
}

impl BindingsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the registry for this exact data source handle, creating it
    /// on first reference.
    pub fn bindings_for<T: 'static>(&self, source: &DataSource<T>) -> Rc<DataBindings<T>> {
        let mut registries = self.registries.borrow_mut();
        let entry = registries.entry(source.key()).or_insert_with(|| {
            log::debug!("new data bindings for source {:#x}", source.key());
            Rc::new(DataBindings::new(source.clone())) as Rc<dyn Any>
        });
        match Rc::clone(entry).downcast::<DataBindings<T>>() {
            Ok(bindings) => bindings,
            Err(_) => unreachable!("source identity pins the record type"),
        }
    }
}
