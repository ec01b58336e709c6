//! Concrete map implementations.

use crate::{contract::Markers, value::Value};
use dashmap::DashMap;
use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard};
use std::{
    any::Any,
    collections::{BTreeMap, HashMap},
    fmt,
};

/// Class names of the built-in implementations.
pub mod class {
    pub const HASH_MAP: &str = "HashMap";
    pub const LINKED_HASH_MAP: &str = "LinkedHashMap";
    pub const TREE_MAP: &str = "TreeMap";
    pub const CONCURRENT_HASH_MAP: &str = "ConcurrentHashMap";
    pub const CONCURRENT_SKIP_LIST_MAP: &str = "ConcurrentSkipListMap";
}

/// A mutable key to value mapping.
///
/// Keys are unique: inserting an existing key replaces its value.
pub trait MapContainer: fmt::Debug + Send + Sync + 'static {
    /// The registered class name of this implementation.
    fn class(&self) -> &str;

    /// The capabilities this implementation honors.
    fn markers(&self) -> Markers;

    /// Inserts an entry, returning the value previously stored under `key`.
    fn insert(&mut self, key: Value, value: Value) -> Option<Value>;

    fn get(&self, key: &Value) -> Option<Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the entries in the iteration order of the implementation.
    fn entries(&self) -> Vec<(Value, Value)>;

    fn clone_box(&self) -> Box<dyn MapContainer>;

    fn as_any(&self) -> &dyn Any;
}

macro_rules! owned_container {
    ($(#[$attr:meta])* $name:ident($inner:ty), $class:expr, $markers:expr) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default)]
        pub struct $name($inner);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
                self.0.iter()
            }
        }

        impl MapContainer for $name {
            fn class(&self) -> &str {
                $class
            }

            fn markers(&self) -> Markers {
                $markers
            }

            fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
                self.0.insert(key, value)
            }

            fn get(&self, key: &Value) -> Option<Value> {
                self.0.get(key).cloned()
            }

            fn len(&self) -> usize {
                self.0.len()
            }

            fn entries(&self) -> Vec<(Value, Value)> {
                self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
            }

            fn clone_box(&self) -> Box<dyn MapContainer> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

owned_container!(
    /// General purpose hash map; iteration order is unspecified.
    UnorderedMap(HashMap<Value, Value>),
    class::HASH_MAP,
    Markers::NONE
);

owned_container!(
    /// Hash map iterating in insertion order.
    LinkedMap(IndexMap<Value, Value>),
    class::LINKED_HASH_MAP,
    Markers::NONE
);

owned_container!(
    /// Ordered map iterating in ascending key order.
    TreeMap(BTreeMap<Value, Value>),
    class::TREE_MAP,
    Markers::SORTED.union(Markers::NAVIGABLE)
);

impl TreeMap {
    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor(&self, key: &Value) -> Option<(&Value, &Value)> {
        self.0.range(..=key).next_back()
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceiling(&self, key: &Value) -> Option<(&Value, &Value)> {
        self.0.range(key..).next()
    }
}

/// Sharded concurrent hash map.
#[derive(Clone, Debug, Default)]
pub struct ConcurrentHashMap(DashMap<Value, Value>);

impl ConcurrentHashMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts through a shared reference.
    pub fn insert_shared(&self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }
}

impl MapContainer for ConcurrentHashMap {
    fn class(&self) -> &str {
        class::CONCURRENT_HASH_MAP
    }

    fn markers(&self) -> Markers {
        Markers::CONCURRENT
    }

    fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.insert_shared(key, value)
    }

    fn get(&self, key: &Value) -> Option<Value> {
        self.0.get(key).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn entries(&self) -> Vec<(Value, Value)> {
        self.0.iter().map(|entry| (entry.key().clone(), entry.value().clone())).collect()
    }

    fn clone_box(&self) -> Box<dyn MapContainer> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ordered map safe for concurrent readers and writers.
#[derive(Debug, Default)]
pub struct ConcurrentTreeMap(RwLock<BTreeMap<Value, Value>>);

impl ConcurrentTreeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts through a shared reference.
    pub fn insert_shared(&self, key: Value, value: Value) -> Option<Value> {
        self.0.write().insert(key, value)
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor(&self, key: &Value) -> Option<(Value, Value)> {
        self.0.read().range(..=key).next_back().map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceiling(&self, key: &Value) -> Option<(Value, Value)> {
        self.0.read().range(key..).next().map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Locks the entries for reading. Recursive so a map can be compared against itself.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, BTreeMap<Value, Value>> {
        self.0.read_recursive()
    }
}

impl Clone for ConcurrentTreeMap {
    fn clone(&self) -> Self {
        Self(RwLock::new(self.0.read().clone()))
    }
}

impl MapContainer for ConcurrentTreeMap {
    fn class(&self) -> &str {
        class::CONCURRENT_SKIP_LIST_MAP
    }

    fn markers(&self) -> Markers {
        Markers::SORTED | Markers::NAVIGABLE | Markers::CONCURRENT
    }

    fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.get_mut().insert(key, value)
    }

    fn get(&self, key: &Value) -> Option<Value> {
        self.0.read().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.0.read().len()
    }

    fn entries(&self) -> Vec<(Value, Value)> {
        self.0.read().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn clone_box(&self) -> Box<dyn MapContainer> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
