//! Resolution of map declarations to empty container instances.

use crate::{
    containers::{
        ConcurrentHashMap, ConcurrentTreeMap, LinkedMap, MapContainer, TreeMap, UnorderedMap,
        class,
    },
    contract::{MapContract, Markers},
    error::{ConstructionError, ResolutionError},
    types::MapKind,
};
use std::{collections::HashMap, fmt, sync::Arc};

/// Builds an empty container.
pub type MapFactory =
    Arc<dyn Fn() -> Result<Box<dyn MapContainer>, ConstructionError> + Send + Sync>;

/// Default implementation per contract, most specific first.
///
/// The first row whose markers are all carried by the contract wins.
const CONTRACT_DEFAULTS: [(Markers, &str); 5] = [
    (Markers::CONCURRENT.union(Markers::NAVIGABLE), class::CONCURRENT_SKIP_LIST_MAP),
    (Markers::CONCURRENT.union(Markers::SORTED), class::CONCURRENT_SKIP_LIST_MAP),
    (Markers::CONCURRENT, class::CONCURRENT_HASH_MAP),
    (Markers::NAVIGABLE, class::TREE_MAP),
    (Markers::SORTED, class::TREE_MAP),
];

/// Returns the class name a contract resolves to.
pub fn default_class(contract: &MapContract) -> &'static str {
    let markers = contract.markers();
    CONTRACT_DEFAULTS
        .iter()
        .find(|(required, _)| markers.contains(*required))
        .map_or(class::HASH_MAP, |&(_, class)| class)
}

/// A registered map class.
///
/// `constructor` is the standard way of building an instance. `allocator` is only tried when
/// there is no constructor or it fails, for classes that cannot be default constructed.
#[derive(Clone)]
pub struct MapClass {
    name: String,
    constructor: Option<MapFactory>,
    allocator: Option<MapFactory>,
}

impl MapClass {
    /// Creates a class with neither constructor nor allocator.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), constructor: None, allocator: None }
    }

    /// Creates a class constructed through [`Default`].
    pub fn with_default<T: MapContainer + Default>(name: impl Into<String>) -> Self {
        Self::new(name).constructor(|| Ok(Box::new(T::default())))
    }

    pub fn constructor<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Box<dyn MapContainer>, ConstructionError> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(f));
        self
    }

    pub fn allocator<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Box<dyn MapContainer>, ConstructionError> + Send + Sync + 'static,
    {
        self.allocator = Some(Arc::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds a fresh instance, falling back to the allocator if construction is not possible.
    pub fn instantiate(&self) -> Result<Box<dyn MapContainer>, ResolutionError> {
        match &self.constructor {
            Some(constructor) => match constructor() {
                Ok(map) => return Ok(map),
                Err(err) => {
                    debug!(class = %self.name, %err, "construction failed, using allocator")
                }
            },
            None => debug!(class = %self.name, "no constructor, using allocator"),
        }

        let Some(allocator) = &self.allocator else {
            return Err(ResolutionError::Unconstructable {
                class: self.name.clone(),
                reason: "no allocator registered".to_string(),
            });
        };
        allocator().map_err(|err| ResolutionError::Unconstructable {
            class: self.name.clone(),
            reason: err.to_string(),
        })
    }
}

impl fmt::Debug for MapClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapClass")
            .field("name", &self.name)
            .field("constructor", &self.constructor.is_some())
            .field("allocator", &self.allocator.is_some())
            .finish()
    }
}

/// Known map classes by name.
#[derive(Clone, Debug)]
pub struct MapRegistry {
    classes: HashMap<String, MapClass>,
}

impl Default for MapRegistry {
    /// Returns a registry holding the built-in implementations.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(MapClass::with_default::<UnorderedMap>(class::HASH_MAP));
        registry.register(MapClass::with_default::<LinkedMap>(class::LINKED_HASH_MAP));
        registry.register(MapClass::with_default::<TreeMap>(class::TREE_MAP));
        registry.register(MapClass::with_default::<ConcurrentHashMap>(class::CONCURRENT_HASH_MAP));
        registry
            .register(MapClass::with_default::<ConcurrentTreeMap>(class::CONCURRENT_SKIP_LIST_MAP));
        registry
    }
}

impl MapRegistry {
    /// Returns a registry without any class, not even the built-ins.
    pub fn empty() -> Self {
        Self { classes: HashMap::new() }
    }

    /// Registers a class, returning the one previously registered under the same name.
    pub fn register(&mut self, class: MapClass) -> Option<MapClass> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn get(&self, name: &str) -> Option<&MapClass> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }
}

/// Turns map declarations into empty, mutable instances.
#[derive(Clone, Debug, Default)]
pub struct InstanceResolver {
    registry: MapRegistry,
}

impl InstanceResolver {
    pub fn new(registry: MapRegistry) -> Self {
        Self { registry }
    }

    /// Returns an empty instance satisfying `kind`.
    ///
    /// Contracts resolve to their default implementation, classes to an instance of exactly that
    /// class.
    pub fn resolve(&self, kind: &MapKind) -> Result<Box<dyn MapContainer>, ResolutionError> {
        let map = match kind {
            MapKind::Contract(contract) => {
                let class = default_class(contract);
                debug!(%contract, class, "resolved map contract");
                let map = self.instantiate(class)?;
                if !map.markers().contains(contract.markers()) {
                    return Err(ResolutionError::ContractViolation {
                        class: map.class().to_string(),
                        declared: contract.to_string(),
                    });
                }
                map
            }
            MapKind::Class(class) => {
                let map = self.instantiate(class)?;
                if map.class() != class {
                    return Err(ResolutionError::ContractViolation {
                        class: map.class().to_string(),
                        declared: class.clone(),
                    });
                }
                map
            }
        };

        if !map.is_empty() {
            let class = map.class().to_string();
            return Err(ResolutionError::NotEmpty { class, len: map.len() });
        }
        Ok(map)
    }

    fn instantiate(&self, class: &str) -> Result<Box<dyn MapContainer>, ResolutionError> {
        self.registry
            .get(class)
            .ok_or_else(|| ResolutionError::UnknownClass(class.to_string()))?
            .instantiate()
    }
}
