//! Concrete class declarations resolve to exactly that class.

use randbeans_populate::{
    ConstructionError, FieldDeclaration, MapClass, MapContainer, MapKind, MapPopulator,
    MapRegistry, Markers, PopulationError, ResolutionError, Value, ValueType,
    containers::{TreeMap, class},
};
use randbeans_test_utils::{CountingPopulator, ScriptedBytes, init_tracing};
use similar_asserts::assert_eq;
use std::any::Any;

/// A sorted map remembering how it was built.
#[derive(Clone, Debug)]
struct AuditedMap {
    built_by: &'static str,
    inner: TreeMap,
}

impl AuditedMap {
    const CLASS: &'static str = "AuditedMap";

    fn constructed() -> Self {
        Self { built_by: "constructor", inner: TreeMap::new() }
    }

    fn allocated() -> Self {
        Self { built_by: "allocator", inner: TreeMap::new() }
    }
}

impl MapContainer for AuditedMap {
    fn class(&self) -> &str {
        Self::CLASS
    }

    fn markers(&self) -> Markers {
        self.inner.markers()
    }

    fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.inner.insert(key, value)
    }

    fn get(&self, key: &Value) -> Option<Value> {
        self.inner.get(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn entries(&self) -> Vec<(Value, Value)> {
        self.inner.entries()
    }

    fn clone_box(&self) -> Box<dyn MapContainer> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn audited_field() -> FieldDeclaration {
    FieldDeclaration::new(
        "audit",
        ValueType::map(MapKind::class(AuditedMap::CLASS), ValueType::Int, ValueType::String),
    )
}

fn maps(class: MapClass) -> MapPopulator {
    let mut registry = MapRegistry::default();
    registry.register(class);
    MapPopulator::new(registry, ScriptedBytes::constant(-7))
}

#[test]
fn constructible_class_is_constructed_then_filled() {
    init_tracing();
    let maps = maps(
        MapClass::new(AuditedMap::CLASS)
            .constructor(|| Ok(Box::new(AuditedMap::constructed())))
            .allocator(|| Ok(Box::new(AuditedMap::allocated()))),
    );
    let map = maps.random_map(&audited_field(), &mut CountingPopulator::new()).unwrap();
    let audited = map.downcast_ref::<AuditedMap>().unwrap();
    assert_eq!(audited.built_by, "constructor");
    assert_eq!(map.len(), 7);
}

#[test]
fn class_without_constructor_is_allocated_then_filled() {
    init_tracing();
    let maps = maps(
        MapClass::new(AuditedMap::CLASS)
            .constructor(|| Err(ConstructionError::new("no public no-argument constructor")))
            .allocator(|| Ok(Box::new(AuditedMap::allocated()))),
    );
    let map = maps.random_map(&audited_field(), &mut CountingPopulator::new()).unwrap();
    assert_eq!(map.downcast_ref::<AuditedMap>().unwrap().built_by, "allocator");
    assert_eq!(map.len(), 7);

    let maps = self::maps(
        MapClass::new(AuditedMap::CLASS).allocator(|| Ok(Box::new(AuditedMap::allocated()))),
    );
    let map = maps.random_map(&audited_field(), &mut CountingPopulator::new()).unwrap();
    assert_eq!(map.downcast_ref::<AuditedMap>().unwrap().built_by, "allocator");
}

#[test]
fn unconstructable_class_fails_the_call() {
    let maps = maps(
        MapClass::new(AuditedMap::CLASS)
            .constructor(|| Err(ConstructionError::new("abstract class"))),
    );
    let err = maps.random_map(&audited_field(), &mut CountingPopulator::new()).unwrap_err();
    assert_eq!(
        err,
        PopulationError::Resolution(ResolutionError::Unconstructable {
            class: AuditedMap::CLASS.into(),
            reason: "no allocator registered".into(),
        })
    );
}

#[test]
fn builtin_classes_by_name() {
    let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::new([3, -4]));
    let field = FieldDeclaration::new(
        "ordered",
        ValueType::map(MapKind::class(class::LINKED_HASH_MAP), ValueType::Int, ValueType::Int),
    );
    let map = maps.random_map(&field, &mut CountingPopulator::new()).unwrap();
    assert_eq!(map.class(), class::LINKED_HASH_MAP);
    // insertion order is kept
    let keys = map.entries().into_iter().map(|(k, _)| k).collect::<Vec<_>>();
    assert_eq!(keys, vec![Value::Int(0), Value::Int(2), Value::Int(4)]);

    let map = maps.random_map(&field, &mut CountingPopulator::new()).unwrap();
    assert_eq!(map.len(), 4);
}
