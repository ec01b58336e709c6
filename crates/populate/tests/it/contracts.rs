//! Interface declarations resolve to their default implementations.

use randbeans_populate::{
    FieldDeclaration, MapContainer, MapContract, MapPopulator, MapRegistry, Markers, Populator, RandomPopulator,
    Value, ValueType,
    config::PopulatorConfig,
    containers::{ConcurrentHashMap, ConcurrentTreeMap, TreeMap, UnorderedMap, class},
    size::MAX_SIZE,
};
use randbeans_test_utils::{CountingPopulator, ScriptedBytes, init_tracing};
use similar_asserts::assert_eq;

fn field(contract: MapContract, key: ValueType, value: ValueType) -> FieldDeclaration {
    FieldDeclaration::new("field", ValueType::map(contract, key, value))
}

#[test]
fn general_map_of_strings_to_ints() {
    init_tracing();
    let field = field(MapContract::Map, ValueType::String, ValueType::Int);
    let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(11));
    for _ in 0..16 {
        let map = populator.random_map(&field).unwrap();
        assert!(map.downcast_ref::<UnorderedMap>().is_some());
        assert!(map.len() <= MAX_SIZE);
        for (key, value) in map.entries() {
            assert!(matches!(key, Value::String(_)), "{key:?}");
            assert!(matches!(value, Value::Int(_)), "{value:?}");
        }
    }
}

#[test]
fn sorted_map_iterates_in_ascending_key_order() {
    init_tracing();
    let field = field(MapContract::SortedMap, ValueType::String, ValueType::Int);
    let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::constant(-60));
    let mut populator = RandomPopulator::new(&PopulatorConfig::default());
    let map = maps.random_map(&field, &mut populator).unwrap();
    assert!(map.downcast_ref::<TreeMap>().is_some());
    assert!(!map.is_empty());
    let keys = map.entries().into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "{keys:?}");
}

#[test]
fn concurrent_navigable_map() {
    init_tracing();
    let field = field(MapContract::ConcurrentNavigableMap, ValueType::Int, ValueType::String);
    let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::constant(20));
    let map = maps.random_map(&field, &mut CountingPopulator::new()).unwrap();
    assert!(map.downcast_ref::<ConcurrentTreeMap>().is_some());
    assert!(map.markers().contains(Markers::CONCURRENT | Markers::NAVIGABLE));
    assert_eq!(map.len(), 20);
}

#[test]
fn concurrent_map() {
    let field = field(MapContract::ConcurrentMap, ValueType::Long, ValueType::Bool);
    let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::constant(5));
    let map = maps.random_map(&field, &mut CountingPopulator::new()).unwrap();
    let concurrent = map.downcast_ref::<ConcurrentHashMap>().unwrap();
    assert_eq!(concurrent.len(), 5);
    concurrent.insert_shared(Value::Long(-1), Value::Bool(true));
    assert_eq!(map.len(), 6);
}

#[test]
fn raw_map_is_empty_whatever_the_size() {
    init_tracing();
    let field = FieldDeclaration::new("raw", ValueType::raw_map(MapContract::Map));
    for byte in [0, 1, -1, 127, -128] {
        let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::constant(byte));
        let mut populator = CountingPopulator::new();
        let map = maps.random_map(&field, &mut populator).unwrap();
        assert_eq!(map.class(), class::HASH_MAP);
        assert!(map.is_empty());
        assert!(populator.requested.is_empty());
    }
}

#[test]
fn duplicate_keys_overwrite() {
    let field = field(MapContract::SortedMap, ValueType::Int, ValueType::Int);
    let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::constant(10));
    // keys 0, 2, 4, 0, 2, ... with values 1, 3, 5, 1, 3, ...
    let mut populator = CountingPopulator::cycling(6);
    let map = maps.random_map(&field, &mut populator).unwrap();
    assert_eq!(populator.requested.len(), 20);
    assert_eq!(
        map.entries(),
        vec![
            (Value::Int(0), Value::Int(1)),
            (Value::Int(2), Value::Int(3)),
            (Value::Int(4), Value::Int(5)),
        ]
    );
}

#[test]
fn nested_maps_as_values() {
    let inner = ValueType::map(MapContract::NavigableMap, ValueType::Char, ValueType::Short);
    let outer = ValueType::map(MapContract::ConcurrentMap, ValueType::String, inner);
    let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(5));
    let value = populator.populate(&outer).unwrap();
    assert!(value.type_matches(&outer));
    let outer = value.as_map().unwrap();
    for (_, inner) in outer.entries() {
        assert_eq!(inner.as_map().unwrap().class(), class::TREE_MAP);
    }
}

#[test]
fn maps_as_keys() {
    let key = ValueType::map(MapContract::Map, ValueType::Byte, ValueType::Byte);
    let ty = ValueType::map(MapContract::SortedMap, key, ValueType::Bool);
    let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(8));
    let value = populator.populate(&ty).unwrap();
    assert!(value.type_matches(&ty));
}
