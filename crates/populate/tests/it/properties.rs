//! Seed-driven properties of generated maps.

use proptest::prelude::*;
use randbeans_populate::{
    FieldDeclaration, MapContract, MapPopulator, MapRegistry, Markers, Populator, RandomPopulator,
    Value, ValueType, config::PopulatorConfig, containers::class, size::MAX_SIZE,
};
use randbeans_test_utils::{CountingPopulator, ScriptedBytes};

fn contract() -> impl Strategy<Value = MapContract> {
    prop_oneof![
        Just(MapContract::Map),
        Just(MapContract::SortedMap),
        Just(MapContract::NavigableMap),
        Just(MapContract::ConcurrentMap),
        Just(MapContract::ConcurrentNavigableMap),
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(sorted, navigable, concurrent)| {
            let mut markers = Markers::NONE;
            let flags = [
                (sorted, Markers::SORTED),
                (navigable, Markers::NAVIGABLE),
                (concurrent, Markers::CONCURRENT),
            ];
            for (set, marker) in flags {
                if set {
                    markers = markers | marker;
                }
            }
            MapContract::custom("Custom", markers)
        }),
    ]
}

fn scalar() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        Just(ValueType::Bool),
        Just(ValueType::Byte),
        Just(ValueType::Short),
        Just(ValueType::Int),
        Just(ValueType::Long),
        Just(ValueType::Char),
        Just(ValueType::String),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        failure_persistence: None,
        ..Default::default()
    })]

    #[test]
    fn resolved_container_honors_the_contract(contract in contract(), byte in any::<i8>()) {
        let maps = MapPopulator::new(MapRegistry::default(), ScriptedBytes::constant(byte));
        let ty = ValueType::map(contract.clone(), ValueType::Int, ValueType::Long);
        let field = FieldDeclaration::new("f", ty);
        let map = maps.random_map(&field, &mut CountingPopulator::new()).unwrap();
        prop_assert!(map.markers().contains(contract.markers()));
        if contract.markers().is_empty() {
            prop_assert_eq!(map.class(), class::HASH_MAP);
        }
        // counting keys never collide
        prop_assert_eq!(map.len(), byte.saturating_abs() as usize);
    }

    #[test]
    fn sizes_stay_in_byte_range(seed in any::<u64>(), key in scalar(), value in scalar()) {
        let ty = ValueType::map(MapContract::Map, key, value);
        let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(seed));
        let generated = populator.populate(&ty).unwrap();
        let map = generated.as_map().unwrap();
        prop_assert!(map.len() <= MAX_SIZE);
        prop_assert!(generated.type_matches(&ty));
    }

    #[test]
    fn raw_maps_are_always_empty(seed in any::<u64>(), contract in contract()) {
        let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(seed));
        let field = FieldDeclaration::new("raw", ValueType::raw_map(contract));
        prop_assert!(populator.random_map(&field).unwrap().is_empty());
    }

    #[test]
    fn calls_are_independent(seed in any::<u64>()) {
        let field = FieldDeclaration::new(
            "f",
            ValueType::map(MapContract::SortedMap, ValueType::Int, ValueType::Int),
        );
        let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(seed));
        let first = populator.random_map(&field).unwrap();
        let snapshot = first.clone();
        let mut second = populator.random_map(&field).unwrap();
        second.insert(Value::Int(i32::MIN), Value::Int(0));
        prop_assert_eq!(&first, &snapshot);
        prop_assert!(second.len() <= MAX_SIZE + 1);
    }
}
