//! Value population.

use crate::{
    error::PopulationError,
    map::MapPopulator,
    resolver::MapRegistry,
    size::SeededByteRandomizer,
    types::{BeanType, FieldDeclaration, MapType, ValueType},
    value::{BeanValue, MapValue, Value},
};
use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};
use randbeans_config::PopulatorConfig;
use std::sync::Arc;

/// Generates random values for declared types.
#[auto_impl::auto_impl(&mut, Box)]
pub trait Populator {
    /// Returns a random value of type `ty`.
    ///
    /// Fails with [`PopulationError::Unsupported`] for types it has no randomizer for.
    fn populate(&mut self, ty: &ValueType) -> Result<Value, PopulationError>;
}

/// The default [`Populator`].
///
/// Primitives and strings are drawn from a seeded [`StdRng`], beans are populated field by
/// field and maps are delegated to a [`MapPopulator`]. Maps nested deeper than
/// [`PopulatorConfig::max_depth`] are left empty.
#[derive(Debug)]
pub struct RandomPopulator {
    rng: StdRng,
    maps: Arc<MapPopulator>,
    max_depth: usize,
    max_string_length: usize,
    depth: usize,
}

impl RandomPopulator {
    pub fn new(config: &PopulatorConfig) -> Self {
        Self::with_registry(config, MapRegistry::default())
    }

    /// Creates a populator resolving map classes from `registry`.
    pub fn with_registry(config: &PopulatorConfig, registry: MapRegistry) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sizes = SeededByteRandomizer::from_rng(StdRng::from_rng(&mut rng));
        Self::with_maps(config, Arc::new(MapPopulator::new(registry, sizes)), rng)
    }

    /// Creates a populator sharing an existing [`MapPopulator`].
    pub fn with_maps(config: &PopulatorConfig, maps: Arc<MapPopulator>, rng: StdRng) -> Self {
        Self {
            rng,
            maps,
            max_depth: config.max_depth,
            max_string_length: config.max_string_length,
            depth: 0,
        }
    }

    /// Returns a random map for a map-typed field.
    pub fn random_map(&mut self, field: &FieldDeclaration) -> Result<MapValue, PopulationError> {
        let ty = MapPopulator::map_type(field)?;
        self.nested_map(ty)
    }

    /// Returns a random bean.
    pub fn populate_bean(&mut self, bean: &BeanType) -> Result<BeanValue, PopulationError> {
        let mut fields = Vec::with_capacity(bean.fields.len());
        for field in &bean.fields {
            let value = match &field.ty {
                ValueType::Map(_) => Value::Map(self.random_map(field)?),
                ty if field.is_restricted() => {
                    debug!(bean = %bean.name, field = %field.name, %ty, "restricted field");
                    return Err(PopulationError::Access { field: field.name.clone() });
                }
                ty => self.populate(ty)?,
            };
            fields.push((field.name.clone(), value));
        }
        Ok(BeanValue { name: bean.name.clone(), fields })
    }

    fn nested_map(&mut self, ty: &MapType) -> Result<MapValue, PopulationError> {
        let maps = Arc::clone(&self.maps);
        if self.depth >= self.max_depth {
            trace!(%ty, depth = self.depth, "max depth reached, leaving map empty");
            return Ok(maps.empty_map(ty)?);
        }
        self.depth += 1;
        let map = maps.populate_map(ty, self);
        self.depth -= 1;
        map
    }

    fn random_string(&mut self) -> String {
        let len = self.rng.random_range(0..=self.max_string_length);
        (&mut self.rng).sample_iter(Alphanumeric).take(len).map(char::from).collect()
    }
}

impl Populator for RandomPopulator {
    fn populate(&mut self, ty: &ValueType) -> Result<Value, PopulationError> {
        let value = match ty {
            ValueType::Bool => Value::Bool(self.rng.random()),
            ValueType::Byte => Value::Byte(self.rng.random()),
            ValueType::Short => Value::Short(self.rng.random()),
            ValueType::Int => Value::Int(self.rng.random()),
            ValueType::Long => Value::Long(self.rng.random()),
            ValueType::Char => Value::Char(self.rng.random()),
            ValueType::String => Value::String(self.random_string()),
            ValueType::Bean(bean) => Value::Bean(self.populate_bean(bean)?),
            ValueType::Map(map) => Value::Map(self.nested_map(map)?),
            ValueType::Opaque(name) => return Err(PopulationError::Unsupported(name.clone())),
        };
        Ok(value)
    }
}
