//! Random map population.

use crate::{
    error::{PopulationError, ResolutionError},
    populator::Populator,
    resolver::{InstanceResolver, MapRegistry},
    size::{self, ByteRandomizer},
    types::{FieldDeclaration, MapType, ValueType},
    value::MapValue,
};
use parking_lot::Mutex;
use std::fmt;

/// Generates randomly sized, randomly filled maps for map-typed declarations.
///
/// Keys and values are requested from the [`Populator`] passed to each call, so nested maps,
/// beans and primitives are all generated the same way as top level values. Sizes are drawn
/// from the [`ByteRandomizer`] given at construction.
pub struct MapPopulator {
    resolver: InstanceResolver,
    sizes: Mutex<Box<dyn ByteRandomizer + Send>>,
}

impl MapPopulator {
    pub fn new(registry: MapRegistry, sizes: impl ByteRandomizer + Send + 'static) -> Self {
        Self { resolver: InstanceResolver::new(registry), sizes: Mutex::new(Box::new(sizes)) }
    }

    /// Returns a random map for a map-typed field.
    ///
    /// Fields declared without key and value types get an empty map.
    pub fn random_map<P: Populator + ?Sized>(
        &self,
        field: &FieldDeclaration,
        populator: &mut P,
    ) -> Result<MapValue, PopulationError> {
        let ty = Self::map_type(field)?;
        trace!(field = %field.name, %ty, "populating map field");
        self.populate_map(ty, populator)
    }

    /// Returns a random map for a map type.
    ///
    /// Errors raised by `populator` are returned as is; entries inserted before the failure are
    /// dropped along with the map.
    pub fn populate_map<P: Populator + ?Sized>(
        &self,
        ty: &MapType,
        populator: &mut P,
    ) -> Result<MapValue, PopulationError> {
        let mut map = self.empty_map(ty)?;
        let size = self.select_size();
        match &ty.generics {
            Some((key_ty, value_ty)) => Self::fill(&mut map, key_ty, value_ty, size, populator)?,
            None => trace!(%ty, size, "raw map declaration, leaving it empty"),
        }
        Ok(map)
    }

    /// Returns an empty instance for a map type.
    pub fn empty_map(&self, ty: &MapType) -> Result<MapValue, ResolutionError> {
        self.resolver.resolve(&ty.kind).map(MapValue::new)
    }

    /// Draws the number of entries of the next map.
    pub fn select_size(&self) -> usize {
        size::select_size(&mut **self.sizes.lock())
    }

    /// Inserts `count` random entries into `map`.
    ///
    /// Keys generated more than once overwrite the earlier entry. On error, the entries inserted
    /// so far stay in the map.
    pub fn fill<P: Populator + ?Sized>(
        map: &mut MapValue,
        key_ty: &ValueType,
        value_ty: &ValueType,
        count: usize,
        populator: &mut P,
    ) -> Result<(), PopulationError> {
        for index in 0..count {
            let key = populator.populate(key_ty)?;
            let value = populator.populate(value_ty)?;
            if map.insert(key, value).is_some() {
                trace!(index, class = map.class(), "generated key already present, overwritten");
            }
        }
        trace!(class = map.class(), count, len = map.len(), "filled map");
        Ok(())
    }

    /// Returns the map type of a field, checking it may be inspected.
    pub fn map_type(field: &FieldDeclaration) -> Result<&MapType, PopulationError> {
        if field.is_restricted() {
            return Err(PopulationError::Access { field: field.name.clone() });
        }
        field.ty.as_map().ok_or_else(|| PopulationError::NotAMap {
            field: field.name.clone(),
            ty: field.ty.to_string(),
        })
    }
}

impl Default for MapPopulator {
    /// Built-in classes and an OS seeded size randomizer.
    fn default() -> Self {
        Self::new(MapRegistry::default(), size::SeededByteRandomizer::new(None))
    }
}

impl fmt::Debug for MapPopulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapPopulator").field("resolver", &self.resolver).finish_non_exhaustive()
    }
}
