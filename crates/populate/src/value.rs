//! Generated values.

use crate::{
    containers::{ConcurrentTreeMap, MapContainer, TreeMap},
    types::{BeanType, MapKind, MapType, ValueType},
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A generated value.
///
/// Values are totally ordered and hashable so that any of them, maps included, can be used as a
/// map key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    String(String),
    Bean(BeanValue),
    Map(MapValue),
}

impl Value {
    /// Returns `true` if this value is a valid instance of `ty`.
    pub fn type_matches(&self, ty: &ValueType) -> bool {
        match (self, ty) {
            (Self::Bool(_), ValueType::Bool)
            | (Self::Byte(_), ValueType::Byte)
            | (Self::Short(_), ValueType::Short)
            | (Self::Int(_), ValueType::Int)
            | (Self::Long(_), ValueType::Long)
            | (Self::Char(_), ValueType::Char)
            | (Self::String(_), ValueType::String) => true,
            (Self::Bean(bean), ValueType::Bean(ty)) => bean.type_matches(ty),
            (Self::Map(map), ValueType::Map(ty)) => map.type_matches(ty),
            _ => false,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_bean(&self) -> Option<&BeanValue> {
        match self {
            Self::Bean(bean) => Some(bean),
            _ => None,
        }
    }
}

/// A populated bean: field values in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeanValue {
    pub name: String,
    pub fields: Vec<(String, Value)>,
}

impl BeanValue {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, value)| value)
    }

    fn type_matches(&self, ty: &BeanType) -> bool {
        self.name == ty.name
            && self.fields.len() == ty.fields.len()
            && self
                .fields
                .iter()
                .zip(&ty.fields)
                .all(|((name, value), decl)| *name == decl.name && value.type_matches(&decl.ty))
    }
}

/// A populated map, owning whichever container the declaration resolved to.
///
/// Equality, ordering and hashing look at the entries only, in ascending key order, regardless
/// of the container class.
pub struct MapValue(Box<dyn MapContainer>);

impl MapValue {
    pub fn new(container: Box<dyn MapContainer>) -> Self {
        Self(container)
    }

    /// Returns the container if it is a `T`.
    pub fn downcast_ref<T: MapContainer>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Returns the entries in ascending key order.
    pub fn sorted_entries(&self) -> Vec<(Value, Value)> {
        let mut entries = self.0.entries();
        entries.sort();
        entries
    }

    /// Calls `f` with the entries in ascending key order.
    ///
    /// Ordered containers are iterated in place; the others are copied and sorted first.
    fn with_sorted<R>(
        &self,
        f: impl FnOnce(&mut dyn Iterator<Item = (&Value, &Value)>) -> R,
    ) -> R {
        if let Some(tree) = self.downcast_ref::<TreeMap>() {
            return f(&mut tree.iter());
        }
        if let Some(tree) = self.downcast_ref::<ConcurrentTreeMap>() {
            return f(&mut tree.read().iter());
        }
        let entries = self.sorted_entries();
        f(&mut entries.iter().map(|(key, value)| (key, value)))
    }

    /// Returns `true` if the container satisfies the declaration and every entry matches the
    /// declared key and value types.
    pub fn type_matches(&self, ty: &MapType) -> bool {
        let kind = match &ty.kind {
            MapKind::Contract(contract) => self.markers().contains(contract.markers()),
            MapKind::Class(class) => self.class() == class,
        };
        kind && ty.generics.as_ref().is_none_or(|(key_ty, value_ty)| {
            self.entries()
                .iter()
                .all(|(key, value)| key.type_matches(key_ty) && value.type_matches(value_ty))
        })
    }
}

impl Deref for MapValue {
    type Target = dyn MapContainer;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl DerefMut for MapValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.0
    }
}

impl Clone for MapValue {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.class())?;
        f.debug_map().entries(self.entries()).finish()
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MapValue {}

impl PartialOrd for MapValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MapValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.with_sorted(|a| {
            other.with_sorted(|b| loop {
                let ordering = match (a.next(), b.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (Some((ka, va)), Some((kb, vb))) => ka.cmp(kb).then_with(|| va.cmp(vb)),
                };
                if ordering.is_ne() {
                    return ordering;
                }
            })
        })
    }
}

impl Hash for MapValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.with_sorted(|entries| entries.for_each(|entry| entry.hash(state)));
    }
}
