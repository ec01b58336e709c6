//! Type descriptors for the values the populator can generate.

use crate::contract::MapContract;
use std::{fmt, sync::Arc};

/// A declared type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Char,
    String,
    Bean(Arc<BeanType>),
    Map(Box<MapType>),
    /// A named type no randomizer is known for.
    Opaque(String),
}

impl ValueType {
    /// Returns a parameterized map type.
    pub fn map(kind: impl Into<MapKind>, key: Self, value: Self) -> Self {
        Self::Map(Box::new(MapType::new(kind, key, value)))
    }

    /// Returns a raw map type, declared without key and value types.
    pub fn raw_map(kind: impl Into<MapKind>) -> Self {
        Self::Map(Box::new(MapType::raw(kind)))
    }

    pub fn bean(bean: BeanType) -> Self {
        Self::Bean(Arc::new(bean))
    }

    pub fn as_map(&self) -> Option<&MapType> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Byte => f.write_str("byte"),
            Self::Short => f.write_str("short"),
            Self::Int => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Char => f.write_str("char"),
            Self::String => f.write_str("String"),
            Self::Bean(bean) => f.write_str(&bean.name),
            Self::Map(map) => write!(f, "{map}"),
            Self::Opaque(name) => f.write_str(name),
        }
    }
}

/// A map-typed declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapType {
    /// The declared container: an interface contract or a concrete class.
    pub kind: MapKind,
    /// Key and value types, `None` for raw declarations.
    pub generics: Option<(ValueType, ValueType)>,
}

impl MapType {
    pub fn new(kind: impl Into<MapKind>, key: ValueType, value: ValueType) -> Self {
        Self { kind: kind.into(), generics: Some((key, value)) }
    }

    pub fn raw(kind: impl Into<MapKind>) -> Self {
        Self { kind: kind.into(), generics: None }
    }

    pub fn is_raw(&self) -> bool {
        self.generics.is_none()
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some((key, value)) = &self.generics {
            write!(f, "<{key}, {value}>")?;
        }
        Ok(())
    }
}

/// The container named by a map declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// An interface; any implementation carrying the contract's markers is acceptable.
    Contract(MapContract),
    /// A concrete class registered under this name; only that exact class is acceptable.
    Class(String),
}

impl MapKind {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }
}

impl From<MapContract> for MapKind {
    fn from(contract: MapContract) -> Self {
        Self::Contract(contract)
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contract(contract) => f.write_str(contract.name()),
            Self::Class(name) => f.write_str(name),
        }
    }
}

/// A named record type with ordered fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BeanType {
    pub name: String,
    pub fields: Vec<FieldDeclaration>,
}

impl BeanType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    /// Appends a field declaration.
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }
}

/// Whether a field declaration may be inspected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldAccess {
    #[default]
    Public,
    /// Inspection is denied by the access policy.
    Restricted,
}

/// One slot of a bean to populate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDeclaration {
    pub name: String,
    pub ty: ValueType,
    pub access: FieldAccess,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self { name: name.into(), ty, access: FieldAccess::Public }
    }

    /// Marks the field as not inspectable.
    pub fn restricted(mut self) -> Self {
        self.access = FieldAccess::Restricted;
        self
    }

    pub fn is_restricted(&self) -> bool {
        self.access == FieldAccess::Restricted
    }
}
