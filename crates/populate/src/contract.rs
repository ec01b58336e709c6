//! Map capability markers and the interface contracts built from them.

use std::{fmt, ops::BitOr};

/// A set of map capability markers.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Markers(u8);

impl Markers {
    /// No capability beyond a plain key to value mapping.
    pub const NONE: Self = Self(0);
    /// Keys are kept in ascending order.
    pub const SORTED: Self = Self(1);
    /// Supports closest-match navigation over the ordered keys. Implies [`Self::SORTED`].
    pub const NAVIGABLE: Self = Self(1 << 1);
    /// Safe for concurrent readers and writers.
    pub const CONCURRENT: Self = Self(1 << 2);

    const NAMES: [(Self, &'static str); 3] = [
        (Self::SORTED, "sorted"),
        (Self::NAVIGABLE, "navigable"),
        (Self::CONCURRENT, "concurrent"),
    ];

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every marker of `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Adds the markers implied by the ones already set.
    pub const fn normalized(self) -> Self {
        if self.contains(Self::NAVIGABLE) { self.union(Self::SORTED) } else { self }
    }
}

impl BitOr for Markers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = Self::NAMES.iter().filter(|(m, _)| self.contains(*m)).map(|(_, name)| name);
        f.debug_set().entries(names).finish()
    }
}

/// An abstract map declaration: the capabilities a field requires without naming an
/// implementation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MapContract {
    Map,
    SortedMap,
    NavigableMap,
    ConcurrentMap,
    ConcurrentNavigableMap,
    /// A user interface extending any combination of the markers.
    Custom { name: String, markers: Markers },
}

impl MapContract {
    pub fn custom(name: impl Into<String>, markers: Markers) -> Self {
        Self::Custom { name: name.into(), markers }
    }

    /// Returns every capability an implementation of this contract must carry.
    pub fn markers(&self) -> Markers {
        match self {
            Self::Map => Markers::NONE,
            Self::SortedMap => Markers::SORTED,
            Self::NavigableMap => Markers::SORTED | Markers::NAVIGABLE,
            Self::ConcurrentMap => Markers::CONCURRENT,
            Self::ConcurrentNavigableMap => {
                Markers::SORTED | Markers::NAVIGABLE | Markers::CONCURRENT
            }
            Self::Custom { markers, .. } => markers.normalized(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Map => "Map",
            Self::SortedMap => "SortedMap",
            Self::NavigableMap => "NavigableMap",
            Self::ConcurrentMap => "ConcurrentMap",
            Self::ConcurrentNavigableMap => "ConcurrentNavigableMap",
            Self::Custom { name, .. } => name,
        }
    }
}

impl fmt::Display for MapContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
