//! # randbeans-populate
//!
//! Random population of map-typed declarations.
//!
//! A map declaration names either an interface [`MapContract`] or a concrete class registered in
//! a [`MapRegistry`], plus optional key and value types. [`MapPopulator`] resolves it to an empty
//! container, draws a size and fills it with keys and values requested from a [`Populator`].
//!
//! ```
//! use randbeans_populate::{
//!     FieldDeclaration, MapContract, RandomPopulator, ValueType, config::PopulatorConfig,
//! };
//!
//! let field = FieldDeclaration::new(
//!     "stock",
//!     ValueType::map(MapContract::SortedMap, ValueType::String, ValueType::Int),
//! );
//! let mut populator = RandomPopulator::new(&PopulatorConfig::default().with_seed(1));
//! let stock = populator.random_map(&field).unwrap();
//! assert!(stock.len() <= 127);
//! ```

#![warn(unreachable_pub, unused_crate_dependencies, rust_2018_idioms)]

#[macro_use]
extern crate tracing;

pub use randbeans_config as config;

pub mod containers;
pub use containers::MapContainer;

mod contract;
pub use contract::{MapContract, Markers};

mod error;
pub use error::{ConstructionError, PopulationError, ResolutionError};

mod map;
pub use map::MapPopulator;

mod populator;
pub use populator::{Populator, RandomPopulator};

pub mod resolver;
pub use resolver::{InstanceResolver, MapClass, MapRegistry};

pub mod size;
pub use size::{ByteRandomizer, SeededByteRandomizer};

mod types;
pub use types::{BeanType, FieldAccess, FieldDeclaration, MapKind, MapType, ValueType};

mod value;
pub use value::{BeanValue, MapValue, Value};
