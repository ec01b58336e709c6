//! Errors raised while populating values.

/// Failure to produce an empty map instance for a declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("unknown map class `{0}`")]
    UnknownClass(String),
    #[error("cannot instantiate map class `{class}`: {reason}")]
    Unconstructable { class: String, reason: String },
    #[error("`{class}` does not satisfy the `{declared}` declaration")]
    ContractViolation { class: String, declared: String },
    #[error("freshly resolved `{class}` already holds {len} entries")]
    NotEmpty { class: String, len: usize },
}

/// Failure reported by a registered map constructor or allocator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ConstructionError(pub String);

impl ConstructionError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Possible errors when populating a value.
///
/// Errors raised while generating the entries of a map are returned unchanged, so a
/// [`PopulationError::Resolution`] always refers to the outermost map that could not be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PopulationError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error("access to field `{field}` is restricted")]
    Access { field: String },
    #[error("field `{field}` is declared as `{ty}`, not as a map")]
    NotAMap { field: String, ty: String },
    #[error("no randomizer for type `{0}`")]
    Unsupported(String),
}
