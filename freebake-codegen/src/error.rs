use thiserror::Error;

use crate::Identifier;

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Faults raised while emitting source.
///
/// Both are programming errors in a generator and abort the generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{identifier} is already declared in this scope")]
    DuplicateIdentifier { identifier: Identifier },

    #[error("incompatible declarations of '{name}': `{declaration}` conflicts with `{existing}`")]
    IncompatibleDeclaration {
        name: String,
        declaration: String,
        existing: String,
    },
}
