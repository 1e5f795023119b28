//! Hierarchical namespaces for hygienic naming.

use std::{collections::HashSet, fmt};

use crate::{Error, Result};

/// A name reserved in a [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A local variable or parameter.
    Variable(String),
    /// A field of the enclosing type.
    Field(String),
}

impl Identifier {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "variable '{}'", name),
            Self::Field(name) => write!(f, "field '{}'", name),
        }
    }
}

/// A set of reserved identifiers with a borrowed link to the enclosing scope.
///
/// Lookups walk the whole parent chain; reservations only ever touch the
/// innermost scope.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    parent: Option<&'p Scope<'p>>,
    identifiers: HashSet<Identifier>,
}

impl Scope<'static> {
    /// An empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// A root scope for a type body with the given fields already reserved.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parent: None,
            identifiers: fields.into_iter().map(Identifier::field).collect(),
        }
    }
}

impl<'p> Scope<'p> {
    /// A new scope nested inside this one.
    pub fn child(&self) -> Scope<'_> {
        Scope {
            parent: Some(self),
            identifiers: HashSet::new(),
        }
    }

    /// Whether `identifier` is reserved here or in any enclosing scope.
    pub fn contains(&self, identifier: &Identifier) -> bool {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if current.identifiers.contains(identifier) {
                return true;
            }
            scope = current.parent;
        }
        false
    }

    /// Whether `name` is reserved as either a variable or a field.
    pub fn is_taken(&self, name: &str) -> bool {
        self.contains(&Identifier::variable(name)) || self.contains(&Identifier::field(name))
    }

    /// Reserve `identifier` in this scope.
    ///
    /// Fails if this scope already holds it. Ancestors are not consulted, so
    /// shadowing an outer name is allowed.
    pub fn add(&mut self, identifier: Identifier) -> Result<()> {
        if self.identifiers.contains(&identifier) {
            return Err(Error::DuplicateIdentifier { identifier });
        }
        self.identifiers.insert(identifier);
        Ok(())
    }
}
