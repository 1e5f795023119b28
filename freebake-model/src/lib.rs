// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The property model consumed by the freebake code generators.
//!
//! A `freebake.toml` file declares value types and their properties. Parsing
//! validates names and types against Java rules and produces immutable
//! [`Datatype`] and [`Property`] descriptors.

mod datatype;
mod error;
mod manifest;
mod options;
mod property;

pub use datatype::{BuilderFactory, Datatype};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Manifest, Model, ParseContext, PropertyEntry, RawOptions, TypeDefinition, TypeEntry,
    parse_model,
};
pub use options::{DEFAULT_INDENT, DEFAULT_NULLABLE_ANNOTATION, Options};
pub use property::Property;
