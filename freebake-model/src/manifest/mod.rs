//! Raw model file types and parsing for freebake.toml files.

mod parse;
mod validate;

use serde::Deserialize;
pub use validate::ParseContext;

use crate::{BuilderFactory, Datatype, Options, Property};

pub use parse::parse_model;

/// Root of a freebake.toml file, exactly as written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator options
    #[serde(default)]
    pub options: RawOptions,

    /// Value types to generate builders for
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

/// The `[options]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOptions {
    pub indent: Option<u8>,
    pub nullable_annotation: Option<String>,
}

/// One `[[types]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    /// Fully-qualified value type, e.g. `com.example.Person`
    pub name: String,

    /// Fully-qualified builder type (defaults to `<name>.Builder`)
    pub builder: Option<String>,

    #[serde(default)]
    pub interface: bool,

    #[serde(default)]
    pub builder_factory: BuilderFactory,

    /// `getName()` when true, `name()` when false
    #[serde(default = "default_bean_convention")]
    pub bean_convention: bool,

    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

fn default_bean_convention() -> bool {
    true
}

/// One `[[types.properties]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    pub getter: Option<String>,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub has_default: bool,

    #[serde(default)]
    pub boxed_mapper: bool,
}

/// A validated model: options plus every value type with its properties.
#[derive(Debug, Clone)]
pub struct Model {
    pub options: Options,
    pub types: Vec<TypeDefinition>,
}

/// One value type and its properties, in declaration order.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    pub datatype: Datatype,
    pub properties: Vec<Property>,
}

impl Model {
    /// Find a type by its fully-qualified name.
    pub fn find(&self, name: &str) -> Option<&TypeDefinition> {
        self.types
            .iter()
            .find(|t| t.datatype.type_name.to_string() == name)
    }

    /// Total number of properties across all types.
    pub fn property_count(&self) -> usize {
        self.types.iter().map(|t| t.properties.len()).sum()
    }
}
