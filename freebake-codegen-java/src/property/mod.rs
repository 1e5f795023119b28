//! Property code generation strategies.
//!
//! Each property of a value type is handled by exactly one
//! [`PropertyCodeGenerator`]. Strategies are chosen by [`select`], which
//! consults [`FACTORIES`] in order and falls back to the plain-value strategy
//! when every factory declines.
//!
//! | order | strategy | accepts |
//! | --- | --- | --- |
//! | 1 | `list` | `java.util.List<E>` |
//! | 2 | `set` | `java.util.Set<E>` |
//! | 3 | `map` | `java.util.Map<K, V>` |
//! | 4 | `optional` | `java.util.Optional<T>` |
//! | 5 | `primitive-optional` | `java.util.OptionalInt`, `OptionalLong`, `OptionalDouble` |
//! | 6 | `nullable` | any reference type marked `nullable` |
//! | - | `default` | everything else |
//!
//! The shapes are disjoint apart from `nullable`, which must come after the
//! container strategies so that a nullable `Optional` is still an `Optional`.

mod collection;
mod default;
mod map;
mod nullable;
mod optional;
mod primitive_optional;

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_model::{Datatype, Options, Property};
use tracing::debug;

pub use primitive_optional::OptionalKind;

/// Everything a factory may inspect when deciding whether it applies.
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    pub datatype: &'a Datatype,
    pub property: &'a Property,
    pub options: &'a Options,
}

/// The state of a property in a freshly constructed builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initially {
    /// Must be set before `build()`; tracked in `_unsetProperties`.
    Required,
    /// The user's builder constructor assigns it.
    HasDefault,
    /// Empty until set; `build()` never fails on it.
    Optional,
}

/// Emits all code for one property.
///
/// The orchestrator calls the hooks in a fixed order, each with the [`Block`]
/// of the method or class body being written. Hooks declare helper locals
/// through the block so that repeated requests collapse to one declaration.
pub trait PropertyCodeGenerator {
    fn property(&self) -> &Property;

    fn initially(&self) -> Initially;

    /// The builder's mutable field.
    fn add_builder_field_declaration(&self, code: &mut Block<'_>) -> Result<()>;

    /// Setters, mappers and the rest of the builder-side API.
    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()>;

    /// The immutable field on the value and partial classes.
    fn add_value_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.property();
        code.line(excerpt!(
            "private final {} {};",
            &property.type_name,
            &property.name
        ));
        Ok(())
    }

    /// Annotations placed before both the builder and the value getter.
    fn add_getter_annotations(&self, _code: &mut Block<'_>) -> Result<()> {
        Ok(())
    }

    /// Body of the value type's getter, given a reference to its field.
    fn add_value_getter(&self, code: &mut Block<'_>, field: &Excerpt) -> Result<()> {
        code.line(excerpt!("return {};", field));
        Ok(())
    }

    /// Initialise `final_field` in the value class constructor from `builder`.
    fn add_final_field_assignment(
        &self,
        code: &mut Block<'_>,
        final_field: &Excerpt,
        builder: &Excerpt,
    ) -> Result<()>;

    /// Initialise `final_field` in the partial class constructor.
    fn add_partial_field_assignment(
        &self,
        code: &mut Block<'_>,
        final_field: &Excerpt,
        builder: &Excerpt,
    ) -> Result<()> {
        self.add_final_field_assignment(code, final_field, builder)
    }

    /// Copy the property from an instance of the value type.
    fn add_merge_from_value(&self, code: &mut Block<'_>, value: &Excerpt) -> Result<()>;

    /// Copy the property from another user builder.
    fn add_merge_from_builder(&self, code: &mut Block<'_>, builder: &Excerpt) -> Result<()>;

    /// Reset the builder field inside `clear()`.
    fn add_clear_field(&self, code: &mut Block<'_>) -> Result<()>;

    /// A condition under which the property appears in `toString()`.
    fn to_string_condition(&self, _field: &Excerpt) -> Option<Excerpt> {
        None
    }

    /// The value printed by `toString()`.
    fn to_string_value(&self, field: &Excerpt) -> Excerpt {
        field.clone()
    }
}

/// Creates a strategy for a property, or declines.
pub struct Factory {
    pub name: &'static str,
    pub create: for<'a> fn(Config<'a>) -> Option<Box<dyn PropertyCodeGenerator + 'a>>,
}

/// Factories in the order they are consulted. Most specific first.
pub static FACTORIES: &[Factory] = &[
    Factory {
        name: "list",
        create: collection::create_list,
    },
    Factory {
        name: "set",
        create: collection::create_set,
    },
    Factory {
        name: "map",
        create: map::create,
    },
    Factory {
        name: "optional",
        create: optional::create,
    },
    Factory {
        name: "primitive-optional",
        create: primitive_optional::create,
    },
    Factory {
        name: "nullable",
        create: nullable::create,
    },
];

/// Name of the plain-value fallback strategy.
pub const DEFAULT_STRATEGY: &str = "default";

/// The strategy for a property: the first factory that accepts it, or the
/// plain-value fallback.
pub fn select(config: Config<'_>) -> (&'static str, Box<dyn PropertyCodeGenerator + '_>) {
    for factory in FACTORIES {
        if let Some(strategy) = (factory.create)(config) {
            debug!(
                datatype = %config.datatype.type_name,
                property = %config.property.name,
                strategy = factory.name,
                "selected property strategy"
            );
            return (factory.name, strategy);
        }
    }
    debug!(
        datatype = %config.datatype.type_name,
        property = %config.property.name,
        strategy = DEFAULT_STRATEGY,
        "selected property strategy"
    );
    let fallback: Box<dyn PropertyCodeGenerator + '_> =
        Box::new(default::DefaultProperty::new(config));
    (DEFAULT_STRATEGY, fallback)
}

/// All strategy names, in dispatch order, ending with the fallback.
pub fn strategy_names() -> impl Iterator<Item = &'static str> {
    FACTORIES
        .iter()
        .map(|factory| factory.name)
        .chain(std::iter::once(DEFAULT_STRATEGY))
}

fn setter(property: &Property) -> String {
    format!("set{}", property.capitalized_name)
}

fn mapper(property: &Property) -> String {
    format!("map{}", property.capitalized_name)
}

fn clear_method(property: &Property) -> String {
    format!("clear{}", property.capitalized_name)
}

/// Builder-side getter; always bean-style so it cannot clash with mutators.
fn getter(property: &Property) -> String {
    format!("get{}", property.capitalized_name)
}

/// `{@link Person#getName()}`
fn getter_link(config: &Config<'_>) -> String {
    format!(
        "{{@link {}#{}()}}",
        config.datatype.type_name.local_name(),
        config.property.getter_name
    )
}

/// `@return this {@code Builder} object`
fn returns_builder(config: &Config<'_>) -> String {
    format!(
        "@return this {{@code {}}} object",
        config.datatype.builder.simple_name()
    )
}

fn return_this(config: &Config<'_>) -> Excerpt {
    excerpt!("return ({}) this;", &config.datatype.builder)
}

/// The property's constant in the generated property enum.
fn unset_constant(config: &Config<'_>) -> Excerpt {
    excerpt!(
        "{}.{}",
        &config.datatype.property_enum,
        &config.property.all_caps_name
    )
}

fn nullable_annotation(config: &Config<'_>) -> Excerpt {
    excerpt!("@{}", &config.options.nullable_annotation)
}

/// Emit `if (condition) {`, the body, and the closing brace.
pub(crate) fn if_block(code: &mut Block<'_>, condition: Excerpt, body: impl FnOnce(&mut Block<'_>)) {
    code.line(excerpt!("if ({}) {", condition));
    code.indent();
    body(code);
    code.dedent();
    code.line("}");
}
