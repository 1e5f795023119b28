//! Datatype descriptors.

use freebake_core::QualifiedName;
use serde::Deserialize;

/// How the user's builder type is instantiated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderFactory {
    /// `new Person.Builder()` is available.
    #[default]
    Constructor,
    /// The builder cannot be constructed by generated code.
    None,
}

/// The names surrounding one generated builder.
///
/// For `com.example.Person` the defaults are:
///
/// | role | name |
/// | --- | --- |
/// | builder | `com.example.Person.Builder` |
/// | generated builder | `com.example.Person_Builder` |
/// | value type | `com.example.Person_Builder.Value` |
/// | partial type | `com.example.Person_Builder.Partial` |
/// | property enum | `com.example.Person_Builder.Property` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datatype {
    pub type_name: QualifiedName,
    pub builder: QualifiedName,
    pub generated_builder: QualifiedName,
    pub value_type: QualifiedName,
    pub partial_type: QualifiedName,
    pub property_enum: QualifiedName,
    /// The value type is an interface (`implements`) rather than an abstract class (`extends`).
    pub interface_type: bool,
    pub builder_factory: BuilderFactory,
}

impl Datatype {
    /// Derive all names from the user's value type.
    pub fn new(type_name: QualifiedName) -> Self {
        let generated_builder =
            type_name.sibling(format!("{}_Builder", type_name.simple_names().join("_")));
        Self {
            builder: type_name.nested("Builder"),
            value_type: generated_builder.nested("Value"),
            partial_type: generated_builder.nested("Partial"),
            property_enum: generated_builder.nested("Property"),
            generated_builder,
            type_name,
            interface_type: false,
            builder_factory: BuilderFactory::default(),
        }
    }

    pub fn with_builder(mut self, builder: QualifiedName) -> Self {
        self.builder = builder;
        self
    }

    pub fn with_interface_type(mut self, interface_type: bool) -> Self {
        self.interface_type = interface_type;
        self
    }

    pub fn with_builder_factory(mut self, builder_factory: BuilderFactory) -> Self {
        self.builder_factory = builder_factory;
        self
    }

    /// Whether generated code can instantiate a fresh builder to read defaults from.
    pub fn has_builder_factory(&self) -> bool {
        self.builder_factory == BuilderFactory::Constructor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        assert_eq!(datatype.builder.to_string(), "com.example.Person.Builder");
        assert_eq!(
            datatype.generated_builder.to_string(),
            "com.example.Person_Builder"
        );
        assert_eq!(
            datatype.value_type.to_string(),
            "com.example.Person_Builder.Value"
        );
        assert_eq!(
            datatype.partial_type.to_string(),
            "com.example.Person_Builder.Partial"
        );
        assert!(datatype.has_builder_factory());
    }

    #[test]
    fn test_nested_value_type() {
        let outer = QualifiedName::of("com.example", "Outer");
        let datatype = Datatype::new(outer.nested("Item"));
        assert_eq!(
            datatype.generated_builder.to_string(),
            "com.example.Outer_Item_Builder"
        );
        assert_eq!(datatype.builder.to_string(), "com.example.Outer.Item.Builder");
    }
}
