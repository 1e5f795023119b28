//! Property descriptors.

use freebake_core::{TypeName, capitalize, to_upper_snake_case};

/// One property of a value type, as consumed by the code generators.
///
/// Immutable once built; strategies borrow it for the whole generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Field and parameter name, e.g. `firstName`.
    pub name: String,
    /// `FirstName`, used to build accessor names such as `setFirstName`.
    pub capitalized_name: String,
    /// `FIRST_NAME`, used for the property enum constant.
    pub all_caps_name: String,
    pub type_name: TypeName,
    /// Name of the abstract getter on the value type, e.g. `getFirstName`.
    pub getter_name: String,
    pub uses_bean_convention: bool,
    /// Annotated nullable on the value type.
    pub nullable: bool,
    /// The user's builder constructor assigns a default, so the property is not required.
    pub has_default: bool,
    /// The mapper accepted by `mapX` returns a boxed value that may be null.
    pub boxed_mapper: bool,
}

impl Property {
    /// A bean-convention property (`getName()`).
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        let name = name.into();
        let capitalized_name = capitalize(&name);
        Self {
            getter_name: format!("get{}", capitalized_name),
            all_caps_name: to_upper_snake_case(&name),
            capitalized_name,
            name,
            type_name,
            uses_bean_convention: true,
            nullable: false,
            has_default: false,
            boxed_mapper: false,
        }
    }

    /// Switch to the plain getter convention (`name()`).
    pub fn without_bean_convention(mut self) -> Self {
        self.getter_name = self.name.clone();
        self.uses_bean_convention = false;
        self
    }

    pub fn with_getter_name(mut self, getter_name: impl Into<String>) -> Self {
        self.getter_name = getter_name.into();
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_default(mut self, has_default: bool) -> Self {
        self.has_default = has_default;
        self
    }

    pub fn boxed_mapper(mut self, boxed_mapper: bool) -> Self {
        self.boxed_mapper = boxed_mapper;
        self
    }
}

#[cfg(test)]
mod tests {
    use freebake_core::PrimitiveType;

    use super::*;

    #[test]
    fn test_derived_names() {
        let property = Property::new("firstName", TypeName::Primitive(PrimitiveType::Int));
        assert_eq!(property.capitalized_name, "FirstName");
        assert_eq!(property.all_caps_name, "FIRST_NAME");
        assert_eq!(property.getter_name, "getFirstName");
    }

    #[test]
    fn test_plain_getter_convention() {
        let property = Property::new("name", TypeName::Primitive(PrimitiveType::Int))
            .without_bean_convention();
        assert_eq!(property.getter_name, "name");
        assert!(!property.uses_bean_convention);
    }
}
