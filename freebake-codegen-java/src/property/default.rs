//! Plain values: the fallback strategy.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_model::Property;

use super::{
    Config, Initially, PropertyCodeGenerator, getter, getter_link, if_block, mapper,
    return_this, returns_builder, setter, unset_constant,
};
use crate::{declarations, java};

/// A property stored as-is, set through `setX` and transformed through `mapX`.
///
/// Unless the user's builder assigns a default, the property is required:
/// its getter and `build()` fail until it has been set.
pub(super) struct DefaultProperty<'a> {
    config: Config<'a>,
    required: bool,
}

impl<'a> DefaultProperty<'a> {
    pub(super) fn new(config: Config<'a>) -> Self {
        Self {
            required: !config.property.has_default,
            config,
        }
    }

    /// The functional interface accepted by `mapX` and its apply method.
    fn mapper_type(&self) -> (Excerpt, &'static str) {
        let type_name = &self.config.property.type_name;
        if let Some(primitive) = type_name.primitive()
            && let Some((operator, apply)) = java::primitive_unary_operator(primitive.keyword())
        {
            return (Excerpt::ty(operator), apply);
        }
        (
            Excerpt::generic(java::unary_operator(), [Excerpt::type_name(&type_name.boxed())]),
            "apply",
        )
    }

    fn add_setter(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        let primitive = property.type_name.is_primitive();

        let mut doc = vec![
            format!("Sets the value to be returned by {}.", getter_link(&self.config)),
            String::new(),
            returns_builder(&self.config),
        ];
        if !primitive {
            doc.push(format!(
                "@throws NullPointerException if {{@code {}}} is null",
                property.name
            ));
        }

        code.blank().javadoc(doc);
        code.method(
            excerpt!(
                "public {} {}({} {}) {",
                &datatype.builder,
                setter(property),
                &property.type_name,
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                let field = body.field(&property.name);
                if primitive {
                    body.line(excerpt!("{} = {};", &field, &property.name));
                } else {
                    body.line(excerpt!(
                        "{} = {}.requireNonNull({});",
                        &field,
                        java::objects(),
                        &property.name
                    ));
                }
                if self.required {
                    body.line(excerpt!(
                        "{}.remove({});",
                        body.field("_unsetProperties"),
                        unset_constant(&self.config)
                    ));
                }
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_mapper(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        let (mapper_type, apply) = self.mapper_type();

        let mut doc = vec![
            format!("Replaces the value to be returned by {}", getter_link(&self.config)),
            "by applying {@code mapper} to it and using the result.".to_string(),
            String::new(),
            returns_builder(&self.config),
        ];
        if property.type_name.is_primitive() {
            doc.push("@throws NullPointerException if {@code mapper} is null".to_string());
        } else {
            doc.push(
                "@throws NullPointerException if {@code mapper} is null or returns null"
                    .to_string(),
            );
        }
        if self.required {
            doc.push("@throws IllegalStateException if the field has not been set".to_string());
        }

        code.blank().javadoc(doc);
        code.method(
            excerpt!(
                "public {} {}({} mapper) {",
                &datatype.builder,
                mapper(property),
                mapper_type
            ),
            &["mapper"],
            |body| {
                body.line(excerpt!("{}.requireNonNull(mapper);", java::objects()));
                body.line(excerpt!(
                    "return {}(mapper.{}({}()));",
                    setter(property),
                    apply,
                    getter(property)
                ));
                Ok(())
            },
        )
    }

    fn add_getter(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;

        let mut doc = vec![format!(
            "Returns the value that will be returned by {}.",
            getter_link(&self.config)
        )];
        if self.required {
            doc.push(String::new());
            doc.push("@throws IllegalStateException if the field has not been set".to_string());
        }

        code.blank().javadoc(doc);
        code.method(
            excerpt!("public {} {}() {", &property.type_name, getter(property)),
            &[],
            |body| {
                if self.required {
                    let condition = excerpt!(
                        "{}.contains({})",
                        body.field("_unsetProperties"),
                        unset_constant(&self.config)
                    );
                    if_block(body, condition, |then| {
                        then.line(excerpt!(
                            "throw new {}(\"{} not set\");",
                            java::illegal_state_exception(),
                            &property.name
                        ));
                    });
                }
                body.line(excerpt!("return {};", body.field(&property.name)));
                Ok(())
            },
        )
    }
}

impl PropertyCodeGenerator for DefaultProperty<'_> {
    fn property(&self) -> &Property {
        self.config.property
    }

    fn initially(&self) -> Initially {
        if self.required {
            Initially::Required
        } else {
            Initially::HasDefault
        }
    }

    fn add_builder_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!("private {} {};", &property.type_name, &property.name));
        Ok(())
    }

    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()> {
        self.add_setter(code)?;
        self.add_mapper(code)?;
        self.add_getter(code)
    }

    fn add_final_field_assignment(
        &self,
        code: &mut Block<'_>,
        final_field: &Excerpt,
        builder: &Excerpt,
    ) -> Result<()> {
        code.line(excerpt!(
            "{} = {}.{};",
            final_field,
            builder,
            &self.config.property.name
        ));
        Ok(())
    }

    fn add_merge_from_value(&self, code: &mut Block<'_>, value: &Excerpt) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "{}({}.{}());",
            setter(property),
            value,
            &property.getter_name
        ));
        Ok(())
    }

    fn add_merge_from_builder(&self, code: &mut Block<'_>, builder: &Excerpt) -> Result<()> {
        let property = self.config.property;
        let set = excerpt!("{}({}.{}());", setter(property), builder, getter(property));
        if !self.required {
            code.line(set);
            return Ok(());
        }
        let base = declarations::upcast(code, self.config.datatype, builder)?;
        let condition = excerpt!(
            "!{}._unsetProperties.contains({})",
            &base,
            unset_constant(&self.config)
        );
        if_block(code, condition, |then| {
            then.line(set);
        });
        Ok(())
    }

    fn add_clear_field(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        if let Some(defaults) = declarations::fresh_builder(code, self.config.datatype)? {
            code.line(excerpt!(
                "{} = {}.{};",
                code.field(&property.name),
                &defaults,
                &property.name
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use freebake_codegen::{CodeBuilder, Scope};
    use freebake_core::{PrimitiveType, QualifiedName, TypeName};
    use freebake_model::{BuilderFactory, Datatype, Options};

    use super::*;

    fn render(fragments: Vec<freebake_codegen::CodeFragment>) -> String {
        let mut code = CodeBuilder::java();
        code.emit(&fragments);
        code.build()
    }

    fn accessors(property: &Property, datatype: &Datatype) -> String {
        let options = Options::default();
        let strategy = DefaultProperty::new(Config {
            datatype,
            property,
            options: &options,
        });
        let fields = Scope::with_fields([property.name.as_str(), "_unsetProperties"]);
        let mut class = Block::new(fields.child());
        strategy.add_builder_field_accessors(&mut class).unwrap();
        render(class.into_fragments())
    }

    fn person() -> Datatype {
        Datatype::new(QualifiedName::of("com.example", "Person"))
    }

    #[test]
    fn test_required_reference_setter() {
        let property = Property::new("name", "java.lang.String".parse().unwrap());
        let out = accessors(&property, &person());
        assert!(out.contains(
            "public com.example.Person.Builder setName(java.lang.String name) {\n  \
             this.name = java.util.Objects.requireNonNull(name);\n  \
             _unsetProperties.remove(com.example.Person_Builder.Property.NAME);\n  \
             return (com.example.Person.Builder) this;\n}\n"
        ));
        assert!(out.contains("throw new java.lang.IllegalStateException(\"name not set\");"));
    }

    #[test]
    fn test_primitive_with_default() {
        let property = Property::new("age", TypeName::Primitive(PrimitiveType::Int)).with_default(true);
        let out = accessors(&property, &person());
        assert!(out.contains("  this.age = age;\n  return (com.example.Person.Builder) this;\n"));
        assert!(out.contains(
            "public com.example.Person.Builder mapAge(java.util.function.IntUnaryOperator mapper) {"
        ));
        assert!(out.contains("  return setAge(mapper.applyAsInt(getAge()));\n"));
        assert!(!out.contains("_unsetProperties"));
    }

    #[test]
    fn test_boolean_maps_through_boxed_operator() {
        let property = Property::new("active", TypeName::Primitive(PrimitiveType::Boolean));
        let out = accessors(&property, &person());
        assert!(out.contains("mapActive(java.util.function.UnaryOperator<java.lang.Boolean> mapper)"));
        assert!(out.contains("return setActive(mapper.apply(getActive()));"));
    }

    #[test]
    fn test_merge_from_builder_shares_upcast() {
        let datatype = person();
        let options = Options::default();
        let first = Property::new("name", "java.lang.String".parse().unwrap());
        let second = Property::new("email", "java.lang.String".parse().unwrap());
        let fields = Scope::with_fields(["name", "email", "_unsetProperties"]);
        let class = Block::new(fields.child());
        let mut body = class.method_body(&["template"]).unwrap();
        let template = Excerpt::text("template");
        for property in [&first, &second] {
            DefaultProperty::new(Config {
                datatype: &datatype,
                property,
                options: &options,
            })
            .add_merge_from_builder(&mut body, &template)
            .unwrap();
        }
        let out = render(body.into_fragments());
        assert_eq!(out.matches("com.example.Person_Builder base = template;").count(), 1);
        assert!(out.starts_with("com.example.Person_Builder base = template;\n"));
        assert!(out.contains(
            "if (!base._unsetProperties.contains(com.example.Person_Builder.Property.EMAIL)) {\n  \
             setEmail(template.getEmail());\n}\n"
        ));
    }

    #[test]
    fn test_clear_without_factory_is_empty() {
        let datatype = person().with_builder_factory(BuilderFactory::None);
        let options = Options::default();
        let property = Property::new("name", "java.lang.String".parse().unwrap());
        let strategy = DefaultProperty::new(Config {
            datatype: &datatype,
            property: &property,
            options: &options,
        });
        let mut body = Block::root();
        strategy.add_clear_field(&mut body).unwrap();
        assert!(body.is_empty());
    }
}
