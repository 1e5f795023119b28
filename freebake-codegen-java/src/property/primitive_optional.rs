//! `OptionalInt`, `OptionalLong` and `OptionalDouble` properties.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_core::{PrimitiveType, QualifiedName};
use freebake_model::Property;

use super::{
    Config, Initially, PropertyCodeGenerator, clear_method, getter, getter_link, mapper,
    return_this, returns_builder, setter,
};
use crate::{declarations, java};

/// The three primitive-wrapping optionals of `java.util`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalKind {
    Int,
    Long,
    Double,
}

impl OptionalKind {
    pub const ALL: [OptionalKind; 3] = [Self::Int, Self::Long, Self::Double];

    /// `java.util.OptionalInt`
    pub fn wrapper(&self) -> QualifiedName {
        let simple = match self {
            Self::Int => "OptionalInt",
            Self::Long => "OptionalLong",
            Self::Double => "OptionalDouble",
        };
        QualifiedName::of("java.util", simple)
    }

    pub fn primitive(&self) -> PrimitiveType {
        match self {
            Self::Int => PrimitiveType::Int,
            Self::Long => PrimitiveType::Long,
            Self::Double => PrimitiveType::Double,
        }
    }

    /// The accessor unwrapping a present value, e.g. `getAsInt`.
    pub fn accessor(&self) -> &'static str {
        match self {
            Self::Int => "getAsInt",
            Self::Long => "getAsLong",
            Self::Double => "getAsDouble",
        }
    }

    /// The kind wrapped by `name`, if any.
    pub fn from_wrapper(name: &QualifiedName) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wrapper() == *name)
    }
}

pub(super) fn create(config: Config<'_>) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    let type_name = &config.property.type_name;
    if !type_name.type_args().is_empty() {
        return None;
    }
    let kind = OptionalKind::from_wrapper(type_name.qualified_name()?)?;
    let strategy: Box<dyn PropertyCodeGenerator + '_> =
        Box::new(PrimitiveOptionalProperty { config, kind });
    Some(strategy)
}

struct PrimitiveOptionalProperty<'a> {
    config: Config<'a>,
    kind: OptionalKind,
}

impl PrimitiveOptionalProperty<'_> {
    /// Whether the user asked for a mapper whose result may be null.
    fn boxed_mapper(&self) -> bool {
        self.config.property.boxed_mapper
    }

    /// The functional interface accepted by `mapX` and its apply method.
    fn mapper_type(&self) -> (Excerpt, &'static str) {
        let primitive = self.kind.primitive();
        if !self.boxed_mapper()
            && let Some((operator, apply)) = java::primitive_unary_operator(primitive.keyword())
        {
            return (Excerpt::ty(operator), apply);
        }
        (
            Excerpt::generic(java::unary_operator(), [Excerpt::ty(primitive.boxed())]),
            "apply",
        )
    }

    fn add_setter(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!("Sets the value to be returned by {}.", getter_link(&self.config)),
            String::new(),
            returns_builder(&self.config),
        ]);
        code.method(
            excerpt!(
                "public {} {}({} {}) {",
                &datatype.builder,
                setter(property),
                self.kind.primitive(),
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                body.line(excerpt!(
                    "{} = {}.of({});",
                    body.field(&property.name),
                    self.kind.wrapper(),
                    &property.name
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    /// `setP(OptionalInt)`: a null wrapper dereferences and throws before any
    /// mutation; present delegates to `setP(int)`, empty to `clearP()`.
    fn add_optional_setter(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!("Sets the value to be returned by {}.", getter_link(&self.config)),
            String::new(),
            returns_builder(&self.config),
            format!(
                "@throws NullPointerException if {{@code {}}} is null",
                property.name
            ),
        ]);
        code.method(
            excerpt!(
                "public {} {}({} {}) {",
                &datatype.builder,
                setter(property),
                self.kind.wrapper(),
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                body.line(excerpt!("if ({}.isPresent()) {", &property.name));
                body.indent()
                    .line(excerpt!(
                        "return {}({}.{}());",
                        setter(property),
                        &property.name,
                        self.kind.accessor()
                    ))
                    .dedent();
                body.line("} else {");
                body.indent()
                    .line(excerpt!("return {}();", clear_method(property)))
                    .dedent();
                body.line("}");
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
            format!("If the value to be returned by {} is present,", getter_link(&self.config)),
            "replaces it by applying {@code mapper} to it and using the result.".to_string(),
        ];
        if self.boxed_mapper() {
            doc.push(String::new());
            doc.push("<p>If the result is null, clears the value.".to_string());
        }
        doc.extend([
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code mapper} is null".to_string(),
        ]);

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
                let field = body.field(&property.name);
                let value = body.variable("value")?;
                if self.boxed_mapper() {
                    let lambda = {
                        let mut lambda = body.inner_block();
                        let result = lambda.declare(
                            Excerpt::ty(self.kind.primitive().boxed()),
                            "result",
                            excerpt!("mapper.{}({})", apply, &value),
                        )?;
                        lambda.line(excerpt!("if ({} != null) {", &result));
                        lambda
                            .indent()
                            .line(excerpt!("{}({});", setter(property), &result))
                            .dedent();
                        lambda.line("} else {");
                        lambda
                            .indent()
                            .line(excerpt!("{}();", clear_method(property)))
                            .dedent();
                        lambda.line("}");
                        lambda.into_fragments()
                    };
                    body.line(excerpt!("{}.ifPresent({} -> {", &field, &value));
                    body.indent().embed(lambda).dedent();
                    body.line("});");
                } else {
                    body.line(excerpt!(
                        "{}.ifPresent({} -> {}(mapper.{}({})));",
                        &field,
                        &value,
                        setter(property),
                        apply,
                        &value
                    ));
                }
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_clear(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        let wrapper = self.kind.wrapper();
        code.blank().javadoc([
            format!(
                "Sets the value to be returned by {} to {{@link {}#empty()",
                getter_link(&self.config),
                wrapper.simple_name()
            ),
            format!("{}.empty()}}.", wrapper.simple_name()),
            String::new(),
            returns_builder(&self.config),
        ]);
        code.method(
            excerpt!("public {} {}() {", &datatype.builder, clear_method(property)),
            &[],
            |body| {
                body.line(excerpt!(
                    "{} = {}.empty();",
                    body.field(&property.name),
                    &wrapper
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_getter(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        code.blank().javadoc([format!(
            "Returns the value that will be returned by {}.",
            getter_link(&self.config)
        )]);
        code.method(
            excerpt!("public {} {}() {", self.kind.wrapper(), getter(property)),
            &[],
            |body| {
                body.line(excerpt!("return {};", body.field(&property.name)));
                Ok(())
            },
        )
    }
}

impl PropertyCodeGenerator for PrimitiveOptionalProperty<'_> {
    fn property(&self) -> &Property {
        self.config.property
    }

    fn initially(&self) -> Initially {
        Initially::Optional
    }

    fn add_builder_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        let wrapper = self.kind.wrapper();
        code.line(excerpt!(
            "private {} {} = {}.empty();",
            &wrapper,
            &self.config.property.name,
            &wrapper
        ));
        Ok(())
    }

    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()> {
        self.add_setter(code)?;
        self.add_optional_setter(code)?;
        self.add_mapper(code)?;
        self.add_clear(code)?;
        self.add_getter(code)
    }

    fn add_value_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        code.line(excerpt!(
            "private final {} {};",
            self.kind.wrapper(),
            &self.config.property.name
        ));
        Ok(())
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
            "{}.{}().ifPresent(this::{});",
            value,
            &property.getter_name,
            setter(property)
        ));
        Ok(())
    }

    fn add_merge_from_builder(&self, code: &mut Block<'_>, builder: &Excerpt) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "{}.{}().ifPresent(this::{});",
            builder,
            getter(property),
            setter(property)
        ));
        Ok(())
    }

    fn add_clear_field(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        let field = code.field(&property.name);
        match declarations::fresh_builder(code, self.config.datatype)? {
            Some(defaults) => {
                code.line(excerpt!("{} = {}.{};", &field, &defaults, &property.name));
            }
            None => {
                code.line(excerpt!("{} = {}.empty();", &field, self.kind.wrapper()));
            }
        }
        Ok(())
    }

    fn to_string_condition(&self, field: &Excerpt) -> Option<Excerpt> {
        Some(excerpt!("{}.isPresent()", field))
    }

    fn to_string_value(&self, field: &Excerpt) -> Excerpt {
        excerpt!("{}.{}()", field, self.kind.accessor())
    }
}

#[cfg(test)]
mod tests {
    use freebake_codegen::{CodeBuilder, CodeFragment, Scope};
    use freebake_model::{BuilderFactory, Datatype, Options};

    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut code = CodeBuilder::java();
        code.emit(&fragments);
        code.build()
    }

    fn age(boxed_mapper: bool) -> Property {
        Property::new("age", "java.util.OptionalInt".parse().unwrap()).boxed_mapper(boxed_mapper)
    }

    fn accessors(property: &Property, fields: &[&str]) -> String {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let options = Options::default();
        let strategy = create(Config {
            datatype: &datatype,
            property,
            options: &options,
        })
        .expect("primitive optional applies");
        let scope = Scope::with_fields(fields.iter().copied());
        let mut class = Block::new(scope.child());
        strategy.add_builder_field_accessors(&mut class).unwrap();
        render(class.into_fragments())
    }

    #[test]
    fn test_kind_table() {
        let kinds: Vec<_> = OptionalKind::ALL
            .iter()
            .map(|kind| (kind.wrapper().to_string(), kind.primitive().keyword(), kind.accessor()))
            .collect();
        assert_eq!(
            kinds,
            [
                ("java.util.OptionalInt".to_string(), "int", "getAsInt"),
                ("java.util.OptionalLong".to_string(), "long", "getAsLong"),
                ("java.util.OptionalDouble".to_string(), "double", "getAsDouble"),
            ]
        );
    }

    #[test]
    fn test_setters() {
        let out = accessors(&age(false), &["age"]);
        assert!(out.contains(
            "public com.example.Person.Builder setAge(int age) {\n  \
             this.age = java.util.OptionalInt.of(age);\n  \
             return (com.example.Person.Builder) this;\n}\n"
        ));
        assert!(out.contains(
            "public com.example.Person.Builder setAge(java.util.OptionalInt age) {\n  \
             if (age.isPresent()) {\n    \
             return setAge(age.getAsInt());\n  \
             } else {\n    \
             return clearAge();\n  }\n}\n"
        ));
    }

    #[test]
    fn test_unboxed_mapper() {
        let out = accessors(&age(false), &["age"]);
        assert!(out.contains(
            "public com.example.Person.Builder mapAge(java.util.function.IntUnaryOperator mapper) {\n  \
             java.util.Objects.requireNonNull(mapper);\n  \
             age.ifPresent(value -> setAge(mapper.applyAsInt(value)));\n  \
             return (com.example.Person.Builder) this;\n}\n"
        ));
        assert!(!out.contains("If the result is null"));
    }

    #[test]
    fn test_boxed_mapper_branches_on_null() {
        let out = accessors(&age(true), &["age"]);
        assert!(out.contains(
            "public com.example.Person.Builder mapAge(\
             java.util.function.UnaryOperator<java.lang.Integer> mapper) {\n  \
             java.util.Objects.requireNonNull(mapper);\n  \
             age.ifPresent(value -> {\n    \
             java.lang.Integer result = mapper.apply(value);\n    \
             if (result != null) {\n      \
             setAge(result);\n    \
             } else {\n      \
             clearAge();\n    \
             }\n  \
             });\n  \
             return (com.example.Person.Builder) this;\n}\n"
        ));
        assert!(out.contains(" * <p>If the result is null, clears the value.\n"));
    }

    #[test]
    fn test_lambda_locals_avoid_fields() {
        let out = accessors(&age(true), &["age", "value", "result"]);
        assert!(out.contains("age.ifPresent(_value -> {"));
        assert!(out.contains("java.lang.Integer _result = mapper.apply(_value);"));
    }

    #[test]
    fn test_clear_field_prefers_defaults() {
        let options = Options::default();
        let property = age(false);
        let with_factory = Datatype::new(QualifiedName::of("com.example", "Person"));
        let without_factory = with_factory.clone().with_builder_factory(BuilderFactory::None);

        let clear = |datatype: &Datatype| {
            let strategy = create(Config {
                datatype,
                property: &property,
                options: &options,
            })
            .unwrap();
            let mut body = Block::root();
            strategy.add_clear_field(&mut body).unwrap();
            render(body.into_fragments())
        };

        assert_eq!(
            clear(&with_factory),
            "com.example.Person_Builder defaults = new com.example.Person.Builder();\n\
             age = defaults.age;\n"
        );
        assert_eq!(clear(&without_factory), "age = java.util.OptionalInt.empty();\n");
    }

    #[test]
    fn test_to_string_hooks() {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let options = Options::default();
        let property = age(false);
        let strategy = create(Config {
            datatype: &datatype,
            property: &property,
            options: &options,
        })
        .unwrap();
        let field = Excerpt::text("age");
        assert_eq!(
            strategy.to_string_condition(&field).unwrap().to_string(),
            "age.isPresent()"
        );
        assert_eq!(strategy.to_string_value(&field).to_string(), "age.getAsInt()");
    }
}
