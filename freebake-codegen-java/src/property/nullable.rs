//! Reference properties annotated nullable.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_model::Property;

use super::{
    Config, Initially, PropertyCodeGenerator, clear_method, getter, getter_link, if_block,
    mapper, nullable_annotation, return_this, returns_builder, setter,
};
use crate::{declarations, java};

pub(super) fn create(config: Config<'_>) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    let property = config.property;
    if !property.nullable || property.type_name.is_primitive() {
        return None;
    }
    let strategy: Box<dyn PropertyCodeGenerator + '_> = Box::new(NullableProperty { config });
    Some(strategy)
}

/// A property that may hold `null`; starts out null and never fails `build()`.
struct NullableProperty<'a> {
    config: Config<'a>,
}

impl NullableProperty<'_> {
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
                "public {} {}({} {} {}) {",
                &datatype.builder,
                setter(property),
                nullable_annotation(&self.config),
                &property.type_name,
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                body.line(excerpt!(
                    "{} = {};",
                    body.field(&property.name),
                    &property.name
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_mapper(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!("If the value to be returned by {} is not", getter_link(&self.config)),
            "null, replaces it by applying {@code mapper} to it and using the result."
                .to_string(),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code mapper} is null".to_string(),
        ]);
        let mapper_type =
            Excerpt::generic(java::unary_operator(), [Excerpt::from(&property.type_name)]);
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
                let value = body.variable(&property.name)?;
                body.line(excerpt!(
                    "{} {} = {}();",
                    &property.type_name,
                    &value,
                    getter(property)
                ));
                if_block(body, excerpt!("{} != null", &value), |then| {
                    then.line(excerpt!("{}(mapper.apply({}));", setter(property), &value));
                });
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_clear(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!("Sets the value to be returned by {} to null.", getter_link(&self.config)),
            String::new(),
            returns_builder(&self.config),
        ]);
        code.method(
            excerpt!("public {} {}() {", &datatype.builder, clear_method(property)),
            &[],
            |body| {
                body.line(excerpt!("{} = null;", body.field(&property.name)));
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
        self.add_getter_annotations(code)?;
        code.method(
            excerpt!("public {} {}() {", &property.type_name, getter(property)),
            &[],
            |body| {
                body.line(excerpt!("return {};", body.field(&property.name)));
                Ok(())
            },
        )
    }

    /// `T _p = source.getP(); if (_p != null) { setP(_p); }`
    fn add_merge(&self, code: &mut Block<'_>, read: Excerpt) -> Result<()> {
        let property = self.config.property;
        let value = code.declare(&property.type_name, &property.name, read)?;
        if_block(code, excerpt!("{} != null", &value), |then| {
            then.line(excerpt!("{}({});", setter(property), &value));
        });
        Ok(())
    }
}

impl PropertyCodeGenerator for NullableProperty<'_> {
    fn property(&self) -> &Property {
        self.config.property
    }

    fn initially(&self) -> Initially {
        Initially::Optional
    }

    fn add_builder_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "{} private {} {} = null;",
            nullable_annotation(&self.config),
            &property.type_name,
            &property.name
        ));
        Ok(())
    }

    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()> {
        self.add_setter(code)?;
        self.add_mapper(code)?;
        self.add_clear(code)?;
        self.add_getter(code)
    }

    fn add_value_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "{} private final {} {};",
            nullable_annotation(&self.config),
            &property.type_name,
            &property.name
        ));
        Ok(())
    }

    fn add_getter_annotations(&self, code: &mut Block<'_>) -> Result<()> {
        code.line(nullable_annotation(&self.config));
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
        let read = excerpt!("{}.{}()", value, &self.config.property.getter_name);
        self.add_merge(code, read)
    }

    fn add_merge_from_builder(&self, code: &mut Block<'_>, builder: &Excerpt) -> Result<()> {
        let read = excerpt!("{}.{}()", builder, getter(self.config.property));
        self.add_merge(code, read)
    }

    fn add_clear_field(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        let field = code.field(&property.name);
        match declarations::fresh_builder(code, self.config.datatype)? {
            Some(defaults) => {
                code.line(excerpt!("{} = {}.{};", &field, &defaults, &property.name));
            }
            None => {
                code.line(excerpt!("{} = null;", &field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use freebake_codegen::{CodeBuilder, CodeFragment, Scope};
    use freebake_core::QualifiedName;
    use freebake_model::{Datatype, Options};

    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut code = CodeBuilder::java();
        code.emit(&fragments);
        code.build()
    }

    fn with_strategy<R>(f: impl FnOnce(&dyn PropertyCodeGenerator) -> R) -> R {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let property = Property::new("nickname", "java.lang.String".parse().unwrap()).nullable(true);
        let options = Options::default();
        let config = Config {
            datatype: &datatype,
            property: &property,
            options: &options,
        };
        let strategy = create(config).expect("nullable applies");
        f(strategy.as_ref())
    }

    #[test]
    fn test_declines_non_nullable() {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let property = Property::new("nickname", "java.lang.String".parse().unwrap());
        let options = Options::default();
        assert!(
            create(Config {
                datatype: &datatype,
                property: &property,
                options: &options,
            })
            .is_none()
        );
    }

    #[test]
    fn test_mapper_skips_null() {
        let out = with_strategy(|strategy| {
            let fields = Scope::with_fields(["nickname"]);
            let mut class = Block::new(fields.child());
            strategy.add_builder_field_accessors(&mut class).unwrap();
            render(class.into_fragments())
        });
        assert!(out.contains(
            "  java.util.Objects.requireNonNull(mapper);\n  \
             java.lang.String _nickname = getNickname();\n  \
             if (_nickname != null) {\n    \
             setNickname(mapper.apply(_nickname));\n  }\n"
        ));
        assert!(out.contains(
            "setNickname(@javax.annotation.Nullable java.lang.String nickname) {"
        ));
        assert!(out.contains("@javax.annotation.Nullable\npublic java.lang.String getNickname() {"));
    }

    #[test]
    fn test_merge_only_sets_present_values() {
        let out = with_strategy(|strategy| {
            let fields = Scope::with_fields(["nickname"]);
            let class = Block::new(fields.child());
            let mut body = class.method_body(&["value"]).unwrap();
            strategy
                .add_merge_from_value(&mut body, &Excerpt::text("value"))
                .unwrap();
            render(body.into_fragments())
        });
        assert_eq!(
            out,
            "java.lang.String _nickname = value.getNickname();\n\
             if (_nickname != null) {\n  setNickname(_nickname);\n}\n"
        );
    }
}
