//! `java.util.Optional<T>` properties, stored as a nullable `T`.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_core::TypeName;
use freebake_model::Property;

use super::{
    Config, Initially, PropertyCodeGenerator, clear_method, getter, getter_link, mapper,
    nullable_annotation, return_this, returns_builder, setter,
};
use crate::{declarations, java};

pub(super) fn create(config: Config<'_>) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    let type_name = &config.property.type_name;
    if !type_name.is_raw("java.util.Optional") {
        return None;
    }
    let [element] = type_name.type_args() else {
        return None;
    };
    let strategy: Box<dyn PropertyCodeGenerator + '_> = Box::new(OptionalProperty {
        config,
        element: element.clone(),
    });
    Some(strategy)
}

struct OptionalProperty<'a> {
    config: Config<'a>,
    element: TypeName,
}

impl OptionalProperty<'_> {
    fn add_setter(&self, code: &mut Block<'_>) -> Result<()> {
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
                &self.element,
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                body.line(excerpt!(
                    "{} = {}.requireNonNull({});",
                    body.field(&property.name),
                    java::objects(),
                    &property.name
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    /// `setP(Optional<? extends T>)`: present delegates to `setP`, empty to `clearP`.
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
        let wildcard = Excerpt::generic(
            java::optional(),
            [excerpt!("? extends {}", &self.element)],
        );
        code.method(
            excerpt!(
                "public {} {}({} {}) {",
                &datatype.builder,
                setter(property),
                wildcard,
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                body.line(excerpt!("if ({}.isPresent()) {", &property.name));
                body.indent()
                    .line(excerpt!("return {}({}.get());", setter(property), &property.name))
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

    fn add_nullable_setter(&self, code: &mut Block<'_>) -> Result<()> {
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
                "public {} setNullable{}({} {} {}) {",
                &datatype.builder,
                &property.capitalized_name,
                nullable_annotation(&self.config),
                &self.element,
                &property.name
            ),
            &[property.name.as_str()],
            |body| {
                body.line(excerpt!("if ({} != null) {", &property.name));
                body.indent()
                    .line(excerpt!("return {}({});", setter(property), &property.name))
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
        code.blank().javadoc([
            format!("If the value to be returned by {} is present,", getter_link(&self.config)),
            "replaces it by applying {@code mapper} to it and using the result.".to_string(),
            String::new(),
            "<p>If the result is null, clears the value.".to_string(),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code mapper} is null".to_string(),
        ]);
        let mapper_type = Excerpt::generic(java::unary_operator(), [Excerpt::from(&self.element)]);
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
                    "return {}({}().map(mapper));",
                    setter(property),
                    getter(property)
                ));
                Ok(())
            },
        )
    }

    fn add_clear(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Sets the value to be returned by {} to {{@link Optional#empty()",
                getter_link(&self.config)
            ),
            "Optional.empty()}.".to_string(),
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
        code.method(
            excerpt!("public {} {}() {", &property.type_name, getter(property)),
            &[],
            |body| {
                body.line(excerpt!(
                    "return {}.ofNullable({});",
                    java::optional(),
                    body.field(&property.name)
                ));
                Ok(())
            },
        )
    }
}

impl PropertyCodeGenerator for OptionalProperty<'_> {
    fn property(&self) -> &Property {
        self.config.property
    }

    fn initially(&self) -> Initially {
        Initially::Optional
    }

    fn add_builder_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        code.line(excerpt!(
            "private {} {} = null;",
            &self.element,
            &self.config.property.name
        ));
        Ok(())
    }

    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()> {
        self.add_setter(code)?;
        self.add_optional_setter(code)?;
        self.add_nullable_setter(code)?;
        self.add_mapper(code)?;
        self.add_clear(code)?;
        self.add_getter(code)
    }

    fn add_value_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        code.line(excerpt!(
            "private final {} {};",
            &self.element,
            &self.config.property.name
        ));
        Ok(())
    }

    fn add_value_getter(&self, code: &mut Block<'_>, field: &Excerpt) -> Result<()> {
        code.line(excerpt!("return {}.ofNullable({});", java::optional(), field));
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
                code.line(excerpt!("{} = null;", &field));
            }
        }
        Ok(())
    }

    fn to_string_condition(&self, field: &Excerpt) -> Option<Excerpt> {
        Some(excerpt!("{} != null", field))
    }
}
