//! `java.util.Map<K, V>` properties.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_core::TypeName;
use freebake_model::Property;

use super::{
    Config, Initially, PropertyCodeGenerator, clear_method, getter, getter_link, return_this,
    returns_builder,
};
use crate::java;

pub(super) fn create(config: Config<'_>) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    let type_name = &config.property.type_name;
    if !type_name.is_raw("java.util.Map") {
        return None;
    }
    let [key, value] = type_name.type_args() else {
        return None;
    };
    let strategy: Box<dyn PropertyCodeGenerator + '_> = Box::new(MapProperty {
        config,
        key: key.clone(),
        value: value.clone(),
    });
    Some(strategy)
}

/// An insertion-ordered map; keys and values may not be null.
struct MapProperty<'a> {
    config: Config<'a>,
    key: TypeName,
    value: TypeName,
}

impl MapProperty<'_> {
    fn add_put(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Associates {{@code key}} with {{@code value}} in the map to be returned from {}.",
                getter_link(&self.config)
            ),
            "If the map previously contained a mapping for the key, the old value is replaced."
                .to_string(),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if either {@code key} or {@code value} are null"
                .to_string(),
        ]);
        code.method(
            excerpt!(
                "public {} put{}({} key, {} value) {",
                &datatype.builder,
                &property.capitalized_name,
                &self.key,
                &self.value
            ),
            &["key", "value"],
            |body| {
                body.line(excerpt!("{}.requireNonNull(key);", java::objects()));
                body.line(excerpt!("{}.requireNonNull(value);", java::objects()));
                body.line(excerpt!("{}.put(key, value);", body.field(&property.name)));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_put_all(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Copies all of the mappings from {{@code map}} to the map to be returned from {}.",
                getter_link(&self.config)
            ),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code map} is null or contains a".to_string(),
            "    null key or value".to_string(),
        ]);
        let extends_key = excerpt!("? extends {}", &self.key);
        let extends_value = excerpt!("? extends {}", &self.value);
        let source = Excerpt::generic(java::map(), [extends_key.clone(), extends_value.clone()]);
        let entry = Excerpt::generic(java::map_entry(), [extends_key, extends_value]);
        code.method(
            excerpt!(
                "public {} putAll{}({} map) {",
                &datatype.builder,
                &property.capitalized_name,
                source
            ),
            &["map"],
            |body| {
                let item = body.variable("entry")?;
                body.line(excerpt!("for ({} {} : map.entrySet()) {", &entry, &item));
                body.indent()
                    .line(excerpt!(
                        "put{}({}.getKey(), {}.getValue());",
                        &property.capitalized_name,
                        &item,
                        &item
                    ))
                    .dedent();
                body.line("}");
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_remove(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Removes the mapping for {{@code key}} from the map to be returned from {},",
                getter_link(&self.config)
            ),
            "if one is present.".to_string(),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code key} is null".to_string(),
        ]);
        code.method(
            excerpt!(
                "public {} remove{}({} key) {",
                &datatype.builder,
                &property.capitalized_name,
                &self.key
            ),
            &["key"],
            |body| {
                body.line(excerpt!(
                    "{}.remove({}.requireNonNull(key));",
                    body.field(&property.name),
                    java::objects()
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_mutate(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Applies {{@code mutator}} to the map to be returned from {}.",
                getter_link(&self.config)
            ),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code mutator} is null".to_string(),
        ]);
        let consumer = Excerpt::generic(
            java::consumer(),
            [excerpt!("? super {}", &property.type_name)],
        );
        code.method(
            excerpt!(
                "public {} mutate{}({} mutator) {",
                &datatype.builder,
                &property.capitalized_name,
                consumer
            ),
            &["mutator"],
            |body| {
                body.line(excerpt!("mutator.accept({});", body.field(&property.name)));
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
            format!(
                "Removes all of the mappings from the map to be returned from {}.",
                getter_link(&self.config)
            ),
            String::new(),
            returns_builder(&self.config),
        ]);
        code.method(
            excerpt!("public {} {}() {", &datatype.builder, clear_method(property)),
            &[],
            |body| {
                body.line(excerpt!("{}.clear();", body.field(&property.name)));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_getter(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        code.blank().javadoc([format!(
            "Returns an unmodifiable view of the map that will be returned by {}.",
            getter_link(&self.config)
        )]);
        code.method(
            excerpt!("public {} {}() {", &property.type_name, getter(property)),
            &[],
            |body| {
                body.line(excerpt!(
                    "return {}.unmodifiableMap({});",
                    java::collections(),
                    body.field(&property.name)
                ));
                Ok(())
            },
        )
    }
}

impl PropertyCodeGenerator for MapProperty<'_> {
    fn property(&self) -> &Property {
        self.config.property
    }

    fn initially(&self) -> Initially {
        Initially::Optional
    }

    fn add_builder_field_declaration(&self, code: &mut Block<'_>) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "private final {} {} = new {}<>();",
            &property.type_name,
            &property.name,
            java::linked_hash_map()
        ));
        Ok(())
    }

    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()> {
        self.add_put(code)?;
        self.add_put_all(code)?;
        self.add_remove(code)?;
        self.add_mutate(code)?;
        self.add_clear(code)?;
        self.add_getter(code)
    }

    fn add_final_field_assignment(
        &self,
        code: &mut Block<'_>,
        final_field: &Excerpt,
        builder: &Excerpt,
    ) -> Result<()> {
        code.line(excerpt!(
            "{} = {}.unmodifiableMap(new {}<>({}.{}));",
            final_field,
            java::collections(),
            java::linked_hash_map(),
            builder,
            &self.config.property.name
        ));
        Ok(())
    }

    fn add_merge_from_value(&self, code: &mut Block<'_>, value: &Excerpt) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "putAll{}({}.{}());",
            &property.capitalized_name,
            value,
            &property.getter_name
        ));
        Ok(())
    }

    fn add_merge_from_builder(&self, code: &mut Block<'_>, builder: &Excerpt) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "putAll{}({}.{}());",
            &property.capitalized_name,
            builder,
            getter(property)
        ));
        Ok(())
    }

    fn add_clear_field(&self, code: &mut Block<'_>) -> Result<()> {
        code.line(excerpt!(
            "{}.clear();",
            code.field(&self.config.property.name)
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use freebake_codegen::{CodeBuilder, Scope};
    use freebake_core::QualifiedName;
    use freebake_model::{Datatype, Options};

    use super::*;

    fn accessors(name: &str, type_name: &str) -> Option<String> {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let property = Property::new(name, type_name.parse().unwrap());
        let options = Options::default();
        let strategy = create(Config {
            datatype: &datatype,
            property: &property,
            options: &options,
        })?;
        let fields = Scope::with_fields([name]);
        let mut class = Block::new(fields.child());
        strategy.add_builder_field_accessors(&mut class).unwrap();
        let mut code = CodeBuilder::java();
        code.emit(&class.into_fragments());
        Some(code.build())
    }

    #[test]
    fn test_requires_key_and_value() {
        assert!(accessors("scores", "java.util.Map").is_none());
        assert!(accessors("scores", "java.util.Map<java.lang.String>").is_none());
    }

    #[test]
    fn test_put_checks_both_arguments_first() {
        let out = accessors("scores", "java.util.Map<java.lang.String, java.lang.Integer>").unwrap();
        assert!(out.contains(
            "putScores(java.lang.String key, java.lang.Integer value) {\n  \
             java.util.Objects.requireNonNull(key);\n  \
             java.util.Objects.requireNonNull(value);\n  \
             scores.put(key, value);\n"
        ));
        assert!(out.contains(
            "  for (java.util.Map.Entry<? extends java.lang.String, ? extends java.lang.Integer> entry : map.entrySet()) {\n    \
             putScores(entry.getKey(), entry.getValue());\n  }\n"
        ));
        assert!(out.contains("  return java.util.Collections.unmodifiableMap(scores);\n"));
    }

    #[test]
    fn test_field_named_like_parameter() {
        let out = accessors("value", "java.util.Map<java.lang.String, java.lang.String>").unwrap();
        assert!(out.contains("  this.value.put(key, value);\n"));
    }
}
