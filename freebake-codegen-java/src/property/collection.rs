//! `java.util.List<E>` and `java.util.Set<E>` properties.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_core::{QualifiedName, TypeName};
use freebake_model::Property;

use super::{
    Config, Initially, PropertyCodeGenerator, clear_method, getter, getter_link, return_this,
    returns_builder,
};
use crate::java;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectionKind {
    List,
    Set,
}

impl CollectionKind {
    fn interface(&self) -> QualifiedName {
        match self {
            Self::List => java::list(),
            Self::Set => java::set(),
        }
    }

    fn implementation(&self) -> QualifiedName {
        match self {
            Self::List => java::array_list(),
            Self::Set => java::linked_hash_set(),
        }
    }

    /// `Collections.unmodifiableList` or `unmodifiableSet`.
    fn unmodifiable(&self) -> &'static str {
        match self {
            Self::List => "unmodifiableList",
            Self::Set => "unmodifiableSet",
        }
    }

    /// Word used in javadoc.
    fn noun(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Set => "set",
        }
    }
}

pub(super) fn create_list(config: Config<'_>) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    create(config, CollectionKind::List)
}

pub(super) fn create_set(config: Config<'_>) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    create(config, CollectionKind::Set)
}

fn create(config: Config<'_>, kind: CollectionKind) -> Option<Box<dyn PropertyCodeGenerator + '_>> {
    let type_name = &config.property.type_name;
    if type_name.qualified_name() != Some(&kind.interface()) {
        return None;
    }
    let [element] = type_name.type_args() else {
        return None;
    };
    let strategy: Box<dyn PropertyCodeGenerator + '_> = Box::new(CollectionProperty {
        config,
        kind,
        element: element.clone(),
    });
    Some(strategy)
}

/// A collection held in a mutable builder field and copied into an
/// unmodifiable collection on build.
struct CollectionProperty<'a> {
    config: Config<'a>,
    kind: CollectionKind,
    element: TypeName,
}

impl CollectionProperty<'_> {
    /// `Iterable<? extends E>` and similar.
    fn wildcard(&self, container: QualifiedName) -> Excerpt {
        Excerpt::generic(container, [excerpt!("? extends {}", &self.element)])
    }

    fn add_single(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Adds {{@code element}} to the {} to be returned from {}.",
                self.kind.noun(),
                getter_link(&self.config)
            ),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code element} is null".to_string(),
        ]);
        code.method(
            excerpt!(
                "public {} add{}({} element) {",
                &datatype.builder,
                &property.capitalized_name,
                &self.element
            ),
            &["element"],
            |body| {
                body.line(excerpt!(
                    "{}.add({}.requireNonNull(element));",
                    body.field(&property.name),
                    java::objects()
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_varargs(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        code.blank().javadoc([
            format!(
                "Adds each element of {{@code elements}} to the {} to be returned from",
                self.kind.noun()
            ),
            format!("{}.", getter_link(&self.config)),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code elements} is null or contains a".to_string(),
            "    null element".to_string(),
        ]);
        code.method(
            excerpt!(
                "public {} add{}({}... elements) {",
                &datatype.builder,
                &property.capitalized_name,
                &self.element
            ),
            &["elements"],
            |body| {
                let element = body.variable("element")?;
                body.line(excerpt!(
                    "for ({} {} : elements) {",
                    &self.element,
                    &element
                ));
                body.indent()
                    .line(excerpt!("add{}({});", &property.capitalized_name, &element))
                    .dedent();
                body.line("}");
                body.line(return_this(&self.config));
                Ok(())
            },
        )
    }

    fn add_all(&self, code: &mut Block<'_>) -> Result<()> {
        let Config {
            datatype, property, ..
        } = self.config;
        let add_all = format!("addAll{}", property.capitalized_name);
        let adds_each = |code: &mut Block<'_>| {
            code.blank().javadoc([
                format!(
                    "Adds each element of {{@code elements}} to the {} to be returned from",
                    self.kind.noun()
                ),
                format!("{}.", getter_link(&self.config)),
                String::new(),
                returns_builder(&self.config),
                "@throws NullPointerException if {@code elements} is null or contains a"
                    .to_string(),
                "    null element".to_string(),
            ]);
        };

        adds_each(code);
        code.method(
            excerpt!(
                "public {} {}({} elements) {",
                &datatype.builder,
                &add_all,
                self.wildcard(java::spliterator())
            ),
            &["elements"],
            |body| {
                body.line(excerpt!(
                    "elements.forEachRemaining(this::add{});",
                    &property.capitalized_name
                ));
                body.line(return_this(&self.config));
                Ok(())
            },
        )?;

        adds_each(code);
        let stream = Excerpt::generic(
            java::base_stream(),
            [excerpt!("? extends {}", &self.element), Excerpt::text("?")],
        );
        code.method(
            excerpt!(
                "public {} {}({} elements) {",
                &datatype.builder,
                &add_all,
                stream
            ),
            &["elements"],
            |body| {
                body.line(excerpt!("return {}(elements.spliterator());", &add_all));
                Ok(())
            },
        )?;

        adds_each(code);
        code.method(
            excerpt!(
                "public {} {}({} elements) {",
                &datatype.builder,
                &add_all,
                self.wildcard(java::iterable())
            ),
            &["elements"],
            |body| {
                body.line(excerpt!(
                    "elements.forEach(this::add{});",
                    &property.capitalized_name
                ));
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
                "Removes {{@code element}} from the set to be returned from {}.",
                getter_link(&self.config)
            ),
            "Does nothing if {@code element} is not present.".to_string(),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code element} is null".to_string(),
        ]);
        code.method(
            excerpt!(
                "public {} remove{}({} element) {",
                &datatype.builder,
                &property.capitalized_name,
                &self.element
            ),
            &["element"],
            |body| {
                body.line(excerpt!(
                    "{}.remove({}.requireNonNull(element));",
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
                "Applies {{@code mutator}} to the {} to be returned from {}.",
                self.kind.noun(),
                getter_link(&self.config)
            ),
            String::new(),
            returns_builder(&self.config),
            "@throws NullPointerException if {@code mutator} is null".to_string(),
        ]);
        let consumer = Excerpt::generic(
            java::consumer(),
            [excerpt!("? super {}", Excerpt::from(&property.type_name))],
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
                "Clears the {} to be returned from {}.",
                self.kind.noun(),
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
            "Returns an unmodifiable view of the {} that will be returned by {}.",
            self.kind.noun(),
            getter_link(&self.config)
        )]);
        code.method(
            excerpt!("public {} {}() {", &property.type_name, getter(property)),
            &[],
            |body| {
                body.line(excerpt!(
                    "return {}.{}({});",
                    java::collections(),
                    self.kind.unmodifiable(),
                    body.field(&property.name)
                ));
                Ok(())
            },
        )
    }
}

impl PropertyCodeGenerator for CollectionProperty<'_> {
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
            self.kind.implementation()
        ));
        Ok(())
    }

    fn add_builder_field_accessors(&self, code: &mut Block<'_>) -> Result<()> {
        self.add_single(code)?;
        self.add_varargs(code)?;
        self.add_all(code)?;
        if self.kind == CollectionKind::Set {
            self.add_remove(code)?;
        }
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
            "{} = {}.{}(new {}<>({}.{}));",
            final_field,
            java::collections(),
            self.kind.unmodifiable(),
            self.kind.implementation(),
            builder,
            &self.config.property.name
        ));
        Ok(())
    }

    fn add_merge_from_value(&self, code: &mut Block<'_>, value: &Excerpt) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "addAll{}({}.{}());",
            &property.capitalized_name,
            value,
            &property.getter_name
        ));
        Ok(())
    }

    fn add_merge_from_builder(&self, code: &mut Block<'_>, builder: &Excerpt) -> Result<()> {
        let property = self.config.property;
        code.line(excerpt!(
            "addAll{}({}.{}());",
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
    use freebake_model::{Datatype, Options};

    use super::*;

    fn generate(type_name: &str, f: impl FnOnce(&dyn PropertyCodeGenerator, &mut Block<'_>)) -> String {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let property = Property::new("tags", type_name.parse().unwrap());
        let options = Options::default();
        let config = Config {
            datatype: &datatype,
            property: &property,
            options: &options,
        };
        let strategy = create_list(config)
            .or_else(|| create_set(config))
            .expect("collection applies");
        let fields = Scope::with_fields(["tags"]);
        let mut class = Block::new(fields.child());
        f(strategy.as_ref(), &mut class);
        let mut code = CodeBuilder::java();
        code.emit(&class.into_fragments());
        code.build()
    }

    #[test]
    fn test_list_surface() {
        let out = generate("java.util.List<java.lang.String>", |strategy, class| {
            strategy.add_builder_field_declaration(class).unwrap();
            strategy.add_builder_field_accessors(class).unwrap();
        });
        assert!(out.starts_with(
            "private final java.util.List<java.lang.String> tags = new java.util.ArrayList<>();\n"
        ));
        assert!(out.contains("addTags(java.lang.String element) {"));
        assert!(out.contains("addTags(java.lang.String... elements) {"));
        assert!(out.contains("addAllTags(java.util.Spliterator<? extends java.lang.String> elements) {"));
        assert!(out.contains(
            "addAllTags(java.util.stream.BaseStream<? extends java.lang.String, ?> elements) {\n  \
             return addAllTags(elements.spliterator());\n}\n"
        ));
        assert!(out.contains("addAllTags(java.lang.Iterable<? extends java.lang.String> elements) {"));
        assert!(out.contains(
            "mutateTags(java.util.function.Consumer<? super java.util.List<java.lang.String>> mutator) {"
        ));
        assert!(out.contains("  return java.util.Collections.unmodifiableList(tags);\n"));
        assert!(!out.contains("removeTags"));
    }

    #[test]
    fn test_varargs_loop_variable_is_hygienic() {
        let datatype = Datatype::new(QualifiedName::of("com.example", "Person"));
        let property = Property::new("element", "java.util.List<java.lang.String>".parse().unwrap());
        let options = Options::default();
        let strategy = create_list(Config {
            datatype: &datatype,
            property: &property,
            options: &options,
        })
        .unwrap();
        let fields = Scope::with_fields(["element"]);
        let mut class = Block::new(fields.child());
        strategy.add_builder_field_accessors(&mut class).unwrap();
        let mut code = CodeBuilder::java();
        code.emit(&class.into_fragments());
        let out = code.build();
        assert!(out.contains("  for (java.lang.String _element : elements) {\n    addElement(_element);\n  }\n"));
        // The single-element adder takes a parameter that shadows the field.
        assert!(out.contains("  this.element.add(java.util.Objects.requireNonNull(element));\n"));
    }

    #[test]
    fn test_set_has_remove_and_copies_on_build() {
        let out = generate("java.util.Set<java.lang.Integer>", |strategy, class| {
            strategy.add_builder_field_accessors(class).unwrap();
            strategy
                .add_final_field_assignment(class, &Excerpt::text("tags"), &Excerpt::text("builder"))
                .unwrap();
        });
        assert!(out.contains("removeTags(java.lang.Integer element) {"));
        assert!(out.contains(
            "tags = java.util.Collections.unmodifiableSet(new java.util.LinkedHashSet<>(builder.tags));\n"
        ));
    }
}
