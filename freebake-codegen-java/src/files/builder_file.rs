use std::path::{Path, PathBuf};

use freebake_codegen::{
    Block, CodeBuilder, CodeFragment, Excerpt, Identifier, Indent, Result, Scope, excerpt,
};
use freebake_core::{FileRules, GENERATED_HEADER, GeneratedFile, PrimitiveType, QualifiedName, TypeName};
use freebake_model::{Datatype, Options, Property, TypeDefinition};
use tracing::debug;

use crate::{
    ImportManager, declarations, java,
    property::{self, Config, Initially, PropertyCodeGenerator, if_block},
};

/// Field on the builder (and partial) tracking required properties not yet set.
const UNSET_PROPERTIES: &str = "_unsetProperties";

/// The `<Type>_Builder.java` file for one value type.
///
/// The class body is emitted when the file is created, since emission can
/// fail; rendering only shortens types through the import table.
pub struct BuilderFile {
    generated_builder: QualifiedName,
    indent: Indent,
    imports: ImportManager,
    fragments: Vec<CodeFragment>,
}

impl BuilderFile {
    pub fn new(definition: &TypeDefinition, options: &Options) -> Result<Self> {
        let datatype = &definition.datatype;
        let fragments = BuilderSource::new(definition, options).fragments()?;
        let imports = ImportManager::for_fragments(
            datatype.generated_builder.package(),
            reserved_names(datatype),
            &fragments,
        );
        debug!(
            datatype = %datatype.type_name,
            properties = definition.properties.len(),
            "generated builder file"
        );
        Ok(Self {
            generated_builder: datatype.generated_builder.clone(),
            indent: Indent::from_width(options.indent),
            imports,
            fragments,
        })
    }

    /// `com/example/Person_Builder.java`
    pub fn relative_path(&self) -> String {
        let mut segments: Vec<&str> = self
            .generated_builder
            .package()
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        let file_name = format!("{}.java", self.generated_builder.simple_name());
        segments.push(&file_name);
        segments.join("/")
    }
}

impl GeneratedFile for BuilderFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let mut code = CodeBuilder::new(self.indent).with_types(&self.imports);
        code.push_line(GENERATED_HEADER);
        let package = self.generated_builder.package();
        if !package.is_empty() {
            code.push_line(&format!("package {};", package));
        }
        code.push_blank();

        let imports = self.imports.import_lines();
        for import in &imports {
            code.push_line(import);
        }
        if !imports.is_empty() {
            code.push_blank();
        }

        code.emit(&self.fragments);
        code.build()
    }
}

/// Simple names that must never be imported into the generated file:
/// its nested classes, the user's builder (inherited by `Value`), and the
/// annotations written as plain text.
fn reserved_names(datatype: &Datatype) -> Vec<String> {
    [
        &datatype.value_type,
        &datatype.partial_type,
        &datatype.property_enum,
        &datatype.builder,
    ]
    .into_iter()
    .map(|name| name.simple_name().to_string())
    .chain(std::iter::once("Override".to_string()))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Implementation {
    Value,
    Partial,
}

impl Implementation {
    fn name(self, datatype: &Datatype) -> &QualifiedName {
        match self {
            Self::Value => &datatype.value_type,
            Self::Partial => &datatype.partial_type,
        }
    }
}

/// One strategy per property, plus the class-level members built around them.
struct BuilderSource<'a> {
    datatype: &'a Datatype,
    strategies: Vec<Box<dyn PropertyCodeGenerator + 'a>>,
}

impl<'a> BuilderSource<'a> {
    fn new(definition: &'a TypeDefinition, options: &'a Options) -> Self {
        let datatype = &definition.datatype;
        let strategies = definition
            .properties
            .iter()
            .map(|property| {
                property::select(Config {
                    datatype,
                    property,
                    options,
                })
                .1
            })
            .collect();
        Self {
            datatype,
            strategies,
        }
    }

    fn has_required(&self) -> bool {
        self.strategies
            .iter()
            .any(|strategy| strategy.initially() == Initially::Required)
    }

    fn is_required(strategy: &dyn PropertyCodeGenerator) -> bool {
        strategy.initially() == Initially::Required
    }

    fn unset_constant(&self, property: &Property) -> Excerpt {
        excerpt!(
            "{}.{}",
            &self.datatype.property_enum,
            &property.all_caps_name
        )
    }

    fn unset_set_type(&self) -> Excerpt {
        Excerpt::generic(
            java::enum_set(),
            [Excerpt::from(&self.datatype.property_enum)],
        )
    }

    fn return_this(&self) -> Excerpt {
        excerpt!("return ({}) this;", &self.datatype.builder)
    }

    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        let datatype = self.datatype;
        let mut fields: Vec<&str> = self
            .strategies
            .iter()
            .map(|strategy| strategy.property().name.as_str())
            .collect();
        fields.push(UNSET_PROPERTIES);
        let scope = Scope::with_fields(fields);
        let mut class = Block::new(scope.child());

        if datatype.has_builder_factory() {
            self.add_from(&mut class)?;
        }
        if self.has_required() {
            self.add_property_enum(&mut class);
        }
        self.add_builder_fields(&mut class)?;
        for strategy in &self.strategies {
            strategy.add_builder_field_accessors(&mut class)?;
        }
        self.add_merge_from_value(&mut class)?;
        self.add_merge_from_builder(&mut class)?;
        self.add_clear(&mut class)?;
        self.add_build(&mut class)?;
        self.add_build_partial(&mut class)?;
        self.add_implementation(&mut class, Implementation::Value)?;
        self.add_implementation(&mut class, Implementation::Partial)?;

        Ok(vec![
            CodeFragment::javadoc([
                format!(
                    "Auto-generated superclass of {{@link {}}},",
                    datatype.builder.local_name()
                ),
                format!(
                    "derived from the API of {{@link {}}}.",
                    datatype.type_name.local_name()
                ),
            ]),
            CodeFragment::block(
                excerpt!("abstract class {} {", &datatype.generated_builder),
                trim_leading_blank(class.into_fragments()),
            ),
        ])
    }

    fn add_from(&self, class: &mut Block<'_>) -> Result<()> {
        let datatype = self.datatype;
        class.blank().javadoc([
            "Creates a new builder using {@code value} as a template.".to_string(),
        ]);
        class.method(
            excerpt!(
                "public static {} from({} value) {",
                &datatype.builder,
                &datatype.type_name
            ),
            &["value"],
            |body| {
                body.line(excerpt!("return new {}().mergeFrom(value);", &datatype.builder));
                Ok(())
            },
        )
    }

    fn add_property_enum(&self, class: &mut Block<'_>) {
        let string = java::string();
        class
            .blank()
            .line(format!(
                "private enum {} {{",
                self.datatype.property_enum.simple_name()
            ))
            .indent();
        for strategy in &self.strategies {
            if Self::is_required(strategy.as_ref()) {
                let property = strategy.property();
                class.line(format!("{}(\"{}\"),", property.all_caps_name, property.name));
            }
        }
        class
            .line(";")
            .blank()
            .line(excerpt!("private final {} name;", &string))
            .blank()
            .line(excerpt!(
                "private {}({} name) {",
                self.datatype.property_enum.simple_name(),
                &string
            ))
            .indent()
            .line("this.name = name;")
            .dedent()
            .line("}")
            .blank()
            .line("@Override")
            .line(excerpt!("public {} toString() {", &string))
            .indent()
            .line("return name;")
            .dedent()
            .line("}")
            .dedent()
            .line("}");
    }

    fn add_builder_fields(&self, class: &mut Block<'_>) -> Result<()> {
        let required = self.has_required();
        if self.strategies.is_empty() {
            return Ok(());
        }
        class.blank();
        for strategy in &self.strategies {
            strategy.add_builder_field_declaration(class)?;
        }
        if required {
            class.line(excerpt!(
                "private final {} {} = {}.allOf({}.class);",
                self.unset_set_type(),
                UNSET_PROPERTIES,
                java::enum_set(),
                &self.datatype.property_enum
            ));
        }
        Ok(())
    }

    fn add_merge_from_value(&self, class: &mut Block<'_>) -> Result<()> {
        let datatype = self.datatype;
        class.blank().javadoc([
            "Sets all property values using the given {@code value} as a template.".to_string(),
            String::new(),
            format!(
                "@return this {{@code {}}} object",
                datatype.builder.simple_name()
            ),
        ]);
        class.method(
            excerpt!(
                "public {} mergeFrom({} value) {",
                &datatype.builder,
                &datatype.type_name
            ),
            &["value"],
            |body| {
                let value = Excerpt::text("value");
                for strategy in &self.strategies {
                    strategy.add_merge_from_value(body, &value)?;
                }
                body.line(self.return_this());
                Ok(())
            },
        )
    }

    fn add_merge_from_builder(&self, class: &mut Block<'_>) -> Result<()> {
        let datatype = self.datatype;
        class.blank().javadoc([
            "Copies values from the given {@code template} builder. Only properties set".to_string(),
            "on the template are copied.".to_string(),
            String::new(),
            format!(
                "@return this {{@code {}}} object",
                datatype.builder.simple_name()
            ),
        ]);
        class.method(
            excerpt!(
                "public {} mergeFrom({} template) {",
                &datatype.builder,
                &datatype.builder
            ),
            &["template"],
            |body| {
                let template = Excerpt::text("template");
                for strategy in &self.strategies {
                    strategy.add_merge_from_builder(body, &template)?;
                }
                body.line(self.return_this());
                Ok(())
            },
        )
    }

    fn add_clear(&self, class: &mut Block<'_>) -> Result<()> {
        let datatype = self.datatype;
        class.blank().javadoc([
            "Resets the state of this builder.".to_string(),
            String::new(),
            format!(
                "@return this {{@code {}}} object",
                datatype.builder.simple_name()
            ),
        ]);
        class.method(
            excerpt!("public {} clear() {", &datatype.builder),
            &[],
            |body| {
                for strategy in &self.strategies {
                    strategy.add_clear_field(body)?;
                }
                if self.has_required() {
                    let unset = body.field(UNSET_PROPERTIES);
                    body.line(excerpt!("{}.clear();", &unset));
                    match declarations::fresh_builder(body, datatype)? {
                        Some(defaults) => {
                            body.line(excerpt!(
                                "{}.addAll({}.{});",
                                &unset,
                                &defaults,
                                UNSET_PROPERTIES
                            ));
                        }
                        None => {
                            body.line(excerpt!(
                                "{}.addAll({}.allOf({}.class));",
                                &unset,
                                java::enum_set(),
                                &datatype.property_enum
                            ));
                        }
                    }
                }
                body.line(self.return_this());
                Ok(())
            },
        )
    }

    fn add_build(&self, class: &mut Block<'_>) -> Result<()> {
        let datatype = self.datatype;
        let mut doc = vec![format!(
            "Returns a newly-created {{@link {}}} based on the contents of this builder.",
            datatype.type_name.local_name()
        )];
        if self.has_required() {
            doc.push(String::new());
            doc.push("@throws IllegalStateException if any field has not been set".to_string());
        }
        class.blank().javadoc(doc);
        class.method(
            excerpt!("public {} build() {", &datatype.type_name),
            &[],
            |body| {
                if self.has_required() {
                    let unset = body.field(UNSET_PROPERTIES);
                    let condition = excerpt!("!{}.isEmpty()", &unset);
                    if_block(body, condition, |then| {
                        then.line(excerpt!(
                            "throw new {}(\"Not set: \" + {});",
                            java::illegal_state_exception(),
                            &unset
                        ));
                    });
                }
                body.line(excerpt!("return new {}(this);", &datatype.value_type));
                Ok(())
            },
        )
    }

    fn add_build_partial(&self, class: &mut Block<'_>) -> Result<()> {
        let datatype = self.datatype;
        class.blank().javadoc([
            format!(
                "Returns a newly-created partial {{@link {}}} for use in unit tests.",
                datatype.type_name.local_name()
            ),
            "State checking will not be performed. Unset properties will throw".to_string(),
            "{@link UnsupportedOperationException} when accessed via the partial object."
                .to_string(),
        ]);
        class.method(
            excerpt!("public {} buildPartial() {", &datatype.type_name),
            &[],
            |body| {
                body.line(excerpt!("return new {}(this);", &datatype.partial_type));
                Ok(())
            },
        )
    }

    /// The nested `Value` or `Partial` class.
    fn add_implementation(&self, class: &mut Block<'_>, kind: Implementation) -> Result<()> {
        let datatype = self.datatype;
        let tracks_unset = kind == Implementation::Partial && self.has_required();

        let mut identifiers: Vec<Identifier> = self
            .strategies
            .iter()
            .map(|strategy| Identifier::field(&strategy.property().name))
            .collect();
        if tracks_unset {
            identifiers.push(Identifier::field(UNSET_PROPERTIES));
        }

        let fragments = {
            let mut body = class.inner_block_with(identifiers)?;
            self.add_implementation_fields(&mut body, tracks_unset)?;
            self.add_constructor(&mut body, kind, tracks_unset)?;
            for strategy in &self.strategies {
                self.add_getter(&mut body, strategy.as_ref(), kind)?;
            }
            self.add_equals(&mut body, kind, tracks_unset)?;
            self.add_hash_code(&mut body, tracks_unset)?;
            self.add_to_string(&mut body, kind)?;
            trim_leading_blank(body.into_fragments())
        };

        let relation = if datatype.interface_type {
            "implements"
        } else {
            "extends"
        };
        class.blank();
        class.line(excerpt!(
            "private static final class {} {} {} {",
            kind.name(datatype).simple_name(),
            relation,
            &datatype.type_name
        ));
        class.indent().embed(fragments).dedent().line("}");
        Ok(())
    }

    fn add_implementation_fields(&self, body: &mut Block<'_>, tracks_unset: bool) -> Result<()> {
        if self.strategies.is_empty() {
            return Ok(());
        }
        body.blank();
        for strategy in &self.strategies {
            strategy.add_value_field_declaration(body)?;
        }
        if tracks_unset {
            body.line(excerpt!(
                "private final {} {};",
                self.unset_set_type(),
                UNSET_PROPERTIES
            ));
        }
        Ok(())
    }

    fn add_constructor(
        &self,
        body: &mut Block<'_>,
        kind: Implementation,
        tracks_unset: bool,
    ) -> Result<()> {
        let datatype = self.datatype;
        body.blank();
        body.method(
            excerpt!(
                "private {}({} builder) {",
                kind.name(datatype).simple_name(),
                &datatype.generated_builder
            ),
            &["builder"],
            |ctor| {
                let builder = Excerpt::text("builder");
                for strategy in &self.strategies {
                    let field = ctor.field(&strategy.property().name);
                    match kind {
                        Implementation::Value => {
                            strategy.add_final_field_assignment(ctor, &field, &builder)?
                        }
                        Implementation::Partial => {
                            strategy.add_partial_field_assignment(ctor, &field, &builder)?
                        }
                    }
                }
                if tracks_unset {
                    ctor.line(excerpt!(
                        "{} = {}.{}.clone();",
                        ctor.field(UNSET_PROPERTIES),
                        &builder,
                        UNSET_PROPERTIES
                    ));
                }
                Ok(())
            },
        )
    }

    fn add_getter(
        &self,
        body: &mut Block<'_>,
        strategy: &dyn PropertyCodeGenerator,
        kind: Implementation,
    ) -> Result<()> {
        let property = strategy.property();
        body.blank();
        strategy.add_getter_annotations(body)?;
        body.line("@Override");
        body.method(
            excerpt!(
                "public {} {}() {",
                &property.type_name,
                &property.getter_name
            ),
            &[],
            |getter| {
                if kind == Implementation::Partial && Self::is_required(strategy) {
                    let condition = excerpt!(
                        "{}.contains({})",
                        getter.field(UNSET_PROPERTIES),
                        self.unset_constant(property)
                    );
                    if_block(getter, condition, |then| {
                        then.line(excerpt!(
                            "throw new {}(\"{} not set\");",
                            java::unsupported_operation_exception(),
                            &property.name
                        ));
                    });
                }
                let field = getter.field(&property.name);
                strategy.add_value_getter(getter, &field)
            },
        )
    }

    fn add_equals(&self, body: &mut Block<'_>, kind: Implementation, tracks_unset: bool) -> Result<()> {
        let name = kind.name(self.datatype);
        body.blank().line("@Override");
        body.method(
            excerpt!("public boolean equals({} obj) {", java::object()),
            &["obj"],
            |equals| {
                if_block(equals, excerpt!("!(obj instanceof {})", name), |then| {
                    then.line("return false;");
                });
                if self.strategies.is_empty() {
                    equals.line("return true;");
                    return Ok(());
                }

                let other = equals.variable("other")?;
                equals.line(excerpt!("{} {} = ({}) obj;", name, &other, name));
                let mut comparisons: Vec<Excerpt> = self
                    .strategies
                    .iter()
                    .map(|strategy| {
                        let property = strategy.property();
                        equality(
                            &property.type_name,
                            equals.field(&property.name),
                            excerpt!("{}.{}", &other, &property.name),
                        )
                    })
                    .collect();
                if tracks_unset {
                    comparisons.push(excerpt!(
                        "{}.equals({}, {}.{})",
                        java::objects(),
                        equals.field(UNSET_PROPERTIES),
                        &other,
                        UNSET_PROPERTIES
                    ));
                }
                equals.line(excerpt!("return {};", Excerpt::join(" && ", comparisons)));
                Ok(())
            },
        )
    }

    fn add_hash_code(&self, body: &mut Block<'_>, tracks_unset: bool) -> Result<()> {
        body.blank().line("@Override");
        body.method("public int hashCode() {", &[], |hash| {
            let mut fields: Vec<Excerpt> = self
                .strategies
                .iter()
                .map(|strategy| hash.field(&strategy.property().name))
                .collect();
            if tracks_unset {
                fields.push(hash.field(UNSET_PROPERTIES));
            }
            hash.line(excerpt!(
                "return {}.hash({});",
                java::objects(),
                Excerpt::join(", ", fields)
            ));
            Ok(())
        })
    }

    fn add_to_string(&self, body: &mut Block<'_>, kind: Implementation) -> Result<()> {
        let simple_name = self.datatype.type_name.simple_name();
        let prefix = match kind {
            Implementation::Value => format!("{}{{", simple_name),
            Implementation::Partial => format!("partial {}{{", simple_name),
        };
        body.blank().line("@Override");
        body.method(
            excerpt!("public {} toString() {", java::string()),
            &[],
            |code| {
                let mut entries = Vec::with_capacity(self.strategies.len());
                for strategy in &self.strategies {
                    let property = strategy.property();
                    let field = code.field(&property.name);
                    let mut condition = strategy.to_string_condition(&field);
                    if kind == Implementation::Partial && Self::is_required(strategy.as_ref()) {
                        let set = excerpt!(
                            "!{}.contains({})",
                            code.field(UNSET_PROPERTIES),
                            self.unset_constant(property)
                        );
                        condition = Some(match condition {
                            Some(condition) => excerpt!("{} && {}", set, condition),
                            None => set,
                        });
                    }
                    entries.push(ToStringEntry {
                        label: &property.name,
                        condition,
                        value: strategy.to_string_value(&field),
                    });
                }

                if entries.iter().all(|entry| entry.condition.is_none()) {
                    code.line(concatenation(&prefix, &entries));
                    return Ok(());
                }

                let result = code.declare(
                    java::string_builder(),
                    "result",
                    excerpt!("new {}(\"{}\")", java::string_builder(), prefix.as_str()),
                )?;
                let separator = code.declare(java::string(), "separator", "\"\"")?;
                let last = entries.len() - 1;
                for (i, entry) in entries.iter().enumerate() {
                    let append = excerpt!(
                        "{}.append({}).append(\"{}=\").append({});",
                        &result,
                        &separator,
                        entry.label,
                        &entry.value
                    );
                    let advance = excerpt!("{} = \", \";", &separator);
                    match &entry.condition {
                        Some(condition) => {
                            if_block(code, condition.clone(), |then| {
                                then.line(append);
                                then.line(advance);
                            });
                        }
                        None => {
                            code.line(append);
                            if i < last {
                                code.line(advance);
                            }
                        }
                    }
                }
                code.line(excerpt!("return {}.append(\"}\").toString();", &result));
                Ok(())
            },
        )
    }
}

struct ToStringEntry<'a> {
    label: &'a str,
    condition: Option<Excerpt>,
    value: Excerpt,
}

/// `return "Person{name=" + name + ", age=" + age + "}";`
fn concatenation(prefix: &str, entries: &[ToStringEntry<'_>]) -> Excerpt {
    if entries.is_empty() {
        return Excerpt::text(format!("return \"{}}}\";", prefix));
    }
    let mut parts = vec![Excerpt::text(format!("return \"{}", prefix))];
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            parts.push(Excerpt::text(" + \", "));
        }
        parts.push(Excerpt::text(format!("{}=\" + ", entry.label)));
        parts.push(entry.value.clone());
    }
    parts.push(Excerpt::text(" + \"}\";"));
    Excerpt::Sequence(parts)
}

/// Field equality as `equals` writes it for each kind of type.
fn equality(type_name: &TypeName, mine: Excerpt, theirs: Excerpt) -> Excerpt {
    match type_name.primitive() {
        Some(PrimitiveType::Double) => excerpt!(
            "{}.doubleToLongBits({}) == {}.doubleToLongBits({})",
            java::double(),
            &mine,
            java::double(),
            &theirs
        ),
        Some(PrimitiveType::Float) => excerpt!(
            "{}.floatToIntBits({}) == {}.floatToIntBits({})",
            java::float(),
            &mine,
            java::float(),
            &theirs
        ),
        Some(_) => excerpt!("{} == {}", &mine, &theirs),
        None => excerpt!("{}.equals({}, {})", java::objects(), &mine, &theirs),
    }
}

fn trim_leading_blank(mut fragments: Vec<CodeFragment>) -> Vec<CodeFragment> {
    if matches!(fragments.first(), Some(CodeFragment::Blank)) {
        fragments.remove(0);
    }
    fragments
}

#[cfg(test)]
mod tests {
    use freebake_model::{BuilderFactory, Model};

    use super::*;

    fn render(toml: &str) -> String {
        let model: Model = toml.parse().unwrap();
        BuilderFile::new(&model.types[0], &model.options)
            .unwrap()
            .render()
    }

    const PERSON: &str = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "name"
type = "java.lang.String"

[[types.properties]]
name = "age"
type = "int"
"#;

    #[test]
    fn test_relative_path() {
        let model: Model = PERSON.parse().unwrap();
        let file = BuilderFile::new(&model.types[0], &model.options).unwrap();
        assert_eq!(file.relative_path(), "com/example/Person_Builder.java");
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/com/example/Person_Builder.java")
        );
    }

    #[test]
    fn test_file_preamble() {
        let out = render(PERSON);
        assert!(out.starts_with(
            "// Autogenerated code. Do not modify.\n\
             package com.example;\n\
             \n\
             import java.util.EnumSet;\n\
             import java.util.Objects;\n\
             import java.util.function.IntUnaryOperator;\n\
             import java.util.function.UnaryOperator;\n\
             \n\
             /**\n \
             * Auto-generated superclass of {@link Person.Builder},\n \
             * derived from the API of {@link Person}.\n \
             */\n\
             abstract class Person_Builder {\n"
        ));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_required_properties() {
        let out = render(PERSON);
        assert!(out.contains(
            "  private enum Property {\n    \
             NAME(\"name\"),\n    \
             AGE(\"age\"),\n    \
             ;\n"
        ));
        assert!(out.contains(
            "  private final EnumSet<Person_Builder.Property> _unsetProperties = \
             EnumSet.allOf(Person_Builder.Property.class);\n"
        ));
        assert!(out.contains(
            "  public Person build() {\n    \
             if (!_unsetProperties.isEmpty()) {\n      \
             throw new IllegalStateException(\"Not set: \" + _unsetProperties);\n    \
             }\n    \
             return new Person_Builder.Value(this);\n  }\n"
        ));
    }

    #[test]
    fn test_clear_uses_one_fresh_builder() {
        let out = render(PERSON);
        assert!(out.contains(
            "  public Person.Builder clear() {\n    \
             Person_Builder defaults = new Person.Builder();\n    \
             name = defaults.name;\n    \
             age = defaults.age;\n    \
             _unsetProperties.clear();\n    \
             _unsetProperties.addAll(defaults._unsetProperties);\n    \
             return (Person.Builder) this;\n  }\n"
        ));
    }

    #[test]
    fn test_value_class() {
        let out = render(PERSON);
        assert!(out.contains(
            "  private static final class Value extends Person {\n    \
             private final String name;\n    \
             private final int age;\n\n    \
             private Value(Person_Builder builder) {\n      \
             name = builder.name;\n      \
             age = builder.age;\n    }\n"
        ));
        assert!(out.contains(
            "      Person_Builder.Value other = (Person_Builder.Value) obj;\n      \
             return Objects.equals(name, other.name) && age == other.age;\n"
        ));
        assert!(out.contains("      return Objects.hash(name, age);\n"));
        assert!(out.contains(
            "      return \"Person{name=\" + name + \", age=\" + age + \"}\";\n"
        ));
    }

    #[test]
    fn test_partial_class() {
        let out = render(PERSON);
        assert!(out.contains("      _unsetProperties = builder._unsetProperties.clone();\n"));
        assert!(out.contains(
            "    public String getName() {\n      \
             if (_unsetProperties.contains(Person_Builder.Property.NAME)) {\n        \
             throw new UnsupportedOperationException(\"name not set\");\n      \
             }\n      \
             return name;\n    }\n"
        ));
        assert!(out.contains(
            "      StringBuilder result = new StringBuilder(\"partial Person{\");\n      \
             String separator = \"\";\n      \
             if (!_unsetProperties.contains(Person_Builder.Property.NAME)) {\n        \
             result.append(separator).append(\"name=\").append(name);\n        \
             separator = \", \";\n      }\n"
        ));
        assert!(out.contains("      return result.append(\"}\").toString();\n"));
    }

    #[test]
    fn test_without_builder_factory() {
        let model: Model = PERSON.parse().unwrap();
        let mut definition = model.types[0].clone();
        definition.datatype = definition
            .datatype
            .with_builder_factory(BuilderFactory::None);
        let out = BuilderFile::new(&definition, &model.options).unwrap().render();
        assert!(!out.contains("from(Person value)"));
        assert!(!out.contains("defaults"));
        assert!(out.contains(
            "    _unsetProperties.addAll(EnumSet.allOf(Person_Builder.Property.class));\n"
        ));
    }

    #[test]
    fn test_interface_and_no_required_properties() {
        let out = render(
            r#"
[[types]]
name = "com.example.Shape"
interface = true

[[types.properties]]
name = "sides"
type = "java.util.OptionalInt"
"#,
        );
        assert!(out.contains("  private static final class Value implements Shape {\n"));
        assert!(!out.contains("private enum Property"));
        assert!(!out.contains("_unsetProperties"));
        assert!(out.contains(
            "  public Shape build() {\n    return new Shape_Builder.Value(this);\n  }\n"
        ));
        assert!(out.contains("      if (sides.isPresent()) {\n"));
    }

    #[test]
    fn test_empty_type() {
        let out = render(
            r#"
[[types]]
name = "com.example.Marker"
"#,
        );
        assert!(out.contains("      return true;\n"));
        assert!(out.contains("      return \"Marker{}\";\n"));
        assert!(out.contains("      return Objects.hash();\n"));
    }

    #[test]
    fn test_floating_point_equality() {
        let out = render(
            r#"
[[types]]
name = "com.example.Point"

[[types.properties]]
name = "x"
type = "double"
"#,
        );
        assert!(out.contains(
            "return Double.doubleToLongBits(x) == Double.doubleToLongBits(other.x);"
        ));
    }

    #[test]
    fn test_clashing_names_stay_qualified() {
        let out = render(
            r#"
[[types]]
name = "com.example.Order"

[[types.properties]]
name = "value"
type = "com.other.Value"

[[types.properties]]
name = "other"
type = "java.lang.String"
"#,
        );
        assert!(!out.contains("import com.other.Value;"));
        assert!(out.contains("  private com.other.Value value;\n"));
        assert!(out.contains(
            "      Order_Builder.Value _other = (Order_Builder.Value) obj;\n      \
             return Objects.equals(value, _other.value) && Objects.equals(other, _other.other);\n"
        ));
    }
}
