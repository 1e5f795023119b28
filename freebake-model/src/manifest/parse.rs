//! Model parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use freebake_core::{QualifiedName, TypeName, TypeParseError};

use super::{
    Manifest, Model, PropertyEntry, TypeDefinition, TypeEntry,
    validate::{ParseContext, find_key_spans},
};
use crate::{Datatype, Error, Options, Property, Result};

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "freebake.toml")
    }
}

impl Model {
    /// Parse a freebake.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_model(&content, &path.display().to_string())
    }

    /// Parse a freebake.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_model(content, filename)
    }
}

/// Parse and validate a model from content with the given filename for error reporting.
pub fn parse_model(content: &str, filename: &str) -> Result<Model> {
    let ctx = ParseContext::new(content, filename);
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;

    let options = resolve_options(&manifest, &ctx)?;

    let mut seen = HashSet::new();
    let mut types = Vec::with_capacity(manifest.types.len());
    for entry in &manifest.types {
        let definition = resolve_type(entry, &ctx)?;
        if !seen.insert(definition.datatype.type_name.clone()) {
            let span = find_key_spans(content, "name", &entry.name).into_iter().nth(1);
            return Err(ctx.source_context().duplicate_type_error(&entry.name, span));
        }
        types.push(definition);
    }

    Ok(Model { options, types })
}

fn resolve_options(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<Options> {
    let mut options = Options::default();
    if let Some(indent) = manifest.options.indent {
        if indent > 8 {
            return Err(ctx.source_context().validation_error(
                format!("indent must be between 0 and 8, got {}", indent),
                None,
            ));
        }
        options.indent = indent;
    }
    if let Some(annotation) = &manifest.options.nullable_annotation {
        options.nullable_annotation =
            parse_qualified(annotation, "nullable_annotation", "option", ctx)?;
    }
    Ok(options)
}

fn resolve_type(entry: &TypeEntry, ctx: &ParseContext<'_>) -> Result<TypeDefinition> {
    let type_name = parse_qualified(&entry.name, "name", "type", ctx)?;
    for simple in type_name.simple_names() {
        ctx.validate_name(simple, "type")?;
    }

    let mut datatype = Datatype::new(type_name)
        .with_interface_type(entry.interface)
        .with_builder_factory(entry.builder_factory);
    if let Some(builder) = &entry.builder {
        datatype = datatype.with_builder(parse_qualified(builder, "builder", "builder", ctx)?);
    }

    let type_ctx = ctx.push(&entry.name);
    let mut properties: Vec<Property> = Vec::with_capacity(entry.properties.len());
    for raw in &entry.properties {
        let property = resolve_property(raw, entry.bean_convention, &type_ctx)?;
        // `setFooBar` and `FOO_BAR` are derived, so `fooBar`, `FooBar` and
        // `foo_bar` name the same Java members.
        if let Some(earlier) = properties.iter().find(|p| {
            p.name == property.name
                || p.capitalized_name == property.capitalized_name
                || p.all_caps_name == property.all_caps_name
        }) {
            let (first_span, second_span) = if earlier.name == property.name {
                let spans = find_key_spans(ctx.src(), "name", &property.name);
                (spans.first().copied(), spans.get(1).copied())
            } else {
                (
                    find_key_spans(ctx.src(), "name", &earlier.name).first().copied(),
                    find_key_spans(ctx.src(), "name", &property.name).first().copied(),
                )
            };
            return Err(ctx.source_context().duplicate_property_error(
                &property.name,
                &entry.name,
                first_span,
                second_span,
            ));
        }
        properties.push(property);
    }

    Ok(TypeDefinition {
        datatype,
        properties,
    })
}

fn resolve_property(
    raw: &PropertyEntry,
    bean_convention: bool,
    ctx: &ParseContext<'_>,
) -> Result<Property> {
    ctx.validate_name(&raw.name, "property")?;
    // Generated helpers (`_unsetProperties`, `_base`) start with an underscore.
    if !raw.name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(ctx.source_context().validation_error(
            format!("property '{}' must start with a letter", raw.name),
            ctx.find_span(&raw.name),
        ));
    }

    let type_name: TypeName = raw.type_name.parse().map_err(|e: TypeParseError| {
        ctx.source_context().invalid_type_error(
            &raw.type_name,
            format!("property '{}'", raw.name),
            e.reason,
            find_key_spans(ctx.src(), "type", &raw.type_name)
                .into_iter()
                .next(),
        )
    })?;

    if raw.nullable && type_name.is_primitive() {
        return Err(ctx.source_context().validation_error(
            format!(
                "property '{}' has primitive type '{}' and cannot be nullable",
                raw.name, type_name
            ),
            ctx.find_span(&raw.name),
        ));
    }

    let mut property = Property::new(&raw.name, type_name)
        .nullable(raw.nullable)
        .with_default(raw.has_default)
        .boxed_mapper(raw.boxed_mapper);
    if !bean_convention {
        property = property.without_bean_convention();
    }
    if let Some(getter) = &raw.getter {
        ctx.validate_name(getter, "getter")?;
        property = property.with_getter_name(getter);
    }
    Ok(property)
}

fn parse_qualified(
    value: &str,
    key: &str,
    kind: &str,
    ctx: &ParseContext<'_>,
) -> Result<QualifiedName> {
    QualifiedName::parse(value).map_err(|e| {
        ctx.source_context().invalid_type_error(
            value,
            ctx.context_for(kind),
            e.reason,
            find_key_spans(ctx.src(), key, value).into_iter().next(),
        )
    })
}

#[cfg(test)]
mod tests {
    use freebake_core::PrimitiveType;

    use super::*;
    use crate::BuilderFactory;

    const PERSON: &str = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "name"
type = "java.lang.String"

[[types.properties]]
name = "age"
type = "java.util.OptionalInt"
boxed_mapper = true
"#;

    #[test]
    fn test_parse_minimal() {
        let model: Model = PERSON.parse().unwrap();
        assert_eq!(model.types.len(), 1);
        assert_eq!(model.options, Options::default());

        let person = &model.types[0];
        assert_eq!(person.datatype.type_name.to_string(), "com.example.Person");
        assert_eq!(person.properties.len(), 2);
        assert_eq!(person.properties[0].getter_name, "getName");
        assert!(person.properties[1].boxed_mapper);
        assert!(person.properties[1].type_name.is_raw("java.util.OptionalInt"));
        assert_eq!(model.property_count(), 2);
        assert!(model.find("com.example.Person").is_some());
    }

    #[test]
    fn test_parse_type_options() {
        let model: Model = r#"
[options]
indent = 4
nullable_annotation = "org.jspecify.annotations.Nullable"

[[types]]
name = "com.example.Point"
builder = "com.example.Point.Maker"
interface = true
builder_factory = "none"
bean_convention = false

[[types.properties]]
name = "x"
type = "int"
has_default = true
"#
        .parse()
        .unwrap();

        assert_eq!(model.options.indent, 4);
        assert_eq!(
            model.options.nullable_annotation.to_string(),
            "org.jspecify.annotations.Nullable"
        );
        let point = &model.types[0];
        assert_eq!(point.datatype.builder.to_string(), "com.example.Point.Maker");
        assert!(point.datatype.interface_type);
        assert_eq!(point.datatype.builder_factory, BuilderFactory::None);
        assert_eq!(point.properties[0].getter_name, "x");
        assert_eq!(
            point.properties[0].type_name,
            TypeName::Primitive(PrimitiveType::Int)
        );
        assert!(point.properties[0].has_default);
    }

    #[test]
    fn test_getter_override() {
        let model: Model = r#"
[[types]]
name = "com.example.Flag"

[[types.properties]]
name = "enabled"
type = "boolean"
getter = "isEnabled"
"#
        .parse()
        .unwrap();
        assert_eq!(model.types[0].properties[0].getter_name, "isEnabled");
    }

    #[test]
    fn test_parse_error() {
        let err = "[[types]\nname = ".parse::<Model>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = r#"
[[types]]
name = "com.example.Person"
colour = "blue"
"#
        .parse::<Model>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_property_type() {
        let err = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "names"
type = "java.util.List<java.lang.String"
"#
        .parse::<Model>()
        .unwrap_err();
        match *err {
            Error::InvalidType { ty, span, .. } => {
                assert_eq!(ty, "java.util.List<java.lang.String");
                assert!(span.is_some());
            }
            other => panic!("expected InvalidType, got {:?}", other),
        }
    }

    #[test]
    fn test_reserved_keyword_property() {
        let err = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "class"
type = "java.lang.String"
"#
        .parse::<Model>()
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_property_must_start_with_letter() {
        let err = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "_unsetProperties"
type = "int"
"#
        .parse::<Model>()
        .unwrap_err();
        match *err {
            Error::Validation { message, .. } => {
                assert_eq!(message, "property '_unsetProperties' must start with a letter")
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_property() {
        let err = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "age"
type = "int"

[[types.properties]]
name = "age"
type = "long"
"#
        .parse::<Model>()
        .unwrap_err();
        match *err {
            Error::DuplicateProperty {
                name,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(name, "age");
                assert!(first_span.unwrap().offset() < second_span.unwrap().offset());
            }
            other => panic!("expected DuplicateProperty, got {:?}", other),
        }
    }

    fn clash_spans(first: &str, second: &str) -> (String, usize, usize) {
        let src = format!(
            r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "{}"
type = "int"

[[types.properties]]
name = "{}"
type = "int"
"#,
            first, second
        );
        let err = src.parse::<Model>().unwrap_err();
        match *err {
            Error::DuplicateProperty {
                name,
                first_span,
                second_span,
                ..
            } => (
                name,
                first_span.unwrap().offset(),
                second_span.unwrap().offset(),
            ),
            other => panic!("expected DuplicateProperty, got {:?}", other),
        }
    }

    #[test]
    fn test_properties_sharing_all_caps_name() {
        let (name, first, second) = clash_spans("fooBar", "foo_bar");
        assert_eq!(name, "foo_bar");
        assert!(first < second);
    }

    #[test]
    fn test_properties_sharing_accessor_names() {
        let (name, first, second) = clash_spans("age", "Age");
        assert_eq!(name, "Age");
        assert!(first < second);
    }

    #[test]
    fn test_duplicate_type() {
        let err = r#"
[[types]]
name = "com.example.Person"

[[types]]
name = "com.example.Person"
"#
        .parse::<Model>()
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateType { .. }));
    }

    #[test]
    fn test_nullable_primitive_rejected() {
        let err = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "age"
type = "int"
nullable = true
"#
        .parse::<Model>()
        .unwrap_err();
        assert!(err.to_string().contains("cannot be nullable"));
    }

    #[test]
    fn test_type_without_class_segment() {
        let err = r#"
[[types]]
name = "com.example.person"
"#
        .parse::<Model>()
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidType { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freebake.toml");
        std::fs::write(&path, PERSON).unwrap();

        let model = Model::from_file(&path).unwrap();
        assert_eq!(model.types[0].properties.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Model::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
