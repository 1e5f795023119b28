//! Tests over whole generated builder files.
//!
//! Methods are cut out of the rendered file and compared either exactly or
//! with inline snapshots. Run `cargo insta review` after intentional changes.

use freebake_codegen_java::{Generator, LanguageCodegen};
use freebake_model::Model;

fn generate(model_toml: &str) -> Vec<(String, String)> {
    let model: Model = model_toml.parse().expect("Failed to parse model");
    Generator::new(&model)
        .preview()
        .expect("Failed to generate")
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn builder_source(model_toml: &str) -> String {
    let mut files = generate(model_toml);
    assert_eq!(files.len(), 1, "expected a single builder file");
    files.remove(0).1
}

/// The class-level method starting with `header`, dedented to column zero.
fn method(source: &str, header: &str) -> String {
    let needle = format!("\n  {}", header);
    let start = source
        .find(&needle)
        .unwrap_or_else(|| panic!("method not found: {}", header))
        + 1;
    let end = source[start..]
        .find("\n  }\n")
        .map(|offset| start + offset + "\n  }".len())
        .expect("unterminated method");
    source[start..end]
        .lines()
        .map(|line| line.strip_prefix("  ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn age_model(boxed_mapper: bool) -> String {
    format!(
        r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "age"
type = "java.util.OptionalInt"
boxed_mapper = {}
"#,
        boxed_mapper
    )
}

const MIXED: &str = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "name"
type = "java.lang.String"

[[types.properties]]
name = "nickname"
type = "java.lang.String"
nullable = true

[[types.properties]]
name = "email"
type = "java.util.Optional<java.lang.String>"

[[types.properties]]
name = "tags"
type = "java.util.List<java.lang.String>"

[[types.properties]]
name = "scores"
type = "java.util.Map<java.lang.String, java.lang.Integer>"

[[types.properties]]
name = "age"
type = "java.util.OptionalInt"
"#;

#[test]
fn test_output_is_deterministic() {
    let first = generate(MIXED);
    let second = generate(MIXED);
    assert_eq!(first, second);
}

#[test]
fn test_wrapper_setter_delegates() {
    let source = builder_source(&age_model(false));
    insta::assert_snapshot!(method(&source, "public Person.Builder setAge(OptionalInt age) {"), @r"
    public Person.Builder setAge(OptionalInt age) {
      if (age.isPresent()) {
        return setAge(age.getAsInt());
      } else {
        return clearAge();
      }
    }
    ");
}

#[test]
fn test_primitive_mapper() {
    let source = builder_source(&age_model(false));
    insta::assert_snapshot!(method(&source, "public Person.Builder mapAge("), @r"
    public Person.Builder mapAge(IntUnaryOperator mapper) {
      Objects.requireNonNull(mapper);
      age.ifPresent(value -> setAge(mapper.applyAsInt(value)));
      return (Person.Builder) this;
    }
    ");
}

#[test]
fn test_boxed_mapper_clears_on_null() {
    let source = builder_source(&age_model(true));
    insta::assert_snapshot!(method(&source, "public Person.Builder mapAge("), @r"
    public Person.Builder mapAge(UnaryOperator<Integer> mapper) {
      Objects.requireNonNull(mapper);
      age.ifPresent(value -> {
        Integer result = mapper.apply(value);
        if (result != null) {
          setAge(result);
        } else {
          clearAge();
        }
      });
      return (Person.Builder) this;
    }
    ");
}

#[test]
fn test_optional_only_builder_never_fails() {
    let source = builder_source(&age_model(false));
    assert!(!source.contains("_unsetProperties"));
    assert!(!source.contains("private enum Property"));
    assert_eq!(
        method(&source, "public Person build() {"),
        "public Person build() {\n  return new Person_Builder.Value(this);\n}"
    );
}

#[test]
fn test_merge_only_adds() {
    let source = builder_source(MIXED);
    for header in [
        "public Person.Builder mergeFrom(Person value) {",
        "public Person.Builder mergeFrom(Person.Builder template) {",
    ] {
        let merge = method(&source, header);
        assert!(!merge.contains("clear"), "{}", merge);
        assert!(!merge.contains("= null;"), "{}", merge);
    }

    let from_value = method(&source, "public Person.Builder mergeFrom(Person value) {");
    assert!(from_value.contains("  value.getEmail().ifPresent(this::setEmail);\n"));
    assert!(from_value.contains("  addAllTags(value.getTags());\n"));
    assert!(from_value.contains("  putAllScores(value.getScores());\n"));
    assert!(from_value.contains("  value.getAge().ifPresent(this::setAge);\n"));
    assert!(from_value.contains("  String _nickname = value.getNickname();\n"));
    assert!(from_value.contains("  if (_nickname != null) {\n    setNickname(_nickname);\n  }\n"));

    let from_builder = method(&source, "public Person.Builder mergeFrom(Person.Builder template) {");
    assert!(from_builder.contains("  template.getAge().ifPresent(this::setAge);\n"));
    assert!(from_builder.contains("  Person_Builder base = template;\n"));
    assert!(from_builder.contains("  if (!base._unsetProperties.contains(Person_Builder.Property.NAME)) {\n"));
}

#[test]
fn test_clear_declares_defaults_once() {
    let source = builder_source(MIXED);
    let clear = method(&source, "public Person.Builder clear() {");
    assert_eq!(clear.matches("new Person.Builder()").count(), 1);
    assert!(clear.starts_with(
        "public Person.Builder clear() {\n  Person_Builder defaults = new Person.Builder();\n"
    ));
    assert!(clear.contains("  tags.clear();\n"));
    assert!(clear.contains("  scores.clear();\n"));
    assert!(clear.contains("  age = defaults.age;\n"));
    assert!(clear.contains("  _unsetProperties.addAll(defaults._unsetProperties);\n"));
}

#[test]
fn test_clear_without_factory() {
    let source = builder_source(
        r#"
[[types]]
name = "com.example.Person"
builder_factory = "none"

[[types.properties]]
name = "age"
type = "java.util.OptionalLong"
"#,
    );
    assert!(!source.contains("defaults"));
    assert!(!source.contains("public static Person.Builder from("));
    assert_eq!(
        method(&source, "public Person.Builder clear() {"),
        "public Person.Builder clear() {\n  age = OptionalLong.empty();\n  return (Person.Builder) this;\n}"
    );
}

#[test]
fn test_imports() {
    let source = builder_source(MIXED);
    let imports: Vec<&str> = source
        .lines()
        .filter(|line| line.starts_with("import "))
        .collect();
    assert!(imports.contains(&"import java.util.OptionalInt;"));
    assert!(imports.contains(&"import java.util.Objects;"));
    assert!(imports.contains(&"import java.util.Map;"));
    assert!(imports.contains(&"import javax.annotation.Nullable;"));
    assert!(!imports.iter().any(|line| line.contains("java.lang.")));
    assert!(!imports.iter().any(|line| line.contains("Person")));

    let mut sorted = imports.clone();
    sorted.sort();
    assert_eq!(imports, sorted);
}

#[test]
fn test_tab_indent() {
    let model: Model = age_model(false).parse().unwrap();
    let options = model.options.clone().with_indent(0);
    let files = Generator::new(&model).with_options(options).preview().unwrap();
    assert!(files[0].content.contains("\n\tprivate OptionalInt age = OptionalInt.empty();\n"));
}

#[test]
fn test_nested_value_type() {
    let files = generate(
        r#"
[[types]]
name = "com.example.Outer.Inner"

[[types.properties]]
name = "id"
type = "long"
"#,
    );
    assert_eq!(files[0].0, "com/example/Outer_Inner_Builder.java");
    assert!(files[0].1.contains("abstract class Outer_Inner_Builder {\n"));
    assert!(files[0]
        .1
        .contains("  private static final class Value extends Outer.Inner {\n"));
}
