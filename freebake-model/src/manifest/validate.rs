//! Validation context and utilities for model parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the model, making it easier to pass validation context through
/// nested types and properties.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "freebake.toml");
/// let nested = ctx.push("com.example.Person");
/// nested.validate_name("age", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["com.example.Person", "age"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "property in 'com.example.Person'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `name = "..."` entry in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_key_spans(self.source.src(), "name", name).into_iter().next()
    }

    /// Validate that a name is a valid Java identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Java reserved keywords and literals that cannot be used as identifiers
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Contextual, rejected to keep generated code readable
    "var", "yield", "record", "_",
];

/// Check if a name is a Java reserved keyword
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find every span of `key = "value"` (or single-quoted) in the TOML source,
/// pointing at the value between the quotes.
pub(crate) fn find_key_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        for pattern in [
            format!("{} = {}{}{}", key, quote, value, quote),
            format!("{}={}{}{}", key, quote, value, quote),
        ] {
            let prefix = pattern.len() - value.len() - 1;
            for (pos, _) in src.match_indices(&pattern) {
                // Only whole keys: the match must start a line or follow whitespace / brace / comma
                let boundary = src[..pos]
                    .chars()
                    .next_back()
                    .is_none_or(|c| c.is_whitespace() || c == '{' || c == ',');
                if boundary {
                    spans.push(SourceSpan::from((pos + prefix, value.len())));
                }
            }
        }
    }
    spans.sort_by_key(|s| s.offset());
    spans
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("age").is_none());
        assert!(validate_identifier("firstName").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("line2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2nd").is_some());
        assert!(validate_identifier("first-name").is_some());
        assert!(validate_identifier("first name").is_some());
    }

    #[test]
    fn test_is_java_keyword() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("int"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("age"));
        assert!(!is_java_keyword("clazz"));
    }

    #[test]
    fn test_find_key_spans() {
        let src = "[[types.properties]]\nname = \"age\"\ntype = \"int\"\n";
        let spans = find_key_spans(src, "name", "age");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset(), 29);
        assert_eq!(spans[0].len(), 3);
    }

    #[test]
    fn test_find_key_spans_requires_whole_key() {
        let src = "nickname = \"age\"\nname = \"age\"\n";
        let spans = find_key_spans(src, "name", "age");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset(), 25);
    }

    #[test]
    fn test_find_key_spans_all_occurrences() {
        let src = "name = 'age'\nname = \"age\"\n";
        let spans = find_key_spans(src, "name", "age");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].offset() < spans[1].offset());
    }

    #[test]
    fn test_parse_context_context_for() {
        let ctx = ParseContext::new("", "freebake.toml");
        assert_eq!(ctx.context_for("type"), "type");

        let nested = ctx.push("com.example.Person");
        assert_eq!(
            nested.context_for("property"),
            "property in 'com.example.Person'"
        );
    }

    #[test]
    fn test_parse_context_validate_name_keyword() {
        let ctx = ParseContext::new("name = \"class\"\ntype = \"int\"", "freebake.toml");
        let err = ctx.validate_name("class", "property").unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_parse_context_validate_name_invalid() {
        let ctx = ParseContext::new("", "freebake.toml");
        assert!(ctx.validate_name("first-name", "property").is_err());
        assert!(ctx.validate_name("firstName", "property").is_ok());
    }
}
