//! Qualified type names.

use std::fmt;

use crate::TypeParseError;

/// A fully-qualified type name: a package plus one or more nested simple names.
///
/// `com.example.Person.Builder` has package `com.example` and simple names
/// `["Person", "Builder"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    package: String,
    simple_names: Vec<String>,
}

impl QualifiedName {
    /// Create a top-level type name in `package`.
    pub fn of(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Parse a dotted name.
    ///
    /// Leading segments that start with a lowercase letter form the package;
    /// the first segment starting with an uppercase letter begins the type.
    pub fn parse(input: &str) -> Result<Self, TypeParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TypeParseError::new(input, "empty type name"));
        }

        let mut package = Vec::new();
        let mut simple_names = Vec::new();
        for segment in input.split('.') {
            if !is_java_identifier(segment) {
                return Err(TypeParseError::new(
                    input,
                    format!("'{}' is not a valid identifier", segment),
                ));
            }
            let starts_upper = segment.chars().next().is_some_and(|c| c.is_uppercase());
            if simple_names.is_empty() && !starts_upper {
                package.push(segment);
            } else {
                simple_names.push(segment.to_string());
            }
        }

        if simple_names.is_empty() {
            return Err(TypeParseError::new(
                input,
                "no type segment (type names start with an uppercase letter)",
            ));
        }

        Ok(Self {
            package: package.join("."),
            simple_names,
        })
    }

    /// A type nested inside this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// A top-level sibling of this type's outermost type, in the same package.
    pub fn sibling(&self, simple_name: impl Into<String>) -> Self {
        Self::of(self.package.clone(), simple_name)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        // Construction guarantees at least one simple name.
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost enclosing type (itself, if top-level).
    pub fn top_level(&self) -> Self {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.simple_names.len() == 1
    }

    /// Whether this type is `other` or nested (at any depth) inside `other`.
    pub fn is_within(&self, other: &QualifiedName) -> bool {
        self.package == other.package && self.simple_names.starts_with(&other.simple_names)
    }

    /// The simple names joined with dots, as written inside the package.
    pub fn local_name(&self) -> String {
        self.simple_names.join(".")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.local_name())
        } else {
            write!(f, "{}.{}", self.package, self.local_name())
        }
    }
}

pub(crate) fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let name = QualifiedName::parse("com.example.Person.Builder").unwrap();
        assert_eq!(name.package(), "com.example");
        assert_eq!(name.simple_names(), ["Person", "Builder"]);
        assert_eq!(name.simple_name(), "Builder");
        assert_eq!(name.to_string(), "com.example.Person.Builder");
    }

    #[test]
    fn test_parse_default_package() {
        let name = QualifiedName::parse("Person").unwrap();
        assert_eq!(name.package(), "");
        assert_eq!(name.to_string(), "Person");
    }

    #[test]
    fn test_parse_rejects_package_only() {
        assert!(QualifiedName::parse("com.example").is_err());
        assert!(QualifiedName::parse("com..Person").is_err());
        assert!(QualifiedName::parse("").is_err());
    }

    #[test]
    fn test_nesting() {
        let person = QualifiedName::of("com.example", "Person");
        let builder = person.nested("Builder");
        assert_eq!(builder.top_level(), person);
        assert!(builder.is_within(&person));
        assert!(!person.is_within(&builder));
        assert_eq!(
            builder.sibling("Person_Builder").to_string(),
            "com.example.Person_Builder"
        );
    }
}
