//! Java type names and their parser.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::QualifiedName;

/// Error produced when a type string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type '{input}': {reason}")]
pub struct TypeParseError {
    pub input: String,
    pub reason: String,
}

impl TypeParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// The eight Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Char,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    /// The Java keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// The `java.lang` wrapper class.
    pub fn boxed(&self) -> QualifiedName {
        let simple = match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        };
        QualifiedName::of("java.lang", simple)
    }

    /// Floating point values compare through their bit patterns in `equals`.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, PrimitiveType::Float | PrimitiveType::Double)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A Java type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Primitive(PrimitiveType),
    Declared {
        name: QualifiedName,
        args: Vec<TypeName>,
    },
}

impl TypeName {
    /// A non-generic declared type.
    pub fn declared(name: QualifiedName) -> Self {
        Self::Declared {
            name,
            args: Vec::new(),
        }
    }

    /// A parameterized declared type.
    pub fn generic(name: QualifiedName, args: impl IntoIterator<Item = TypeName>) -> Self {
        Self::Declared {
            name,
            args: args.into_iter().collect(),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeName::Primitive(_))
    }

    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            TypeName::Primitive(p) => Some(*p),
            TypeName::Declared { .. } => None,
        }
    }

    /// The raw type name, for declared types.
    pub fn qualified_name(&self) -> Option<&QualifiedName> {
        match self {
            TypeName::Primitive(_) => None,
            TypeName::Declared { name, .. } => Some(name),
        }
    }

    pub fn type_args(&self) -> &[TypeName] {
        match self {
            TypeName::Primitive(_) => &[],
            TypeName::Declared { args, .. } => args,
        }
    }

    /// Whether this is the declared type `qualified` (ignoring type arguments).
    pub fn is_raw(&self, qualified: &str) -> bool {
        self.qualified_name()
            .is_some_and(|name| name.to_string() == qualified)
    }

    /// The reference type for this type: wrapper class for primitives, itself otherwise.
    pub fn boxed(&self) -> TypeName {
        match self {
            TypeName::Primitive(p) => TypeName::declared(p.boxed()),
            TypeName::Declared { .. } => self.clone(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Primitive(p) => write!(f, "{}", p),
            TypeName::Declared { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                    write!(f, "<{}>", args.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for TypeName {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { input: s, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos != s.len() {
            return Err(parser.error("unexpected trailing characters"));
        }
        Ok(ty)
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Recursive-descent parser over `name ('<' type (',' type)* '>')?`.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse_type(&mut self) -> Result<TypeName, TypeParseError> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let raw = &self.input[start..self.pos];
        if raw.is_empty() {
            return Err(self.error("expected a type name"));
        }

        if let Some(primitive) = PrimitiveType::from_keyword(raw) {
            self.skip_whitespace();
            if self.peek() == Some('<') {
                return Err(self.error("primitive types cannot have type arguments"));
            }
            return Ok(TypeName::Primitive(primitive));
        }

        let name = QualifiedName::parse(raw)
            .map_err(|e| TypeParseError::new(self.input, e.reason))?;

        self.skip_whitespace();
        let mut args = Vec::new();
        if self.peek() == Some('<') {
            self.pos += 1;
            loop {
                let arg = self.parse_type()?;
                if arg.is_primitive() {
                    return Err(self.error("type arguments must be reference types"));
                }
                args.push(arg);
                self.skip_whitespace();
                match self.peek() {
                    Some(',') => self.pos += 1,
                    Some('>') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err(self.error("expected ',' or '>'")),
                }
            }
        }

        Ok(TypeName::Declared { name, args })
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn error(&self, reason: &str) -> TypeParseError {
        TypeParseError::new(self.input, format!("{} at offset {}", reason, self.pos))
    }
}
