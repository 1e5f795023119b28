//! Immutable source fragments.

use std::fmt;

use freebake_core::{PrimitiveType, QualifiedName, TypeName};

/// Renders type references inside excerpts.
///
/// The Java generator implements this with its import table so that
/// imported types print by simple name.
pub trait TypeRenderer {
    fn render_type(&self, name: &QualifiedName) -> String;
}

/// Renders every type fully qualified.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedTypes;

impl TypeRenderer for QualifiedTypes {
    fn render_type(&self, name: &QualifiedName) -> String {
        name.to_string()
    }
}

/// A formatted piece of source text.
///
/// Excerpts are immutable and compare structurally, so two declarations built
/// from the same parts are equal even when built separately.
///
/// # Example
///
/// ```
/// use freebake_codegen::{Excerpt, excerpt};
///
/// let field = Excerpt::text("age");
/// let line = excerpt!("this.{} = {};", &field, "value");
/// assert_eq!(line.to_string(), "this.age = value;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Excerpt {
    /// Literal source text.
    Text(String),
    /// A reference to a declared type, shortened by the type renderer.
    Type(QualifiedName),
    /// A template with positional `{}` placeholders.
    Template { template: String, args: Vec<Excerpt> },
    /// Excerpts rendered back to back.
    Sequence(Vec<Excerpt>),
}

impl Excerpt {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    pub fn ty(name: impl Into<QualifiedName>) -> Self {
        Self::Type(name.into())
    }

    /// A full type, including type arguments.
    pub fn type_name(type_name: &TypeName) -> Self {
        match type_name {
            TypeName::Primitive(p) => Self::Text(p.keyword().to_string()),
            TypeName::Declared { name, args } if args.is_empty() => Self::Type(name.clone()),
            TypeName::Declared { name, args } => Self::Sequence(vec![
                Self::Type(name.clone()),
                Self::text("<"),
                Self::join(", ", args.iter().map(Self::type_name)),
                Self::text(">"),
            ]),
        }
    }

    /// A generic type with explicit argument excerpts, e.g. `Optional<? extends T>`.
    pub fn generic(
        name: impl Into<QualifiedName>,
        args: impl IntoIterator<Item = Excerpt>,
    ) -> Self {
        Self::Sequence(vec![
            Self::Type(name.into()),
            Self::text("<"),
            Self::join(", ", args),
            Self::text(">"),
        ])
    }

    /// A template with one `{}` placeholder per argument.
    pub fn template(template: impl Into<String>, args: Vec<Excerpt>) -> Self {
        let template = template.into();
        debug_assert_eq!(
            template.matches("{}").count(),
            args.len(),
            "placeholder count does not match arguments in {:?}",
            template
        );
        Self::Template { template, args }
    }

    /// Excerpts separated by `separator`.
    pub fn join(separator: &str, items: impl IntoIterator<Item = Excerpt>) -> Self {
        let mut parts = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                parts.push(Self::text(separator));
            }
            parts.push(item);
        }
        Self::Sequence(parts)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Type(_) => false,
            Self::Template { template, args } => {
                template.is_empty() && args.iter().all(Excerpt::is_empty)
            }
            Self::Sequence(parts) => parts.iter().all(Excerpt::is_empty),
        }
    }

    pub fn render(&self, types: &dyn TypeRenderer) -> String {
        let mut out = String::new();
        self.render_into(&mut out, types);
        out
    }

    fn render_into(&self, out: &mut String, types: &dyn TypeRenderer) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Type(name) => out.push_str(&types.render_type(name)),
            Self::Template { template, args } => {
                let mut args = args.iter();
                let mut rest = template.as_str();
                while let Some(pos) = rest.find("{}") {
                    out.push_str(&rest[..pos]);
                    match args.next() {
                        Some(arg) => arg.render_into(out, types),
                        None => out.push_str("{}"),
                    }
                    rest = &rest[pos + 2..];
                }
                out.push_str(rest);
            }
            Self::Sequence(parts) => {
                for part in parts {
                    part.render_into(out, types);
                }
            }
        }
    }

    /// Visit every type referenced by this excerpt, in render order.
    pub fn visit_types<'a>(&'a self, visit: &mut dyn FnMut(&'a QualifiedName)) {
        match self {
            Self::Text(_) => {}
            Self::Type(name) => visit(name),
            Self::Template { args: parts, .. } | Self::Sequence(parts) => {
                for part in parts {
                    part.visit_types(visit);
                }
            }
        }
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&QualifiedTypes))
    }
}

impl From<&str> for Excerpt {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Excerpt {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Excerpt {
    fn from(text: &String) -> Self {
        Self::text(text.as_str())
    }
}

impl From<&Excerpt> for Excerpt {
    fn from(excerpt: &Excerpt) -> Self {
        excerpt.clone()
    }
}

impl From<QualifiedName> for Excerpt {
    fn from(name: QualifiedName) -> Self {
        Self::Type(name)
    }
}

impl From<&QualifiedName> for Excerpt {
    fn from(name: &QualifiedName) -> Self {
        Self::Type(name.clone())
    }
}

impl From<&TypeName> for Excerpt {
    fn from(type_name: &TypeName) -> Self {
        Self::type_name(type_name)
    }
}

impl From<PrimitiveType> for Excerpt {
    fn from(primitive: PrimitiveType) -> Self {
        Self::text(primitive.keyword())
    }
}

/// Build an [`Excerpt`] from a template and arguments.
///
/// Each argument is converted with `Excerpt::from`, so strings, type names
/// and other excerpts can be mixed freely.
#[macro_export]
macro_rules! excerpt {
    ($template:expr) => {
        $crate::Excerpt::from($template)
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::Excerpt::template($template, vec![$($crate::Excerpt::from($arg)),+])
    };
}
