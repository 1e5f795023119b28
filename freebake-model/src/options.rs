//! Generator options from the `[options]` table.

use freebake_core::QualifiedName;

/// Default annotation applied to nullable properties.
pub const DEFAULT_NULLABLE_ANNOTATION: &str = "javax.annotation.Nullable";

/// Default indentation width in spaces.
pub const DEFAULT_INDENT: u8 = 2;

/// Resolved generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Spaces per indentation level; `0` selects tabs.
    pub indent: u8,
    pub nullable_annotation: QualifiedName,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            nullable_annotation: QualifiedName::of("javax.annotation", "Nullable"),
        }
    }
}

impl Options {
    /// Override the indentation width (e.g. from a CLI flag).
    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}
