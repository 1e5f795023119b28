//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Excerpt, Indent, QualifiedTypes, Renderable, TypeRenderer};

/// Fluent API for building code with proper indentation.
///
/// Excerpts are rendered through a [`TypeRenderer`], which defaults to
/// printing every type fully qualified.
///
/// # Example
///
/// ```
/// use freebake_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("class Foo {")
///     .push_indent()
///     .push_line("int x;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "class Foo {\n  int x;\n}\n");
/// ```
pub struct CodeBuilder<'t> {
    indent_level: usize,
    indent: Indent,
    types: &'t dyn TypeRenderer,
    buffer: String,
}

impl CodeBuilder<'static> {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            types: &QualifiedTypes,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }
}

impl<'t> CodeBuilder<'t> {
    /// Render type references through `types` instead of fully qualified.
    pub fn with_types<'u>(self, types: &'u dyn TypeRenderer) -> CodeBuilder<'u> {
        CodeBuilder {
            indent_level: self.indent_level,
            indent: self.indent,
            types,
            buffer: self.buffer,
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a rendered excerpt as a line.
    pub fn push_excerpt(&mut self, excerpt: &Excerpt) -> &mut Self {
        let line = excerpt.render(self.types);
        self.push_line(&line)
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a javadoc comment.
    ///
    /// A single line renders as `/** text */`, more lines as a block comment.
    pub fn push_javadoc(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => self,
            [line] => self.push_line(&format!("/** {} */", line)),
            lines => {
                self.push_line("/**");
                for line in lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */")
            }
        }
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(excerpt) => {
                self.push_excerpt(excerpt);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_excerpt(header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_excerpt(c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Javadoc(lines) => {
                self.push_javadoc(lines);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder<'static> {
    fn default() -> Self {
        Self::java()
    }
}
