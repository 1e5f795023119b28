//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Blocks and generated files produce fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns them into indented text.

use super::Excerpt;

/// Represents a fragment of generated code.
///
/// CodeFragments form an intermediate representation between emission
/// blocks and the final string output, enabling composition and embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(Excerpt),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: Excerpt,
        body: Vec<CodeFragment>,
        close: Option<Excerpt>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A javadoc comment, one entry per line.
    Javadoc(Vec<String>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(excerpt: impl Into<Excerpt>) -> Self {
        Self::Line(excerpt.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment closed by `}`.
    pub fn block(header: impl Into<Excerpt>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(Excerpt::text("}")),
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Create a javadoc fragment.
    pub fn javadoc<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Javadoc(lines.into_iter().map(Into::into).collect())
    }

    /// Visit every excerpt in this fragment, in render order.
    pub fn excerpts<'a>(&'a self, visit: &mut dyn FnMut(&'a Excerpt)) {
        match self {
            Self::Line(excerpt) => visit(excerpt),
            Self::Blank | Self::Javadoc(_) => {}
            Self::Block {
                header,
                body,
                close,
            } => {
                visit(header);
                for fragment in body {
                    fragment.excerpts(visit);
                }
                if let Some(close) = close {
                    visit(close);
                }
            }
            Self::Indent(fragments) | Self::Sequence(fragments) => {
                for fragment in fragments {
                    fragment.excerpts(visit);
                }
            }
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use freebake_core::QualifiedName;

    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line(Excerpt::text("test"))
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(
            CodeFragment::javadoc(["a", "b"]),
            CodeFragment::Javadoc(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_excerpts_visits_nested_fragments() {
        let list = QualifiedName::of("java.util", "List");
        let fragment = CodeFragment::block(
            "class Foo {",
            vec![CodeFragment::indent(vec![CodeFragment::line(&list)])],
        );
        let mut count = 0;
        fragment.excerpts(&mut |_: &Excerpt| count += 1);
        assert_eq!(count, 3);
    }
}
