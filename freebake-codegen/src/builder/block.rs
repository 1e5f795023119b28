//! Blocks: deduplicated declarations plus a body, over a lexical scope.

use indexmap::IndexMap;
use tracing::trace;

use super::{CodeFragment, Excerpt, Identifier, Scope};
use crate::{Error, Result, excerpt};

/// A unit of emitted statements.
///
/// A block owns a [`Scope`] and two insertion-ordered tables: preferred name
/// to assigned name, and assigned name to its declaration. Declarations form
/// the block's preamble and always render before the body.
///
/// # Example
///
/// ```
/// use freebake_codegen::{Block, CodeBuilder, Scope};
///
/// let scope = Scope::with_fields(["defaults"]);
/// let mut block = Block::new(scope.child());
/// let defaults = block.declare("Person.Builder", "defaults", "new Person.Builder()").unwrap();
/// block.line(freebake_codegen::excerpt!("age = {}.age;", &defaults));
///
/// let mut code = CodeBuilder::java();
/// code.emit(&block.into_fragments());
/// assert_eq!(
///     code.build(),
///     "Person.Builder _defaults = new Person.Builder();\nage = _defaults.age;\n"
/// );
/// ```
#[derive(Debug)]
pub struct Block<'p> {
    scope: Scope<'p>,
    variable_names: IndexMap<String, String>,
    declarations: IndexMap<String, Excerpt>,
    /// Open indentation levels; the first entry is the block's own body.
    body: Vec<Vec<CodeFragment>>,
}

impl<'p> Block<'p> {
    /// A block emitting into `scope`.
    pub fn new(scope: Scope<'p>) -> Self {
        Self {
            scope,
            variable_names: IndexMap::new(),
            declarations: IndexMap::new(),
            body: vec![Vec::new()],
        }
    }

    pub fn scope(&self) -> &Scope<'p> {
        &self.scope
    }

    /// Declare a local `type name = value;` in the preamble and return a
    /// reference to it.
    ///
    /// Repeating an identical declaration under the same preferred name is a
    /// no-op returning the same reference. A different declaration under that
    /// name is an [`Error::IncompatibleDeclaration`].
    pub fn declare(
        &mut self,
        type_name: impl Into<Excerpt>,
        preferred: &str,
        value: impl Into<Excerpt>,
    ) -> Result<Excerpt> {
        let type_name = type_name.into();
        let value = value.into();

        if let Some(name) = self.variable_names.get(preferred) {
            let declaration = excerpt!("{} {} = {};", &type_name, name, &value);
            if let Some(existing) = self.declarations.get(name)
                && *existing != declaration
            {
                return Err(Error::IncompatibleDeclaration {
                    name: name.clone(),
                    declaration: declaration.to_string(),
                    existing: existing.to_string(),
                });
            }
            return Ok(Excerpt::text(name));
        }

        let name = self.pick_name(preferred);
        self.scope.add(Identifier::variable(&name))?;
        trace!(preferred, name = %name, "declared local");

        let declaration = excerpt!("{} {} = {};", &type_name, &name, &value);
        self.variable_names
            .insert(preferred.to_string(), name.clone());
        self.declarations.insert(name.clone(), declaration);
        Ok(Excerpt::text(name))
    }

    /// Reserve a hygienic local name without a preamble entry, for lambda
    /// parameters and locals declared inline in the body.
    pub fn variable(&mut self, preferred: &str) -> Result<Excerpt> {
        let name = self.pick_name(preferred);
        self.scope.add(Identifier::variable(&name))?;
        trace!(preferred, name = %name, "reserved variable");
        Ok(Excerpt::text(name))
    }

    /// A reference to field `name`, qualified with `this.` when a visible
    /// variable shadows it.
    pub fn field(&self, name: &str) -> Excerpt {
        if self.scope.contains(&Identifier::variable(name)) {
            excerpt!("this.{}", name)
        } else {
            Excerpt::text(name)
        }
    }

    pub fn line(&mut self, excerpt: impl Into<Excerpt>) -> &mut Self {
        self.current().push(CodeFragment::Line(excerpt.into()));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.current().push(CodeFragment::Blank);
        self
    }

    pub fn javadoc<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.current().push(CodeFragment::javadoc(lines));
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.body.push(Vec::new());
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        if self.body.len() > 1
            && let Some(level) = self.body.pop()
        {
            self.current().push(CodeFragment::Indent(level));
        }
        self
    }

    /// Append already-rendered fragments at the current indentation.
    pub fn embed(&mut self, fragments: Vec<CodeFragment>) -> &mut Self {
        self.current().extend(fragments);
        self
    }

    /// A nested block whose scope sees everything reserved here.
    ///
    /// Its preamble and body stay private until embedded.
    pub fn inner_block(&self) -> Block<'_> {
        Block::new(self.scope.child())
    }

    /// A nested block with `identifiers` reserved in its own scope.
    ///
    /// Nested type bodies use this to reserve their fields.
    pub fn inner_block_with(
        &self,
        identifiers: impl IntoIterator<Item = Identifier>,
    ) -> Result<Block<'_>> {
        let mut block = self.inner_block();
        for identifier in identifiers {
            block.scope.add(identifier)?;
        }
        Ok(block)
    }

    /// A nested block with `params` reserved as variables.
    pub fn method_body(&self, params: &[&str]) -> Result<Block<'_>> {
        self.inner_block_with(params.iter().map(|p| Identifier::variable(*p)))
    }

    /// Emit `header`, a method body filled by `body`, and a closing brace.
    ///
    /// The body is a [`method_body`](Self::method_body) block, so its
    /// declarations land at the top of the method.
    pub fn method<F>(&mut self, header: impl Into<Excerpt>, params: &[&str], body: F) -> Result<()>
    where
        F: FnOnce(&mut Block<'_>) -> Result<()>,
    {
        let fragments = {
            let mut inner = self.method_body(params)?;
            body(&mut inner)?;
            inner.into_fragments()
        };
        self.line(header);
        self.indent();
        self.embed(fragments);
        self.dedent();
        self.line("}");
        Ok(())
    }

    /// Whether nothing has been declared or emitted.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.body.iter().all(Vec::is_empty)
    }

    /// The preamble declarations followed by the body.
    pub fn into_fragments(mut self) -> Vec<CodeFragment> {
        while self.body.len() > 1 {
            self.dedent();
        }
        let mut fragments: Vec<CodeFragment> = self
            .declarations
            .into_values()
            .map(CodeFragment::Line)
            .collect();
        fragments.extend(self.body.into_iter().flatten());
        fragments
    }

    fn current(&mut self) -> &mut Vec<CodeFragment> {
        if self.body.is_empty() {
            self.body.push(Vec::new());
        }
        let last = self.body.len() - 1;
        &mut self.body[last]
    }

    fn pick_name(&self, preferred: &str) -> String {
        if !self.scope.is_taken(preferred) {
            return preferred.to_string();
        }
        let base = format!("_{}", preferred);
        if !self.scope.is_taken(&base) {
            return base;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{}{}", base, suffix);
            if !self.scope.is_taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl Block<'static> {
    /// A block over a fresh root scope.
    pub fn root() -> Self {
        Self::new(Scope::new())
    }
}
