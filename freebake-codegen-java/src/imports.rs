//! Import shortening for generated Java files.

use std::collections::{BTreeSet, HashMap};

use freebake_codegen::{CodeFragment, Excerpt, TypeRenderer};
use freebake_core::QualifiedName;
use indexmap::IndexSet;

/// Decides which types a file imports and how every type reference renders.
///
/// Each simple name is claimed by at most one top-level type, in this order:
///
/// 1. reserved names (nested classes of the generated type, `Override`, and so on),
///    which are never claimed by a type and force qualified rendering;
/// 2. types in the file's own package;
/// 3. `java.lang` types, which are visible without an import;
/// 4. everything else, in order of first appearance.
///
/// A claimed type renders by its name within the package, e.g. `Map.Entry`;
/// one that lost the claim renders fully qualified.
#[derive(Debug, Default)]
pub struct ImportManager {
    claims: HashMap<String, Option<QualifiedName>>,
    imports: BTreeSet<String>,
}

impl ImportManager {
    /// Resolve imports for every type referenced by `fragments`.
    pub fn for_fragments<I, S>(package: &str, reserved: I, fragments: &[CodeFragment]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut referenced: IndexSet<QualifiedName> = IndexSet::new();
        for fragment in fragments {
            fragment.excerpts(&mut |excerpt: &Excerpt| {
                excerpt.visit_types(&mut |name: &QualifiedName| {
                    referenced.insert(name.top_level());
                });
            });
        }
        Self::new(package, reserved, referenced)
    }

    /// Resolve imports for an explicit list of referenced types.
    pub fn new<I, S, R>(package: &str, reserved: I, referenced: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = QualifiedName>,
    {
        let mut manager = Self::default();
        for name in reserved {
            manager.claims.entry(name.into()).or_insert(None);
        }

        let tops: IndexSet<QualifiedName> =
            referenced.into_iter().map(|name| name.top_level()).collect();

        for top in tops.iter().filter(|top| top.package() == package || top.package().is_empty()) {
            manager.claim(top);
        }
        for top in tops.iter().filter(|top| top.package() == "java.lang") {
            manager.claim(top);
        }
        for top in tops.iter().filter(|top| {
            top.package() != package && !top.package().is_empty() && top.package() != "java.lang"
        }) {
            if manager.claim(top) {
                manager.imports.insert(top.to_string());
            }
        }
        manager
    }

    /// Import statements in sorted order.
    pub fn import_lines(&self) -> Vec<String> {
        self.imports
            .iter()
            .map(|name| format!("import {};", name))
            .collect()
    }

    fn claim(&mut self, top: &QualifiedName) -> bool {
        let simple = top.simple_name().to_string();
        match self.claims.get(&simple) {
            Some(Some(existing)) => existing == top,
            Some(None) => false,
            None => {
                self.claims.insert(simple, Some(top.clone()));
                true
            }
        }
    }

    fn is_claimed_by(&self, top: &QualifiedName) -> bool {
        matches!(self.claims.get(top.simple_name()), Some(Some(claimed)) if claimed == top)
    }
}

impl TypeRenderer for ImportManager {
    fn render_type(&self, name: &QualifiedName) -> String {
        if self.is_claimed_by(&name.top_level()) {
            name.local_name()
        } else {
            name.to_string()
        }
    }
}
