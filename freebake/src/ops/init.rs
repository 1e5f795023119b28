//! Init operation - starter model file.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use freebake_codegen::{FileEntry, FileRegistry};

use crate::commands::MODEL_FILE;

const STARTER_MODEL: &str = r#"# Value types to generate `<Type>_Builder` classes for.

[options]
indent = 2
nullable_annotation = "javax.annotation.Nullable"

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
name = "age"
type = "java.util.OptionalInt"
"#;

/// What `init` did with the model file.
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write a starter `freebake.toml` into `dir`, leaving an existing one alone.
pub fn init(dir: &Path) -> Result<InitOutcome> {
    let mut registry = FileRegistry::new();
    registry.register(FileEntry::starter(MODEL_FILE, STARTER_MODEL));
    let stats = registry
        .write_all(dir)
        .wrap_err_with(|| format!("Failed to write {}", MODEL_FILE))?;

    let path = dir.join(MODEL_FILE);
    if stats.written > 0 {
        Ok(InitOutcome::Created(path))
    } else {
        Ok(InitOutcome::AlreadyExists(path))
    }
}
