//! File registration pattern for declarative code generation.
//!
//! Generators register every output file up front; the registry then either
//! previews them (dry runs) or writes them in category order.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::generated("com/example/Person_Builder.java", source));
//! registry.register(FileEntry::starter("freebake.toml", template));
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use freebake_core::{FileRules, GeneratedFile, Overwrite, WriteResult};

/// Category of generated file, determining generation order and behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Generated sources (`*_Builder.java`), always overwritten.
    Generated,
    /// Starter files the user edits afterwards, only written if missing.
    Starter,
}

impl FileCategory {
    /// Get the default overwrite behavior for this category.
    pub fn default_overwrite(&self) -> Overwrite {
        match self {
            FileCategory::Generated => Overwrite::Always,
            FileCategory::Starter => Overwrite::IfMissing,
        }
    }
}

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// Category determining generation behavior.
    pub category: FileCategory,
    /// Override default overwrite behavior.
    pub overwrite: Option<Overwrite>,
}

impl FileEntry {
    /// Create a new file entry with the given category.
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: None,
        }
    }

    /// Create a generated source file (always overwritten).
    pub fn generated(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Generated)
    }

    /// Create a starter file (only if missing).
    pub fn starter(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Starter)
    }

    /// Create from a GeneratedFile, respecting its rules.
    pub fn from_generated<F: GeneratedFile>(
        path: impl Into<String>,
        file: &F,
        category: FileCategory,
    ) -> Self {
        Self::new(path, file.render(), category).with_overwrite(file.rules().overwrite)
    }

    /// Override the default overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Get the effective overwrite behavior.
    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
            .unwrap_or_else(|| self.category.default_overwrite())
    }
}

impl GeneratedFile for FileEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite(),
            header: None,
        }
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Registry for collecting and managing generated files.
///
/// Entries keep registration order within a category:
/// Generated -> Starter
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Register multiple file entries.
    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// Get all registered entries, sorted by category.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Write all files to the output directory.
    ///
    /// Files are written in category order. Returns statistics about what was written.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// File category.
    pub category: FileCategory,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files skipped (already existed).
    pub skipped: usize,
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of skipped files.
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}
