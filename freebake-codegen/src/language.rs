//! Language generator abstraction.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory
    pub written: Vec<String>,
    /// Files left untouched because they already existed
    pub skipped: Vec<String>,
}

/// File preview for dry-runs
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
