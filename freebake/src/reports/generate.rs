//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of value types in the model.
    pub type_count: usize,

    /// Number of properties across all types.
    pub property_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        written: Vec<String>,
        skipped: Vec<String>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written {
                output_dir,
                written,
                skipped,
            } => {
                out.preformatted(&format!(
                    "{} type{}, {} propert{}",
                    self.type_count,
                    if self.type_count == 1 { "" } else { "s" },
                    self.property_count,
                    if self.property_count == 1 { "y" } else { "ies" },
                ));
                out.newline();
                out.key_value("Generated", &output_dir.display().to_string());
                for path in written {
                    out.added_item(path);
                }
                for path in skipped {
                    out.kept_item(path);
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}
