//! Generate operation - builder sources from a model.

use std::path::Path;

use eyre::{Context, Result};
use freebake_codegen_java::{Generator, LanguageCodegen};
use freebake_model::Model;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated sources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Indent override from the command line.
    pub indent: Option<u8>,
}

/// Execute the generate operation.
///
/// Command-line options take precedence over the model's `[options]` table.
pub fn generate(model: &Model, opts: GenerateOptions<'_>) -> Result<GenerateReport> {
    let mut options = model.options.clone();
    if let Some(indent) = opts.indent {
        options = options.with_indent(indent);
    }
    let generator = Generator::new(model).with_options(options);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to generate code")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
            skipped: result.skipped,
        }
    };

    Ok(GenerateReport {
        type_count: model.types.len(),
        property_count: model.property_count(),
        result,
    })
}
