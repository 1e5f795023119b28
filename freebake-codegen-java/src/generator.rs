use std::path::Path;

use eyre::{Result, WrapErr};
use freebake_codegen::{
    FileCategory, FileEntry, FileRegistry, GenerateResult, LanguageCodegen, PreviewFile,
};
use freebake_model::{Model, Options};
use tracing::{debug, info};

use crate::{
    files::BuilderFile,
    property::{self, Config},
};

/// Java generator producing one `<Type>_Builder.java` per value type.
pub struct Generator<'a> {
    model: &'a Model,
    options: Options,
}

/// The strategy picked for one property, as reported by `freebake explain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyChoice {
    pub type_name: String,
    pub property: String,
    pub strategy: &'static str,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .registry()?
            .preview()
            .into_iter()
            .map(|entry| PreviewFile {
                path: entry.path,
                content: entry.content,
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let stats = self.registry()?.write_all(output_dir)?;
        info!(
            written = stats.written,
            skipped = stats.skipped,
            output = %output_dir.display(),
            "generated builders"
        );
        Ok(GenerateResult {
            written: stats.written_paths,
            skipped: stats.skipped_paths,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            options: model.options.clone(),
        }
    }

    /// Replace the model's `[options]`, e.g. with command-line overrides.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Build every file, in model order.
    pub fn files(&self) -> Result<Vec<BuilderFile>> {
        self.model
            .types
            .iter()
            .map(|definition| {
                BuilderFile::new(definition, &self.options).wrap_err_with(|| {
                    format!(
                        "failed to generate a builder for {}",
                        definition.datatype.type_name
                    )
                })
            })
            .collect()
    }

    /// Which strategy handles each property, without emitting any code.
    pub fn explain(&self) -> Vec<StrategyChoice> {
        self.model
            .types
            .iter()
            .flat_map(|definition| {
                definition.properties.iter().map(move |property| {
                    let (strategy, _) = property::select(Config {
                        datatype: &definition.datatype,
                        property,
                        options: &self.options,
                    });
                    StrategyChoice {
                        type_name: definition.datatype.type_name.to_string(),
                        property: property.name.clone(),
                        strategy,
                    }
                })
            })
            .collect()
    }

    fn registry(&self) -> Result<FileRegistry> {
        let mut registry = FileRegistry::new();
        for file in self.files()? {
            registry.register(FileEntry::from_generated(
                file.relative_path(),
                &file,
                FileCategory::Generated,
            ));
        }
        debug!(files = registry.len(), "registered builder files");
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"
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
name = "tags"
type = "java.util.List<java.lang.String>"

[[types]]
name = "Point"

[[types.properties]]
name = "x"
type = "java.util.OptionalDouble"
"#;

    #[test]
    fn test_explain() {
        let model: Model = MODEL.parse().unwrap();
        let choices = Generator::new(&model).explain();
        let summary: Vec<_> = choices
            .iter()
            .map(|c| (c.type_name.as_str(), c.property.as_str(), c.strategy))
            .collect();
        assert_eq!(
            summary,
            [
                ("com.example.Person", "name", "default"),
                ("com.example.Person", "nickname", "nullable"),
                ("com.example.Person", "tags", "list"),
                ("Point", "x", "primitive-optional"),
            ]
        );
    }

    #[test]
    fn test_preview_paths() {
        let model: Model = MODEL.parse().unwrap();
        let files = Generator::new(&model).preview().unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["com/example/Person_Builder.java", "Point_Builder.java"]);
        assert!(!files[1].content.contains("package"));
    }

    #[test]
    fn test_options_override_indent() {
        let model: Model = MODEL.parse().unwrap();
        let options = model.options.clone().with_indent(4);
        let files = Generator::new(&model).with_options(options).preview().unwrap();
        assert!(files[0].content.contains("\n    private String name;\n"));
    }

    #[test]
    fn test_generate_writes_under_package_dirs() {
        let model: Model = MODEL.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = Generator::new(&model).generate(dir.path()).unwrap();
        assert_eq!(result.written.len(), 2);
        assert!(result.skipped.is_empty());
        assert!(dir.path().join("com/example/Person_Builder.java").is_file());
        assert!(dir.path().join("Point_Builder.java").is_file());
    }
}
