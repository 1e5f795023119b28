//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model file.
    pub model_path: PathBuf,
    /// One entry per value type, in model order.
    pub types: Vec<TypeSummary>,
}

#[derive(Debug)]
pub struct TypeSummary {
    pub name: String,
    pub generated_builder: String,
    pub property_count: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        out.newline();

        let count = self.types.len();
        out.section(&format!(
            "{} type{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for summary in &self.types {
            out.list_item(&format!(
                "{} -> {} ({} propert{})",
                summary.name,
                summary.generated_builder,
                summary.property_count,
                if summary.property_count == 1 { "y" } else { "ies" },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            model_path: PathBuf::from("freebake.toml"),
            types: vec![TypeSummary {
                name: "com.example.Person".to_string(),
                generated_builder: "com.example.Person_Builder".to_string(),
                property_count: 1,
            }],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "✓ freebake.toml is valid",
                "",
                "1 type:",
                "  - com.example.Person -> com.example.Person_Builder (1 property)",
            ]
        );
    }
}
