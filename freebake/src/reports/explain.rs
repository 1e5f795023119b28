//! Explain command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// The strategy chosen for every property.
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    /// Strategy names in dispatch order, ending with the fallback.
    pub strategies: Vec<&'static str>,
    pub properties: Vec<PropertyStrategy>,
}

#[derive(Debug, Serialize)]
pub struct PropertyStrategy {
    #[serde(rename = "type")]
    pub type_name: String,
    pub property: String,
    pub strategy: &'static str,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Strategy order", &self.strategies.join(" > "));
        out.newline();

        let mut current: Option<&str> = None;
        for row in &self.properties {
            if current != Some(row.type_name.as_str()) {
                if current.is_some() {
                    out.newline();
                }
                out.section(&row.type_name);
                current = Some(row.type_name.as_str());
            }
            out.list_item(&format!("{}: {}", row.property, row.strategy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report() -> ExplainReport {
        ExplainReport {
            strategies: vec!["optional", "default"],
            properties: vec![
                PropertyStrategy {
                    type_name: "com.example.Person".to_string(),
                    property: "name".to_string(),
                    strategy: "default",
                },
                PropertyStrategy {
                    type_name: "com.example.Person".to_string(),
                    property: "email".to_string(),
                    strategy: "optional",
                },
                PropertyStrategy {
                    type_name: "Point".to_string(),
                    property: "x".to_string(),
                    strategy: "default",
                },
            ],
        }
    }

    #[test]
    fn test_render_groups_by_type() {
        let mut out = BufferOutput::default();
        report().render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Strategy order: optional > default",
                "",
                "com.example.Person:",
                "  - name: default",
                "  - email: optional",
                "",
                "Point:",
                "  - x: default",
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["properties"][1]["type"], "com.example.Person");
        assert_eq!(json["properties"][1]["strategy"], "optional");
        assert_eq!(json["strategies"][1], "default");
    }
}
