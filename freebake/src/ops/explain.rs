//! Explain operation - strategy selection per property.

use freebake_codegen_java::{Generator, property};
use freebake_model::Model;

use crate::reports::{ExplainReport, PropertyStrategy};

/// Execute the explain operation.
pub fn explain(model: &Model) -> ExplainReport {
    let properties = Generator::new(model)
        .explain()
        .into_iter()
        .map(|choice| PropertyStrategy {
            type_name: choice.type_name,
            property: choice.property,
            strategy: choice.strategy,
        })
        .collect();

    ExplainReport {
        strategies: property::strategy_names().collect(),
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::PERSON_MODEL;

    #[test]
    fn test_explain() {
        let model: Model = PERSON_MODEL.parse().unwrap();
        let report = explain(&model);
        assert_eq!(report.strategies.last(), Some(&"default"));
        let strategies: Vec<_> = report.properties.iter().map(|p| p.strategy).collect();
        assert_eq!(strategies, ["default", "primitive-optional"]);
    }
}
