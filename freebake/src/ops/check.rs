//! Check operation - model validation.

use std::path::Path;

use freebake_model::Model;

use crate::reports::{CheckReport, TypeSummary};

/// Execute the check operation.
///
/// Parsing already validated the model; this summarises what it declares.
pub fn check(model: &Model, model_path: &Path) -> CheckReport {
    let types = model
        .types
        .iter()
        .map(|definition| TypeSummary {
            name: definition.datatype.type_name.to_string(),
            generated_builder: definition.datatype.generated_builder.to_string(),
            property_count: definition.properties.len(),
        })
        .collect();

    CheckReport {
        model_path: model_path.to_path_buf(),
        types,
    }
}
