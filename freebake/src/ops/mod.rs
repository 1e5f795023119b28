//! Core operations.
//!
//! This module contains the business logic for freebake commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;
pub mod init;

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};
pub use init::{InitOutcome, init};

#[cfg(test)]
pub(crate) const PERSON_MODEL: &str = r#"
[[types]]
name = "com.example.Person"

[[types.properties]]
name = "name"
type = "java.lang.String"

[[types.properties]]
name = "age"
type = "java.util.OptionalInt"
"#;
