//! Core utilities and types for the freebake builder generator.
//!
//! This crate provides the fundamental naming and type vocabulary shared by
//! the model, the emission engine and the Java code generator.

mod file;
mod names;
mod types;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// Names and types
pub use names::QualifiedName;
pub use types::{PrimitiveType, TypeName, TypeParseError};
// String utilities
pub use utils::{capitalize, to_upper_snake_case};
