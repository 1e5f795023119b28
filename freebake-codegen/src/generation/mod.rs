//! Code generation outputs and file management.
//!
//! - [`FileRegistry`] - Declarative file registration and generation

mod registry;

pub use registry::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
