//! Source emission engine for the freebake builder generator.
//!
//! This crate provides the language-agnostic pieces the Java generator is
//! built on: hygienic naming over nested scopes, deduplicated declarations,
//! and rendering of code fragments.
//!
//! # Module Organization
//!
//! - [`builder`] - Emission building blocks (Excerpt, Scope, Block, CodeBuilder, etc.)
//! - [`generation`] - Output management (FileRegistry, FileEntry, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
mod error;
pub mod generation;
mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{
    Block, CodeBuilder, CodeFragment, Excerpt, Identifier, Indent, QualifiedTypes, Renderable,
    Scope, TypeRenderer,
};
pub use error::{Error, Result};
pub use generation::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
