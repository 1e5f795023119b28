//! Code emission building blocks.
//!
//! - [`Excerpt`] - Immutable, structurally-compared source fragments
//! - [`Scope`] - Parent-linked namespaces of reserved identifiers
//! - [`Block`] - Declaration-deduplicating preamble plus body
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`CodeBuilder`] - Renders fragments into indented text
//! - [`Indent`] - Indentation configuration

mod block;
mod code_builder;
mod excerpt;
mod indent;
mod renderable;
mod scope;

pub use block::Block;
pub use code_builder::CodeBuilder;
pub use excerpt::{Excerpt, QualifiedTypes, TypeRenderer};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use scope::{Identifier, Scope};
