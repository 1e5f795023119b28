//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod explain;
mod generate;
mod output;

pub use check::{CheckReport, TypeSummary};
pub use explain::{ExplainReport, PropertyStrategy};
pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::BufferOutput;
