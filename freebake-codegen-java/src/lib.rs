//! Java builder generation for freebake.
//!
//! For every value type in the model this crate writes one
//! `<Type>_Builder.java` file. Each property is handled by a strategy chosen
//! from an ordered registry (see [`property`]); the [`BuilderFile`]
//! orchestrator invokes the strategy hooks in a fixed order.

mod declarations;
mod generator;
mod imports;
mod java;

pub mod files;
pub mod property;

pub use files::BuilderFile;
pub use freebake_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::{Generator, StrategyChoice};
pub use imports::ImportManager;
pub use property::{Config, Initially, PropertyCodeGenerator};
