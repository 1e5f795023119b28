//! Shared local declarations reused across property hooks.
//!
//! Several strategies need the same helper local inside one method; declaring
//! it through the method's [`Block`] means it is emitted once however many
//! properties ask for it.

use freebake_codegen::{Block, Excerpt, Result, excerpt};
use freebake_model::Datatype;

/// A freshly constructed user builder whose fields hold the constructor
/// defaults, or `None` when the builder cannot be instantiated.
pub fn fresh_builder(code: &mut Block<'_>, datatype: &Datatype) -> Result<Option<Excerpt>> {
    if !datatype.has_builder_factory() {
        return Ok(None);
    }
    code.declare(
        &datatype.generated_builder,
        "defaults",
        excerpt!("new {}()", &datatype.builder),
    )
    .map(Some)
}

/// `builder` viewed as the generated base class, for private field access.
pub fn upcast(code: &mut Block<'_>, datatype: &Datatype, builder: &Excerpt) -> Result<Excerpt> {
    code.declare(&datatype.generated_builder, "base", builder)
}
