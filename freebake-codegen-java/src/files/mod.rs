//! Generated Java source files.

mod builder_file;

pub use builder_file::BuilderFile;
