//! Line-oriented building blocks for generated Go files.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
