//! Type universe and symbol types for the injgen generator.
//!
//! This crate holds the metadata a driver supplies to the generator: the
//! packages it knows about, the types, functions and variables each one
//! declares, and the documentation comments attached to every type.
//!
//! # Architecture
//!
//! ```text
//! injgen.toml → injgen-manifest (parsing) → injgen-ir (universe) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Immutable once handed to the generator
//! - Keyed by fully-qualified identity (package path + name)
//! - Self-contained (no external dependencies beyond serde)

mod name;
mod types;
mod universe;

pub use name::{Name, SymbolKind, SymbolRef};
pub use types::TypeDescriptor;
pub use universe::{Package, Universe};
