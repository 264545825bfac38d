//! Parsing and validation of `injgen.toml`.
//!
//! The manifest carries everything a driver hands the generator: where the
//! generated package lives, which API group and version it serves, the
//! collaborator packages generated code calls into, the naming tables and
//! the type universe.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod universe;

pub use config::{
    DEFAULT_CONTROLLER_PACKAGE, DEFAULT_INJECTION_PACKAGE, GroupVersion, NamingConfig,
    OutputConfig, PackagePaths,
};
pub use error::{Error, Result, SourceContext};
use injgen_ir::Universe;
use serde::Deserialize;
pub use universe::{PackageDef, TypeDef, UniverseDef};

/// Root manifest for injgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generated package
    pub output: OutputConfig,

    /// API group and version
    pub group: GroupVersion,

    /// Collaborator package paths
    pub packages: PackagePaths,

    /// Naming tables; defaults apply when omitted
    #[serde(default)]
    pub naming: NamingConfig,

    /// Known packages and their symbols
    #[serde(default)]
    pub universe: UniverseDef,
}

impl Manifest {
    /// Build the type universe declared by this manifest.
    pub fn universe(&self) -> Universe {
        self.universe.to_universe()
    }
}
