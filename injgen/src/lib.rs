//! Knative-style informer injection generator.
//!
//! Loads an `injgen.toml` manifest and generates, for every type tagged
//! `+genclient`, a Go package that registers the type's informer with the
//! injection registry and exposes a typed `Get` accessor.
//!
//! ```no_run
//! use injgen::Session;
//!
//! let session = Session::open("injgen.toml")?;
//! for file in session.generate_all()? {
//!     println!("{}: {} bytes", file.package, file.source.len());
//! }
//! # Ok::<(), eyre::Report>(())
//! ```

mod session;

pub use injgen_codegen as codegen;
pub use injgen_ir as ir;
pub use injgen_manifest as manifest;
pub use injgen_manifest::Manifest;
pub use session::{InformerFile, Session};
