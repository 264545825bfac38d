use injgen_ir::{Name, SymbolKind};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort generation for one type.
///
/// Every variant is reported to the caller unchanged; nothing is written to
/// the destination when one is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed tag '{line}': {reason}")]
    #[diagnostic(code(injgen::malformed_tag))]
    MalformedTag { line: String, reason: String },

    #[error("unknown {kind} '{name}'")]
    #[diagnostic(
        code(injgen::unknown_symbol),
        help("declare it in the type universe or check the configured package paths")
    )]
    UnknownSymbol { name: Name, kind: SymbolKind },

    #[error("package '{path}' has no import alias")]
    #[diagnostic(
        code(injgen::unknown_package),
        help("packages must be part of the universe the generator was created with")
    )]
    UnknownPackage { path: String },

    #[error("template placeholder '{name}' is not bound")]
    #[diagnostic(code(injgen::missing_placeholder))]
    MissingPlaceholder { name: String },

    #[error("unknown name system '{system}' in placeholder '{placeholder}'")]
    #[diagnostic(
        code(injgen::unknown_name_system),
        help("available name systems: raw, public, private, publicPlural, lowercasePlural, resource")
    )]
    UnknownNameSystem { placeholder: String, system: String },

    #[error("placeholder '{placeholder}': {reason}")]
    #[diagnostic(code(injgen::invalid_placeholder))]
    InvalidPlaceholder { placeholder: String, reason: String },

    #[error("invalid template at byte {offset}: {reason}")]
    #[diagnostic(code(injgen::template))]
    Template { offset: usize, reason: String },

    #[error("package '{path}' is imported as '{existing}', cannot import it as '{requested}'")]
    #[diagnostic(code(injgen::import_conflict))]
    ImportConflict {
        path: String,
        existing: String,
        requested: String,
    },

    #[error("alias '{alias}' already names package '{existing}', cannot reuse it for '{requested}'")]
    #[diagnostic(code(injgen::alias_conflict))]
    AliasConflict {
        alias: String,
        existing: String,
        requested: String,
    },

    #[error("failed to write generated output")]
    #[diagnostic(code(injgen::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed_tag(line: &str, reason: impl Into<String>) -> Self {
        Error::MalformedTag {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
