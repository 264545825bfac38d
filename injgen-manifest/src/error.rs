use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for injgen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of a quoted value or key in the source.
    pub fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        if needle.is_empty() {
            return None;
        }
        let quoted = format!("\"{}\"", needle);
        if let Some(pos) = self.src.find(&quoted) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, needle.len())));
        }
        self.src
            .find(needle)
            .map(|pos| SourceSpan::from((pos, needle.len())))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(needle),
            message: message.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            context: context.into(),
        })
    }

    /// Create a duplicate declaration error.
    pub fn duplicate_error(&self, what: impl Into<String>, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::Duplicate {
            src: self.named_source(),
            span: self.find_span(&name),
            what: what.into(),
            name,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(injgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse injgen.toml")]
    #[diagnostic(code(injgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(injgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(
        code(injgen::invalid_identifier),
        help(
            "use only letters, numbers, and underscores, starting with a letter, and avoid Go keywords"
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a Go identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("duplicate {what} '{name}'")]
    #[diagnostic(code(injgen::duplicate))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared more than once")]
        span: Option<SourceSpan>,
        what: String,
        name: String,
    },
}
