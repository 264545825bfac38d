//! Fully-qualified names and symbol references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a declared entity: the import path of its package plus its
/// name inside that package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name {
    pub package: String,
    pub name: String,
}

impl Name {
    /// Create a new name.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// What kind of entity a symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Type,
    Function,
    Variable,
}

impl SymbolKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Type => "type",
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to an external entity that generated code must name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolRef {
    pub name: Name,
    pub kind: SymbolKind,
}

impl SymbolRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: Name::new(package, name),
            kind,
        }
    }

    pub fn type_(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, SymbolKind::Type)
    }

    pub fn function(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, SymbolKind::Function)
    }

    pub fn variable(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, SymbolKind::Variable)
    }

    /// The import path of the package declaring this symbol.
    pub fn package(&self) -> &str {
        &self.name.package
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_display() {
        assert_eq!(
            Name::new("example.com/api/v1", "Widget").to_string(),
            "example.com/api/v1.Widget"
        );
        assert_eq!(Name::new("", "Widget").to_string(), "Widget");
    }

    #[test]
    fn test_symbol_ref_display() {
        let symbol = SymbolRef::function("context", "WithValue");
        assert_eq!(symbol.to_string(), "function context.WithValue");
        assert_eq!(symbol.package(), "context");
    }

    #[test]
    fn test_symbol_kind_serde() {
        let json = serde_json::to_string(&SymbolKind::Variable).unwrap();
        assert_eq!(json, "\"variable\"");
    }
}
