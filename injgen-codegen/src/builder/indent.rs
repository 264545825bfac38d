//! Indentation configuration for code generation.

/// Indentation style for generated code.
///
/// gofmt only ever indents with tabs, so that is the only style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Tab character.
    #[default]
    Tab,
}

impl Indent {
    /// gofmt indentation.
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tab => "\t",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::GO.as_str(), "\t");
    }

    #[test]
    fn test_default_is_go() {
        assert_eq!(Indent::default(), Indent::GO);
    }
}
