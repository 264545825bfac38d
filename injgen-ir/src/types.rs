//! Type descriptors.

use serde::{Deserialize, Serialize};

use crate::Name;

/// Metadata describing one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: Name,
    /// Comment lines directly attached to the type declaration.
    #[serde(default)]
    pub comment_lines: Vec<String>,
    /// Comment lines attached to the enclosing declaration group.
    #[serde(default)]
    pub second_closest_comment_lines: Vec<String>,
    /// Names of the methods and fields declared on the type.
    #[serde(default)]
    pub members: Vec<String>,
}

impl TypeDescriptor {
    /// Create a type descriptor with no comments.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: Name::new(package, name),
            comment_lines: Vec::new(),
            second_closest_comment_lines: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Set the type's own comment lines.
    pub fn with_comments(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.comment_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the comment lines inherited from the enclosing scope.
    pub fn with_inherited_comments(
        mut self,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.second_closest_comment_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// All comment lines in precedence order: inherited lines first, own
    /// lines last.
    pub fn all_comment_lines(&self) -> impl Iterator<Item = &str> {
        self.second_closest_comment_lines
            .iter()
            .chain(&self.comment_lines)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_comment_lines_order() {
        let ty = TypeDescriptor::new("example.com/api/v1", "Widget")
            .with_inherited_comments(["+genclient:nonNamespaced"])
            .with_comments(["Widget is a thing.", "+genclient"]);

        let lines: Vec<&str> = ty.all_comment_lines().collect();
        assert_eq!(
            lines,
            vec!["+genclient:nonNamespaced", "Widget is a thing.", "+genclient"]
        );
    }
}
