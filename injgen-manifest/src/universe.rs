//! `[universe]` section: the packages and symbols known to the generator.

use injgen_ir::{Package, TypeDescriptor, Universe};
use serde::Deserialize;

/// Declared packages, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UniverseDef {
    #[serde(default)]
    pub packages: Vec<PackageDef>,
}

/// One `[[universe.packages]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDef {
    pub path: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub variables: Vec<String>,
}

/// A type declared by a package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeDef {
    pub name: String,
    /// Comment lines attached to the type itself.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Comment lines attached to the enclosing declaration group.
    #[serde(default)]
    pub parent_comments: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

impl UniverseDef {
    /// Build the in-memory universe.
    pub fn to_universe(&self) -> Universe {
        self.packages
            .iter()
            .map(PackageDef::to_package)
            .fold(Universe::new(), Universe::with_package)
    }
}

impl PackageDef {
    fn to_package(&self) -> Package {
        let mut pkg = Package::new(&self.path);
        for ty in &self.types {
            let mut descriptor = TypeDescriptor::new(&self.path, &ty.name)
                .with_inherited_comments(ty.parent_comments.iter().cloned())
                .with_comments(ty.comments.iter().cloned());
            descriptor.members = ty.members.clone();
            pkg = pkg.with_type(descriptor);
        }
        for function in &self.functions {
            pkg = pkg.function(function);
        }
        for variable in &self.variables {
            pkg = pkg.variable(variable);
        }
        pkg
    }
}

#[cfg(test)]
mod tests {
    use injgen_ir::{Name, SymbolRef};

    use super::*;

    #[test]
    fn test_to_universe() {
        let def: UniverseDef = toml::from_str(
            r#"
            [[packages]]
            path = "example.com/api/v1"
            types = [
                { name = "Widget", comments = ["+genclient"], parent-comments = ["+groupName=apps"] },
            ]

            [[packages]]
            path = "context"
            types = [{ name = "Context" }]
            functions = ["WithValue"]
            "#,
        )
        .expect("Failed to parse universe");

        let universe = def.to_universe();
        assert_eq!(universe.len(), 2);
        assert!(universe.contains(&SymbolRef::function("context", "WithValue")));

        let widget = universe
            .type_descriptor(&Name::new("example.com/api/v1", "Widget"))
            .expect("Widget missing");
        assert_eq!(widget.comment_lines, vec!["+genclient"]);
        assert_eq!(widget.second_closest_comment_lines, vec!["+groupName=apps"]);
    }
}
