//! Assembly of complete Go source files.

use injgen_core::go_package_name;

use crate::builder::CodeBuilder;

/// First line of every generated file, in the form Go tooling recognizes.
pub const GENERATED_HEADER: &str = "Code generated by injgen. DO NOT EDIT.";

/// A Go source file: header comment, package clause, imports and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    package: String,
    imports: Vec<String>,
    body: String,
}

impl GoFile {
    /// Create a file in the package with the given name.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            body: String::new(),
        }
    }

    /// Create a file for a package import path, named after its last segment.
    pub fn for_package_path(path: &str) -> Self {
        let last = path.rsplit('/').next().unwrap_or(path);
        Self::new(go_package_name(last))
    }

    /// Set the import lines, e.g. `"context"` or `corev1 "k8s.io/api/core/v1"`.
    pub fn with_imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Set the declarations following the imports.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go()
            .comment(GENERATED_HEADER)
            .blank()
            .line(&format!("package {}", self.package))
            .blank()
            .when(!self.imports.is_empty(), |b| {
                b.block_with_close("import (", ")", |b| {
                    b.each(&self.imports, |b, line| b.line(line))
                })
                .blank()
            });

        builder.push_raw(self.body.trim_start_matches('\n'));
        let mut out = builder.build();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_imports() {
        let file = GoFile::new("widget")
            .with_imports(["\"context\"", "corev1 \"k8s.io/api/core/v1\""])
            .with_body("type key struct{}");

        let expected = [
            "// Code generated by injgen. DO NOT EDIT.",
            "",
            "package widget",
            "",
            "import (",
            "\t\"context\"",
            "\tcorev1 \"k8s.io/api/core/v1\"",
            ")",
            "",
            "type key struct{}",
            "",
        ]
        .join("\n");
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_render_without_imports() {
        let file = GoFile::new("widget").with_body("\ntype key struct{}\n");
        assert_eq!(
            file.render(),
            "// Code generated by injgen. DO NOT EDIT.\n\npackage widget\n\ntype key struct{}\n"
        );
    }

    #[test]
    fn test_package_name_from_path() {
        assert_eq!(
            GoFile::for_package_path("example.com/informers/apps/v1/replicaset").package(),
            "replicaset"
        );
        assert_eq!(GoFile::for_package_path("example.com/go-widgets").package(), "gowidgets");
        assert_eq!(GoFile::for_package_path("example.com/informers/type").package(), "typepkg");
    }
}
