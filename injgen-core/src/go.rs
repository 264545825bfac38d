//! Go identifier rules.

/// Reserved keywords of the Go language.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Check if a name is a Go keyword.
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Check if a name is a legal Go identifier that is not a keyword.
pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !is_go_keyword(name)
}

/// Strip the characters that commonly appear in import paths but are not
/// legal in Go identifiers (e.g., "go-cmp" -> "gocmp", "k8s.io" -> "k8sio").
pub fn sanitize_package_segment(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_' | '~'))
        .collect()
}

/// Package name for an import path segment.
///
/// The segment is sanitized and lowercased. A result that is a keyword gets
/// a `pkg` suffix (e.g., "Interface" -> "interfacepkg").
pub fn go_package_name(segment: &str) -> String {
    let name = sanitize_package_segment(segment).to_lowercase();
    if is_go_keyword(&name) {
        format!("{}pkg", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_keywords() {
        assert!(is_go_keyword("type"));
        assert!(is_go_keyword("func"));
        assert!(!is_go_keyword("context"));
    }

    #[test]
    fn test_is_go_identifier() {
        assert!(is_go_identifier("Apps"));
        assert!(is_go_identifier("_private"));
        assert!(is_go_identifier("v1beta1"));
        assert!(!is_go_identifier("1abc"));
        assert!(!is_go_identifier("has-dash"));
        assert!(!is_go_identifier("range"));
        assert!(!is_go_identifier(""));
    }

    #[test]
    fn test_sanitize_package_segment() {
        assert_eq!(sanitize_package_segment("go-cmp"), "gocmp");
        assert_eq!(sanitize_package_segment("k8s.io"), "k8sio");
        assert_eq!(sanitize_package_segment("internal_interfaces"), "internalinterfaces");
        assert_eq!(sanitize_package_segment("v1"), "v1");
    }

    #[test]
    fn test_go_package_name() {
        assert_eq!(go_package_name("Widget"), "widget");
        assert_eq!(go_package_name("go-cmp"), "gocmp");
        assert_eq!(go_package_name("Interface"), "interfacepkg");
        assert_eq!(go_package_name("Range"), "rangepkg");
        assert_eq!(go_package_name("Func"), "funcpkg");
    }
}
