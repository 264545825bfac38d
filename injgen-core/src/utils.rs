//! Shared utility functions for code generation.

/// Uppercase the first character (e.g., "widget" -> "Widget")
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Widget" -> "widget")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Dashes are treated like underscores, so API group names such as
/// "cluster-api" become "ClusterApi".
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-']).map(upper_first).collect()
}
