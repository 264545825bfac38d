//! Fixed-contract text templates.
//!
//! A template is literal text with placeholders of the form `{{.name}}` or
//! `{{.name|system}}`. `name` selects a [`TemplateValue`] from the
//! [`TemplateContext`]; `system` selects the naming system a type value is
//! rendered with.

mod context;
mod render;

pub use context::{TemplateContext, TemplateValue};

use crate::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub system: Option<String>,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
}

impl Placeholder {
    fn source(&self) -> String {
        match &self.system {
            Some(system) => format!("{{{{.{}|{}}}}}", self.name, system),
            None => format!("{{{{.{}}}}}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Placeholder(Placeholder),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let open_offset = offset + start;
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                return Err(template_error(open_offset, "unterminated placeholder"));
            };
            let placeholder = parse_placeholder(&after_open[..end], open_offset)?;
            segments.push(Segment::Placeholder(placeholder));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Iterate over placeholders in source order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Text(_) => None,
        })
    }
}

fn template_error(offset: usize, reason: impl Into<String>) -> Error {
    Error::Template {
        offset,
        reason: reason.into(),
    }
}

fn parse_placeholder(inner: &str, offset: usize) -> Result<Placeholder> {
    let Some(body) = inner.trim().strip_prefix('.') else {
        return Err(template_error(
            offset,
            format!("placeholder '{}' must start with '.'", inner.trim()),
        ));
    };

    let (name, system) = match body.split_once('|') {
        Some((name, system)) => (name.trim(), Some(system.trim())),
        None => (body.trim(), None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(template_error(
            offset,
            format!("invalid placeholder name '{}'", name),
        ));
    }
    if system.is_some_and(str::is_empty) {
        return Err(template_error(
            offset,
            format!("placeholder '{}' has an empty name system", name),
        ));
    }

    Ok(Placeholder {
        name: name.to_string(),
        system: system.map(str::to_string),
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placeholders() {
        let template = Template::parse("f := {{.factoryGet}}(ctx)\n{{ .type|publicPlural }}").unwrap();
        let placeholders: Vec<_> = template.placeholders().collect();

        assert_eq!(placeholders.len(), 2);
        assert_eq!(placeholders[0].name, "factoryGet");
        assert_eq!(placeholders[0].system, None);
        assert_eq!(placeholders[0].offset, 5);
        assert_eq!(placeholders[1].name, "type");
        assert_eq!(placeholders[1].system.as_deref(), Some("publicPlural"));
        assert_eq!(placeholders[1].source(), "{{.type|publicPlural}}");
    }

    #[test]
    fn test_plain_text() {
        let template = Template::parse("type key struct{}\n").unwrap();
        assert_eq!(template.placeholders().count(), 0);
    }

    #[test]
    fn test_unterminated() {
        let err = Template::parse("inf := f.{{.group}().").unwrap_err();
        assert!(matches!(err, Error::Template { offset: 9, .. }));
    }

    #[test]
    fn test_missing_dot() {
        let err = Template::parse("{{group}}").unwrap_err();
        match err {
            Error::Template { offset, reason } => {
                assert_eq!(offset, 0);
                assert!(reason.contains("must start with '.'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_system() {
        assert!(Template::parse("{{.type|}}").is_err());
        assert!(Template::parse("{{.}}").is_err());
    }
}
