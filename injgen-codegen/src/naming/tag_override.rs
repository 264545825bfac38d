//! Names declared in comment tags.

use injgen_ir::TypeDescriptor;

use super::Namer;
use crate::tags::last_tag_value;

/// Uses the value of a comment tag when the type declares one, otherwise
/// the fallback namer.
pub struct TagOverrideNamer {
    tag_name: String,
    fallback: Box<dyn Namer>,
}

impl TagOverrideNamer {
    pub fn new(tag_name: impl Into<String>, fallback: impl Namer + 'static) -> Self {
        Self {
            tag_name: tag_name.into(),
            fallback: Box::new(fallback),
        }
    }
}

impl Namer for TagOverrideNamer {
    fn name(&self, ty: &TypeDescriptor) -> String {
        match last_tag_value(&self.tag_name, ty.all_comment_lines()) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => self.fallback.name(ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::naming::PluralNamer;

    fn make_namer() -> TagOverrideNamer {
        TagOverrideNamer::new("resourceName", PluralNamer::all_lowercase(BTreeMap::new()))
    }

    #[test]
    fn test_fallback() {
        let ty = TypeDescriptor::new("example.com/api/v1", "Widget").with_comments(["+genclient"]);
        assert_eq!(make_namer().name(&ty), "widgets");
    }

    #[test]
    fn test_tag_wins() {
        let ty = TypeDescriptor::new("example.com/api/v1", "Person")
            .with_comments(["+genclient", "+resourceName=people"]);
        assert_eq!(make_namer().name(&ty), "people");
    }

    #[test]
    fn test_own_lines_override_inherited() {
        let ty = TypeDescriptor::new("example.com/api/v1", "Person")
            .with_inherited_comments(["+resourceName=persons"])
            .with_comments(["+resourceName=people"]);
        assert_eq!(make_namer().name(&ty), "people");
    }

    #[test]
    fn test_empty_tag_falls_back() {
        let ty = TypeDescriptor::new("example.com/api/v1", "Person").with_comments(["+resourceName="]);
        assert_eq!(make_namer().name(&ty), "persons");
    }
}
