//! Directives embedded in documentation comments.
//!
//! A directive is a comment line starting with `+`, optionally followed by
//! `=value`:
//!
//! ```text
//! // +genclient
//! // +genclient:nonNamespaced
//! // +genclient:skipVerbs=patch,deleteCollection
//! // +resourceName=endpoints
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Error, Result};

/// Prefix marking a directive line.
pub const TAG_MARKER: &str = "+";

/// Directive namespace owned by client generation.
const GENCLIENT_PREFIX: &str = "genclient:";

/// Tag overriding the resource name of a type.
pub const RESOURCE_NAME_TAG: &str = "resourceName";

const GENCLIENT: &str = "genclient";
const NON_NAMESPACED: &str = "genclient:nonNamespaced";
const NO_VERBS: &str = "genclient:noVerbs";
const NO_STATUS: &str = "genclient:noStatus";
const READONLY: &str = "genclient:readonly";
const SKIP_VERBS: &str = "genclient:skipVerbs";
const ONLY_VERBS: &str = "genclient:onlyVerbs";
const METHOD: &str = "genclient:method";

const SUPPORTED_GENCLIENT_TAGS: &[&str] = &[
    GENCLIENT,
    NON_NAMESPACED,
    NO_VERBS,
    NO_STATUS,
    READONLY,
    SKIP_VERBS,
    ONLY_VERBS,
    METHOD,
];

/// Legacy bare tags that were replaced by `genclient:` forms.
const LEGACY_TAGS: &[&str] = &["nonNamespaced", "readonly"];

/// One directive occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTag<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// The trimmed comment line the directive came from.
    pub line: &'a str,
}

/// Collect directives by key, keeping every occurrence in input order.
pub fn extract_comment_tags<'a>(
    marker: &str,
    lines: impl IntoIterator<Item = &'a str>,
) -> IndexMap<&'a str, Vec<CommentTag<'a>>> {
    let mut tags: IndexMap<&str, Vec<CommentTag>> = IndexMap::new();
    for line in lines {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(marker) else {
            continue;
        };
        let (key, value) = rest.split_once('=').unwrap_or((rest, ""));
        tags.entry(key).or_default().push(CommentTag { key, value, line });
    }
    tags
}

/// Value of the last occurrence of `key`, so later lines override earlier ones.
pub fn last_tag_value<'a>(key: &str, lines: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    extract_comment_tags(TAG_MARKER, lines)
        .get(key)
        .and_then(|entries| entries.last())
        .map(|tag| tag.value)
}

/// A client verb that can be skipped or kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verb {
    Create,
    Update,
    UpdateStatus,
    Delete,
    DeleteCollection,
    Get,
    List,
    Watch,
    Patch,
}

impl Verb {
    /// All verbs, in canonical order.
    pub const ALL: [Verb; 9] = [
        Verb::Create,
        Verb::Update,
        Verb::UpdateStatus,
        Verb::Delete,
        Verb::DeleteCollection,
        Verb::Get,
        Verb::List,
        Verb::Watch,
        Verb::Patch,
    ];

    /// Verbs kept by `+genclient:readonly`.
    pub const READONLY: [Verb; 3] = [Verb::Get, Verb::List, Verb::Watch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::UpdateStatus => "updateStatus",
            Verb::Delete => "delete",
            Verb::DeleteCollection => "deleteCollection",
            Verb::Get => "get",
            Verb::List => "list",
            Verb::Watch => "watch",
            Verb::Patch => "patch",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or(())
    }
}

/// Directives parsed from a type's comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSet {
    /// `+genclient`: the type takes part in generation.
    pub generate_client: bool,
    /// `+genclient:nonNamespaced`: the type is cluster scoped.
    pub non_namespaced: bool,
    pub no_status: bool,
    pub no_verbs: bool,
    /// Verbs not generated, in canonical order.
    pub skip_verbs: Vec<Verb>,
    /// `+resourceName=...`
    pub resource_name: Option<String>,
}

impl TagSet {
    /// Parse directives from comment lines.
    ///
    /// Pass inherited lines first and the type's own lines last; for valued
    /// directives the last occurrence wins.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let tags = extract_comment_tags(TAG_MARKER, lines);
        let mut set = TagSet::default();

        if let Some(entries) = tags.get(GENCLIENT) {
            if let Some(tag) = entries.iter().find(|t| !t.value.is_empty()) {
                return Err(Error::malformed_tag(
                    tag.line,
                    "+genclient takes no value; use '+genclient' to enable generation or omit it to disable",
                ));
            }
            set.generate_client = true;
        }

        for legacy in LEGACY_TAGS {
            if let Some(tag) = tags.get(*legacy).and_then(|e| e.iter().find(|t| !t.value.is_empty())) {
                return Err(Error::malformed_tag(
                    tag.line,
                    format!("use '+{}{}' instead", GENCLIENT_PREFIX, legacy),
                ));
            }
        }

        set.non_namespaced = tags.contains_key(NON_NAMESPACED);
        set.no_verbs = tags.contains_key(NO_VERBS);
        set.no_status = tags.contains_key(NO_STATUS);

        let skip_tag = tags.get(SKIP_VERBS).and_then(|e| e.last());
        let skip = match skip_tag {
            Some(tag) => parse_verbs(tag)?,
            None => Vec::new(),
        };

        let mut only = Vec::new();
        if tags.contains_key(READONLY) {
            only.extend(Verb::READONLY);
        }
        if let Some(tag) = tags.get(ONLY_VERBS).and_then(|e| e.last()) {
            only.extend(parse_verbs(tag)?);
        }

        if let (Some(tag), Some(verb)) = (skip_tag, skip.iter().find(|v| only.contains(*v))) {
            return Err(Error::malformed_tag(
                tag.line,
                format!("verb '{}' is both skipped and kept by genclient:onlyVerbs or genclient:readonly", verb),
            ));
        }

        set.skip_verbs = if only.is_empty() {
            skip
        } else {
            Verb::ALL.into_iter().filter(|v| !only.contains(v)).collect()
        };
        set.skip_verbs.sort();
        set.skip_verbs.dedup();

        if let Some(tag) = tags.get(RESOURCE_NAME_TAG).and_then(|e| e.last()) {
            if tag.value.is_empty() || tag.value.contains(char::is_whitespace) {
                return Err(Error::malformed_tag(
                    tag.line,
                    "+resourceName needs a single word value, e.g. '+resourceName=endpoints'",
                ));
            }
            set.resource_name = Some(tag.value.to_string());
        }

        for key in tags.keys() {
            if key.starts_with(GENCLIENT) && !SUPPORTED_GENCLIENT_TAGS.contains(key) {
                tracing::warn!(tag = %key, "ignoring unknown genclient directive");
            }
        }

        Ok(set)
    }

    /// Check if the type lives in a namespace.
    pub fn namespaced(&self) -> bool {
        !self.non_namespaced
    }

    /// Check if a verb will be generated.
    pub fn has_verb(&self, verb: Verb) -> bool {
        !self.no_verbs && !self.skip_verbs.contains(&verb)
    }
}

fn parse_verbs(tag: &CommentTag<'_>) -> Result<Vec<Verb>> {
    if tag.value.trim().is_empty() {
        return Err(Error::malformed_tag(
            tag.line,
            format!("+{} needs a comma separated list of verbs", tag.key),
        ));
    }
    tag.value
        .split(',')
        .map(str::trim)
        .map(|v| {
            v.parse::<Verb>()
                .map_err(|_| Error::malformed_tag(tag.line, format!("unknown verb '{}'", v)))
        })
        .collect()
}
