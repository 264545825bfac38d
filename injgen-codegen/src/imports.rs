//! Package aliases and import tracking.
//!
//! Aliases are computed once for every package a run may reference, so the
//! alias a package receives never depends on which symbols were resolved
//! first. [`ImportTracker`] then records the subset a file actually uses.

use std::collections::{BTreeMap, BTreeSet};

use injgen_core::{is_go_identifier, sanitize_package_segment};
use serde::Serialize;

use crate::{Error, Result};

/// Alias used when a path yields no usable identifier.
const FALLBACK_ALIAS: &str = "pkg";

/// Alias assignment for a fixed set of package paths.
///
/// The default alias is the last path segment with `.`, `-`, `_` and `~`
/// removed. Paths whose alias collides with another path, a Go keyword or a
/// reserved identifier move to progressively longer suffix joins
/// (`k8s.io/api/core/v1` becomes `corev1`). Collisions left once every
/// candidate is exhausted get a numeric suffix in sorted path order.
///
/// # Example
///
/// ```
/// use injgen_codegen::AliasTable;
///
/// let table = AliasTable::build(["k8s.io/api/core/v1", "k8s.io/api/apps/v1", "context"], &[]);
/// assert_eq!(table.alias("k8s.io/api/core/v1"), Some("corev1"));
/// assert_eq!(table.alias("k8s.io/api/apps/v1"), Some("appsv1"));
/// assert_eq!(table.alias("context"), Some("context"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Assign aliases to `paths`, avoiding `reserved` identifiers.
    pub fn build<'a>(paths: impl IntoIterator<Item = &'a str>, reserved: &[&str]) -> Self {
        let paths: BTreeSet<&str> = paths.into_iter().filter(|p| !p.is_empty()).collect();
        let is_reserved =
            |alias: &str| reserved.iter().any(|r| *r == alias) || !is_go_identifier(alias);

        let candidates: BTreeMap<&str, Vec<String>> =
            paths.iter().map(|path| (*path, alias_candidates(path))).collect();
        let mut levels: BTreeMap<&str, usize> = paths.iter().map(|path| (*path, 0)).collect();

        loop {
            let mut by_alias: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for (path, level) in &levels {
                by_alias
                    .entry(candidates[path][*level].as_str())
                    .or_default()
                    .push(*path);
            }

            let mut bumped = false;
            for (alias, holders) in &by_alias {
                if holders.len() < 2 && !is_reserved(*alias) {
                    continue;
                }
                for path in holders {
                    let count = candidates[path].len();
                    if let Some(level) = levels.get_mut(path)
                        && *level + 1 < count
                    {
                        *level += 1;
                        bumped = true;
                    }
                }
            }
            if !bumped {
                break;
            }
        }

        let mut used: BTreeSet<String> = BTreeSet::new();
        let mut aliases = BTreeMap::new();
        for (path, level) in &levels {
            let base = &candidates[path][*level];
            let mut alias = base.clone();
            let mut suffix = 2;
            while is_reserved(alias.as_str()) || used.contains(&alias) {
                alias = format!("{}{}", base, suffix);
                suffix += 1;
            }
            used.insert(alias.clone());
            aliases.insert(path.to_string(), alias);
        }

        Self { aliases }
    }

    /// Get the alias assigned to a path.
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    /// Iterate over `(path, alias)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Suffix joins of the sanitized path segments, shortest first.
fn alias_candidates(path: &str) -> Vec<String> {
    let segments: Vec<String> = path
        .split('/')
        .map(sanitize_package_segment)
        .filter(|s| !s.is_empty())
        .collect();

    let mut candidates: Vec<String> = Vec::new();
    for start in (0..segments.len()).rev() {
        let candidate = segments[start..].concat();
        if candidate.starts_with(|c: char| c.is_ascii_digit()) || candidates.contains(&candidate) {
            continue;
        }
        candidates.push(candidate);
    }
    if candidates.is_empty() {
        candidates.push(FALLBACK_ALIAS.to_string());
    }
    candidates
}

/// The imports one generated file needs, keyed by package path.
///
/// A path is recorded under one alias and an alias names one path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportTracker {
    by_path: BTreeMap<String, String>,
    #[serde(skip)]
    by_alias: BTreeMap<String, String>,
}

impl ImportTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` is imported as `alias`.
    ///
    /// Adding the same pair again is a no-op.
    pub fn add(&mut self, path: &str, alias: &str) -> Result<()> {
        self.check(path, alias)?;
        self.by_path.insert(path.to_string(), alias.to_string());
        self.by_alias.insert(alias.to_string(), path.to_string());
        Ok(())
    }

    fn check(&self, path: &str, alias: &str) -> Result<()> {
        if let Some(existing) = self.by_path.get(path)
            && existing != alias
        {
            return Err(Error::ImportConflict {
                path: path.to_string(),
                existing: existing.clone(),
                requested: alias.to_string(),
            });
        }
        if let Some(existing) = self.by_alias.get(alias)
            && existing != path
        {
            return Err(Error::AliasConflict {
                alias: alias.to_string(),
                existing: existing.clone(),
                requested: path.to_string(),
            });
        }
        Ok(())
    }

    /// Merge another tracker into this one.
    ///
    /// Either every entry is merged or, on conflict, none is.
    pub fn merge(&mut self, other: &ImportTracker) -> Result<()> {
        for (path, alias) in &other.by_path {
            self.check(path, alias)?;
        }
        for (path, alias) in &other.by_path {
            self.add(path, alias)?;
        }
        Ok(())
    }

    /// Get the alias recorded for a path.
    pub fn alias_of(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    /// Import lines sorted by path.
    ///
    /// The alias is omitted when it equals the last path segment.
    pub fn import_lines(&self) -> Vec<String> {
        self.by_path
            .iter()
            .map(|(path, alias)| {
                let last = path.rsplit('/').next().unwrap_or(path);
                if last == alias {
                    format!("\"{}\"", path)
                } else {
                    format!("{} \"{}\"", alias, path)
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
