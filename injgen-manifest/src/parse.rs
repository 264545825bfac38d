//! Manifest parsing from files and strings.

use std::{collections::BTreeSet, path::Path, str::FromStr};

use injgen_core::is_go_identifier;

use crate::{Error, Manifest, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "injgen.toml")
    }
}

impl Manifest {
    /// Parse an injgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an injgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.output.package.trim().is_empty() {
        return Err(ctx.validation_error("output package cannot be empty", "[output]"));
    }

    let group = &manifest.group;
    if group.name.is_empty() && group.go_name.is_none() {
        return Err(ctx.validation_error(
            "the core group has no name; set group.go-name explicitly",
            "[group]",
        ));
    }
    let group_go_name = group.group_go_name();
    if !is_go_identifier(&group_go_name) {
        return Err(ctx.invalid_identifier_error(group_go_name, "group Go name"));
    }
    if group.version.is_empty() {
        return Err(ctx.validation_error("group version cannot be empty", "version"));
    }
    let version_go_name = group.version_go_name();
    if !is_go_identifier(&version_go_name) {
        return Err(ctx.invalid_identifier_error(&group.version, "group version"));
    }

    for (key, path) in manifest.packages.iter() {
        if path.trim().is_empty() {
            return Err(ctx.validation_error(format!("packages.{} cannot be empty", key), key));
        }
    }

    validate_universe(manifest, ctx)
}

fn validate_universe(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut paths = BTreeSet::new();
    for pkg in &manifest.universe.packages {
        if pkg.path.trim().is_empty() {
            return Err(ctx.validation_error("package path cannot be empty", "path"));
        }
        if !paths.insert(pkg.path.as_str()) {
            return Err(ctx.duplicate_error("package", &pkg.path));
        }

        let mut names = BTreeSet::new();
        for ty in &pkg.types {
            if !is_go_identifier(&ty.name) {
                return Err(ctx.invalid_identifier_error(&ty.name, "type name"));
            }
            if !names.insert(ty.name.as_str()) {
                return Err(ctx.duplicate_error(format!("type in '{}'", pkg.path), &ty.name));
            }
        }
    }
    Ok(())
}
