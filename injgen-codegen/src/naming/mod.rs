//! Naming systems: pure functions from a type to an identifier.
//!
//! Each template placeholder picks the naming system that matches its
//! collision requirements:
//!
//! - [`PUBLIC_PLURAL`] - accessor names that must be unique per type across
//!   the generated tree, with an exception table for manual deconfliction
//! - [`LOWERCASE_PLURAL`] - conventional lowercase resource names
//! - [`RESOURCE`] - user-declared resource names (`+resourceName=...`)
//!   falling back to [`LOWERCASE_PLURAL`]
//! - [`RAW`] - the qualified symbol itself; handled by the
//!   [`SymbolResolver`](crate::SymbolResolver) because it records imports

mod exception;
mod plural;
mod tag_override;

use std::fmt;

use indexmap::IndexMap;
use injgen_core::{lower_first, upper_first};
use injgen_ir::TypeDescriptor;
use injgen_manifest::NamingConfig;

pub use exception::{ExceptionNamer, naming_key};
pub use plural::{PluralNamer, pluralize};
pub use tag_override::TagOverrideNamer;

use crate::tags::RESOURCE_NAME_TAG;

/// Qualified reference, e.g. `v1.Widget`.
pub const RAW: &str = "raw";
/// Capitalized name, e.g. `Widget`.
pub const PUBLIC: &str = "public";
/// Lower-first name, e.g. `widget`.
pub const PRIVATE: &str = "private";
/// Capitalized plural with exception overrides, e.g. `Widgets`.
pub const PUBLIC_PLURAL: &str = "publicPlural";
/// Lowercase plural, e.g. `widgets`.
pub const LOWERCASE_PLURAL: &str = "lowercasePlural";
/// Tag-overridable resource name, e.g. `widgets`.
pub const RESOURCE: &str = "resource";

/// Produces an identifier for a type.
pub trait Namer: Send + Sync {
    fn name(&self, ty: &TypeDescriptor) -> String;
}

impl<T: Namer + ?Sized> Namer for Box<T> {
    fn name(&self, ty: &TypeDescriptor) -> String {
        self.as_ref().name(ty)
    }
}

/// Capitalizes the type name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicNamer;

impl Namer for PublicNamer {
    fn name(&self, ty: &TypeDescriptor) -> String {
        upper_first(&ty.name.name)
    }
}

/// Lowercases the first character of the type name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivateNamer;

impl Namer for PrivateNamer {
    fn name(&self, ty: &TypeDescriptor) -> String {
        lower_first(&ty.name.name)
    }
}

/// Named collection of naming systems.
#[derive(Default)]
pub struct NameSystems {
    systems: IndexMap<String, Box<dyn Namer>>,
}

impl NameSystems {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The naming systems available to the informer template.
    pub fn for_config(naming: &NamingConfig) -> Self {
        let plurals = &naming.plural_exceptions;
        Self::new()
            .with(PUBLIC, PublicNamer)
            .with(PRIVATE, PrivateNamer)
            .with(
                PUBLIC_PLURAL,
                ExceptionNamer::new(
                    naming.exceptions.clone(),
                    naming_key,
                    PluralNamer::public(plurals.clone()),
                ),
            )
            .with(LOWERCASE_PLURAL, PluralNamer::all_lowercase(plurals.clone()))
            .with(
                RESOURCE,
                TagOverrideNamer::new(
                    RESOURCE_NAME_TAG,
                    PluralNamer::all_lowercase(plurals.clone()),
                ),
            )
    }

    /// Register a naming system, replacing any with the same name.
    pub fn with(mut self, name: impl Into<String>, namer: impl Namer + 'static) -> Self {
        self.systems.insert(name.into(), Box::new(namer));
        self
    }

    /// Look up a naming system.
    pub fn get(&self, name: &str) -> Option<&dyn Namer> {
        self.systems.get(name).map(|namer| &**namer)
    }

    /// Name `ty` with the given system.
    pub fn name(&self, system: &str, ty: &TypeDescriptor) -> Option<String> {
        self.get(system).map(|namer| namer.name(ty))
    }

    /// Iterate over registered system names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl fmt::Debug for NameSystems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> TypeDescriptor {
        TypeDescriptor::new("example.com/api/v1", "Widget")
    }

    #[test]
    fn test_for_config_systems() {
        let systems = NameSystems::for_config(&NamingConfig::default());
        let names: Vec<&str> = systems.names().collect();
        assert_eq!(
            names,
            vec![PUBLIC, PRIVATE, PUBLIC_PLURAL, LOWERCASE_PLURAL, RESOURCE]
        );
        // raw is resolved against the import tracker, not registered here
        assert!(systems.get(RAW).is_none());
    }

    #[test]
    fn test_widget_names() {
        let systems = NameSystems::for_config(&NamingConfig::default());
        let ty = widget();

        assert_eq!(systems.name(PUBLIC, &ty).as_deref(), Some("Widget"));
        assert_eq!(systems.name(PRIVATE, &ty).as_deref(), Some("widget"));
        assert_eq!(systems.name(PUBLIC_PLURAL, &ty).as_deref(), Some("Widgets"));
        assert_eq!(systems.name(LOWERCASE_PLURAL, &ty).as_deref(), Some("widgets"));
        assert_eq!(systems.name(RESOURCE, &ty).as_deref(), Some("widgets"));
    }

    #[test]
    fn test_endpoints_irregular() {
        let systems = NameSystems::for_config(&NamingConfig::default());
        let ty = TypeDescriptor::new("k8s.io/api/core/v1", "Endpoints");

        assert_eq!(systems.name(LOWERCASE_PLURAL, &ty).as_deref(), Some("endpoints"));
        assert_eq!(systems.name(PUBLIC_PLURAL, &ty).as_deref(), Some("Endpoints"));
    }

    #[test]
    fn test_with_replaces() {
        let systems = NameSystems::new()
            .with("custom", PublicNamer)
            .with("custom", PrivateNamer);
        assert_eq!(systems.len(), 1);
        assert_eq!(systems.name("custom", &widget()).as_deref(), Some("widget"));
    }
}
