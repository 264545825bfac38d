//! The type universe: every package the driver knows about.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Name, SymbolKind, SymbolRef, TypeDescriptor};

/// One package and the symbols it declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub path: String,
    pub types: BTreeMap<String, TypeDescriptor>,
    pub functions: BTreeSet<String>,
    pub variables: BTreeSet<String>,
}

impl Package {
    /// Create an empty package.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Declare a type with no comments.
    pub fn type_(self, name: &str) -> Self {
        let ty = TypeDescriptor::new(self.path.clone(), name);
        self.with_type(ty)
    }

    /// Declare a fully described type. The descriptor's package is
    /// overwritten with this package's path.
    pub fn with_type(mut self, mut ty: TypeDescriptor) -> Self {
        ty.name.package = self.path.clone();
        self.types.insert(ty.name.name.clone(), ty);
        self
    }

    /// Declare a function.
    pub fn function(mut self, name: impl Into<String>) -> Self {
        self.functions.insert(name.into());
        self
    }

    /// Declare a package-level variable or constant.
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variables.insert(name.into());
        self
    }

    /// Check if the package declares `name` as a symbol of `kind`.
    pub fn declares(&self, name: &str, kind: SymbolKind) -> bool {
        match kind {
            SymbolKind::Type => self.types.contains_key(name),
            SymbolKind::Function => self.functions.contains(name),
            SymbolKind::Variable => self.variables.contains(name),
        }
    }
}

/// In-memory type universe keyed by package path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    packages: BTreeMap<String, Package>,
}

impl Universe {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package, returning the previous package with the same path.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        self.packages.insert(package.path.clone(), package)
    }

    /// Builder-style [`Universe::insert`].
    pub fn with_package(mut self, package: Package) -> Self {
        self.insert(package);
        self
    }

    /// Get a package by import path.
    pub fn package(&self, path: &str) -> Option<&Package> {
        self.packages.get(path)
    }

    /// Look up a type descriptor.
    pub fn type_descriptor(&self, name: &Name) -> Option<&TypeDescriptor> {
        self.package(&name.package)?.types.get(&name.name)
    }

    /// Check if a symbol is declared anywhere in the universe.
    pub fn contains(&self, symbol: &SymbolRef) -> bool {
        self.package(symbol.package())
            .is_some_and(|pkg| pkg.declares(&symbol.name.name, symbol.kind))
    }

    /// Iterate over package paths in sorted order.
    pub fn package_paths(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Iterate over every type in the universe, sorted by package then name.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.packages.values().flat_map(|pkg| pkg.types.values())
    }

    /// Check if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }
}
