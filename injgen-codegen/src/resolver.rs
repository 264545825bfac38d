//! Binding abstract symbol references to qualified Go text.

use std::sync::Arc;

use injgen_ir::{SymbolKind, SymbolRef, TypeDescriptor, Universe};
use serde::Serialize;

use crate::{AliasTable, Error, ImportTracker, Result};

/// Standard library symbols that resolve without being declared in the
/// universe.
pub const PRELUDE: &[(&str, &str, SymbolKind)] = &[
    ("context", "Context", SymbolKind::Type),
    ("context", "WithValue", SymbolKind::Function),
];

/// Read-only view of the declared packages and their symbols.
pub trait TypeUniverse {
    /// Check if the symbol is declared.
    fn declares(&self, symbol: &SymbolRef) -> bool;

    /// Every package path the universe knows about.
    fn package_paths(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl TypeUniverse for Universe {
    fn declares(&self, symbol: &SymbolRef) -> bool {
        self.contains(symbol)
    }

    fn package_paths(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(Universe::package_paths(self))
    }
}

impl<U: TypeUniverse + ?Sized> TypeUniverse for &U {
    fn declares(&self, symbol: &SymbolRef) -> bool {
        (**self).declares(symbol)
    }

    fn package_paths(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).package_paths()
    }
}

fn in_prelude(symbol: &SymbolRef) -> bool {
    PRELUDE.iter().any(|(package, name, kind)| {
        symbol.package() == *package && symbol.name.name == *name && symbol.kind == *kind
    })
}

/// A symbol bound for one output package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub reference: SymbolRef,
    /// Package qualifier; `None` when the symbol is declared in the output
    /// package itself.
    pub alias: Option<String>,
}

impl Symbol {
    /// The text generated code uses to name this symbol.
    pub fn qualified(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{}.{}", alias, self.reference.name.name),
            None => self.reference.name.name.clone(),
        }
    }
}

/// Resolves references for one output package and records the imports
/// they need.
pub struct SymbolResolver<'u, U: TypeUniverse + ?Sized> {
    universe: &'u U,
    local_package: String,
    aliases: Arc<AliasTable>,
    imports: ImportTracker,
}

impl<'u, U: TypeUniverse + ?Sized> SymbolResolver<'u, U> {
    pub fn new(universe: &'u U, local_package: impl Into<String>, aliases: Arc<AliasTable>) -> Self {
        Self {
            universe,
            local_package: local_package.into(),
            aliases,
            imports: ImportTracker::new(),
        }
    }

    /// Check that a symbol is declared without importing it.
    pub fn require(&self, symbol: &SymbolRef) -> Result<()> {
        if self.universe.declares(symbol) || in_prelude(symbol) {
            Ok(())
        } else {
            Err(Error::UnknownSymbol {
                name: symbol.name.clone(),
                kind: symbol.kind,
            })
        }
    }

    /// Resolve a reference, recording the import its package needs.
    pub fn resolve(
        &mut self,
        package: impl Into<String>,
        name: impl Into<String>,
        kind: SymbolKind,
    ) -> Result<Symbol> {
        self.resolve_ref(SymbolRef::new(package, name, kind))
    }

    pub fn resolve_ref(&mut self, reference: SymbolRef) -> Result<Symbol> {
        self.require(&reference)?;
        let alias = self.qualifier(reference.package())?;
        tracing::trace!(symbol = %reference, alias = ?alias, "resolved symbol");
        Ok(Symbol { reference, alias })
    }

    /// Qualified text for a type, as the `raw` name system renders it.
    pub fn resolve_type(&mut self, ty: &TypeDescriptor) -> Result<String> {
        let symbol = self.resolve_ref(SymbolRef::type_(&ty.name.package, &ty.name.name))?;
        Ok(symbol.qualified())
    }

    fn qualifier(&mut self, package: &str) -> Result<Option<String>> {
        if package == self.local_package {
            return Ok(None);
        }
        let alias = self
            .aliases
            .alias(package)
            .ok_or_else(|| Error::UnknownPackage {
                path: package.to_string(),
            })?
            .to_string();
        self.imports.add(package, &alias)?;
        Ok(Some(alias))
    }

    /// The output package symbols are resolved for.
    pub fn local_package(&self) -> &str {
        &self.local_package
    }

    /// Imports recorded so far.
    pub fn imports(&self) -> &ImportTracker {
        &self.imports
    }

    pub fn into_imports(self) -> ImportTracker {
        self.imports
    }
}

#[cfg(test)]
mod tests {
    use injgen_ir::Package;

    use super::*;

    const OUTPUT: &str = "example.com/client/injection/informers/apps/v1/widget";

    fn make_universe() -> Universe {
        Universe::new()
            .with_package(Package::new("k8s.io/api/core/v1").type_("Pod"))
            .with_package(Package::new("example.com/api/v1").type_("Widget"))
            .with_package(Package::new(OUTPUT).function("Get"))
    }

    fn make_resolver(universe: &Universe) -> SymbolResolver<'_, Universe> {
        let paths = universe.package_paths().chain(PRELUDE.iter().map(|(p, _, _)| *p));
        let aliases = Arc::new(AliasTable::build(paths, &[]));
        SymbolResolver::new(universe, OUTPUT, aliases)
    }

    #[test]
    fn test_foreign_symbol_is_qualified() {
        let universe = make_universe();
        let mut resolver = make_resolver(&universe);

        let pod = resolver
            .resolve("k8s.io/api/core/v1", "Pod", SymbolKind::Type)
            .unwrap();
        assert_eq!(pod.qualified(), "corev1.Pod");
        assert_eq!(resolver.imports().alias_of("k8s.io/api/core/v1"), Some("corev1"));
    }

    #[test]
    fn test_local_symbol_is_unqualified() {
        let universe = make_universe();
        let mut resolver = make_resolver(&universe);

        let get = resolver.resolve(OUTPUT, "Get", SymbolKind::Function).unwrap();
        assert_eq!(get.qualified(), "Get");
        assert!(resolver.imports().is_empty());
    }

    #[test]
    fn test_prelude_symbols() {
        let universe = make_universe();
        let mut resolver = make_resolver(&universe);

        let ctx = resolver.resolve("context", "Context", SymbolKind::Type).unwrap();
        assert_eq!(ctx.qualified(), "context.Context");
        assert_eq!(resolver.imports().import_lines(), vec!["\"context\""]);
    }

    #[test]
    fn test_wrong_kind_is_unknown() {
        let universe = make_universe();
        let mut resolver = make_resolver(&universe);

        let err = resolver
            .resolve("k8s.io/api/core/v1", "Pod", SymbolKind::Function)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSymbol { kind: SymbolKind::Function, .. }));
        assert!(resolver.imports().is_empty());
    }

    #[test]
    fn test_repeated_resolution_imports_once() {
        let universe = make_universe();
        let mut resolver = make_resolver(&universe);

        let widget = TypeDescriptor::new("example.com/api/v1", "Widget");
        // v1 is taken by k8s.io/api/core/v1 as well
        assert_eq!(resolver.resolve_type(&widget).unwrap(), "apiv1.Widget");
        assert_eq!(resolver.resolve_type(&widget).unwrap(), "apiv1.Widget");
        assert_eq!(resolver.into_imports().len(), 1);
    }

    #[test]
    fn test_require_does_not_import() {
        let universe = make_universe();
        let resolver = make_resolver(&universe);

        resolver.require(&SymbolRef::type_("k8s.io/api/core/v1", "Pod")).unwrap();
        assert!(resolver.imports().is_empty());
        assert!(resolver.require(&SymbolRef::type_("k8s.io/api/core/v1", "Node")).is_err());
    }
}
