//! The informer injection template and its bindings.

use injgen_core::upper_first;
use injgen_ir::{SymbolKind, SymbolRef, TypeDescriptor};
use injgen_manifest::PackagePaths;

use crate::{
    AliasTable, GeneratorConfig, Result, SymbolResolver, TagSet, TemplateContext, TypeUniverse,
    resolver::PRELUDE,
};

/// Go source for one informer injection file.
///
/// `init` registers `withInformer` with the injection registry. The informer
/// is stored in the context under an unexported key type, so only this
/// package can set or read it, and `Get` returns nil when it was never set.
pub const INFORMER_TEMPLATE: &str = "\
func init() {
\t{{.injectionRegisterInformer}}(withInformer)
}

// key is used as the context key for the informer.
type key struct{}

func withInformer(ctx {{.contextContext}}) ({{.contextContext}}, {{.controllerInformer}}) {
\tf := {{.factoryGet}}(ctx)
\tinf := f.{{.group}}().{{.version}}().{{.type|publicPlural}}()
\treturn {{.contextWithValue}}(ctx, key{}, inf), inf.Informer()
}

// Namespaced reports whether {{.type|resource}} live in a namespace.
const Namespaced = {{.namespaced}}

// Get extracts the {{.typeName}} informer from the context.
func Get(ctx {{.contextContext}}) {{.informersTypedInformer}} {
\tinf, _ := ctx.Value(key{}).({{.informersTypedInformer}})
\treturn inf
}
";

/// Identifiers the template declares or uses unqualified. Package aliases
/// must not shadow them.
pub const TEMPLATE_LOCALS: &[&str] = &[
    "f",
    "inf",
    "ctx",
    "key",
    "init",
    "withInformer",
    "Get",
    "Namespaced",
    "nil",
    "true",
    "false",
];

/// Alias table covering everything informer generation may import.
///
/// Generators that share one table produce import lists that merge without
/// conflict.
pub fn informer_alias_table<'a, U: TypeUniverse + ?Sized>(
    universe: &'a U,
    packages: &'a PackagePaths,
    output_packages: impl IntoIterator<Item = &'a str>,
) -> AliasTable {
    let paths = universe
        .package_paths()
        .chain(packages.iter().map(|(_, path)| path))
        .chain(PRELUDE.iter().map(|(path, _, _)| *path))
        .chain(output_packages);
    AliasTable::build(paths, TEMPLATE_LOCALS)
}

/// Bind every placeholder of [`INFORMER_TEMPLATE`] for `ty`.
pub(crate) fn bind<U: TypeUniverse + ?Sized>(
    ty: &TypeDescriptor,
    tags: &TagSet,
    config: &GeneratorConfig,
    resolver: &mut SymbolResolver<'_, U>,
) -> Result<TemplateContext> {
    let packages = &config.packages;

    // Collaborators the generated accessor relies on without naming them
    resolver.require(&SymbolRef::type_(&packages.clientset, "Interface"))?;
    resolver.require(&SymbolRef::type_(
        &packages.internal_interfaces,
        "SharedInformerFactory",
    ))?;

    let mut context = TemplateContext::new();
    context.insert(
        "injectionRegisterInformer",
        resolver.resolve(&packages.injection, "RegisterInformer", SymbolKind::Function)?,
    );
    context.insert(
        "controllerInformer",
        resolver.resolve(&packages.controller, "Informer", SymbolKind::Type)?,
    );
    context.insert(
        "contextContext",
        resolver.resolve("context", "Context", SymbolKind::Type)?,
    );
    context.insert(
        "contextWithValue",
        resolver.resolve("context", "WithValue", SymbolKind::Function)?,
    );
    context.insert(
        "factoryGet",
        resolver.resolve(&packages.factory, "Get", SymbolKind::Function)?,
    );
    context.insert(
        "informersTypedInformer",
        resolver.resolve(
            &packages.typed_informers,
            format!("{}Informer", ty.name.name),
            SymbolKind::Type,
        )?,
    );
    context.insert_literal("group", config.group.group_go_name());
    context.insert_literal("version", config.group.version_go_name());
    context.insert_literal("typeName", upper_first(&ty.name.name));
    context.insert("namespaced", tags.namespaced());
    context.insert("type", ty.clone());

    Ok(context)
}

#[cfg(test)]
mod tests {
    use crate::Template;

    use super::*;

    #[test]
    fn test_template_parses() {
        let template = Template::parse(INFORMER_TEMPLATE).unwrap();
        let mut names: Vec<&str> = template.placeholders().map(|p| p.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(
            names,
            vec![
                "contextContext",
                "contextWithValue",
                "controllerInformer",
                "factoryGet",
                "group",
                "informersTypedInformer",
                "injectionRegisterInformer",
                "namespaced",
                "type",
                "typeName",
                "version",
            ]
        );
    }

    #[test]
    fn test_locals_are_never_aliases() {
        let paths = ["example.com/f", "example.com/x/key", "example.com/inf"];
        let table = AliasTable::build(paths, TEMPLATE_LOCALS);
        assert_eq!(table.alias("example.com/f"), Some("examplecomf"));
        assert_eq!(table.alias("example.com/x/key"), Some("xkey"));
        assert_eq!(table.alias("example.com/inf"), Some("examplecominf"));
    }
}
