//! A generation session over one manifest.

use std::{collections::BTreeMap, path::Path, sync::Arc};

use eyre::{Context, OptionExt, Result};
use injgen_codegen::{
    AliasTable, GeneratorConfig, GoFile, InformerGenerator, TagSet, informer_alias_table,
};
use injgen_ir::{Name, TypeDescriptor, Universe};
use injgen_manifest::{Manifest, NamingConfig};

/// A generated informer package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformerFile {
    /// The type the file was generated for.
    pub type_name: Name,
    /// Import path of the generated package.
    pub package: String,
    /// Declarations, without package clause or imports.
    pub body: String,
    /// Import lines the body needs, sorted by path.
    pub imports: Vec<String>,
    /// The complete Go source file.
    pub source: String,
}

impl InformerFile {
    /// File name within the generated package, e.g. `widget.go`.
    pub fn file_name(&self) -> String {
        format!("{}.go", self.type_name.name.to_lowercase())
    }
}

/// Manifest, universe and shared alias table for one run.
#[derive(Debug)]
pub struct Session {
    manifest: Manifest,
    universe: Universe,
    naming: Arc<NamingConfig>,
    aliases: Arc<AliasTable>,
}

impl Session {
    /// Load and validate the manifest at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let manifest = Manifest::from_file(path)
            .map_err(|err| eyre::Report::new(*err))
            .wrap_err_with(|| format!("failed to load {}", path.display()))?;
        Ok(Self::from_manifest(manifest))
    }

    /// Create a session from an already parsed manifest.
    pub fn from_manifest(manifest: Manifest) -> Self {
        let universe = manifest.universe();
        // Malformed tags surface later, from eligible_types
        let outputs: Vec<String> = universe
            .types()
            .filter(|ty| {
                TagSet::parse(ty.all_comment_lines()).is_ok_and(|tags| tags.generate_client)
            })
            .map(|ty| manifest.output.package_for(&ty.name.name))
            .collect();
        let aliases = informer_alias_table(
            &universe,
            &manifest.packages,
            outputs.iter().map(String::as_str),
        );
        tracing::debug!(
            packages = universe.len(),
            aliases = aliases.len(),
            "session ready"
        );

        Self {
            naming: Arc::new(manifest.naming.clone()),
            aliases: Arc::new(aliases),
            universe,
            manifest,
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Import path of the package generated for `name`.
    pub fn output_package(&self, name: &Name) -> String {
        self.manifest.output.package_for(&name.name)
    }

    /// Generator settings for `name`.
    pub fn generator_config(&self, name: &Name) -> GeneratorConfig {
        GeneratorConfig {
            output_package: self.output_package(name),
            group: self.manifest.group.clone(),
            packages: self.manifest.packages.clone(),
            naming: Arc::clone(&self.naming),
        }
    }

    /// Types tagged `+genclient`, sorted by package then name.
    pub fn eligible_types(&self) -> Result<Vec<&TypeDescriptor>> {
        let mut eligible = Vec::new();
        for ty in self.universe.types() {
            let tags = TagSet::parse(ty.all_comment_lines())
                .wrap_err_with(|| format!("invalid tags on {}", ty.name))?;
            if tags.generate_client {
                eligible.push(ty);
            }
        }
        Ok(eligible)
    }

    /// Generate the informer package for one type.
    pub fn generate(&self, name: &Name) -> Result<InformerFile> {
        let ty = self
            .universe
            .type_descriptor(name)
            .ok_or_eyre("type is not declared in the universe")
            .wrap_err_with(|| format!("cannot generate {}", name))?;

        let config = self.generator_config(name);
        let package = config.output_package.clone();
        tracing::debug!(ty = %name, package = %package, "generating informer");

        let mut generator = InformerGenerator::new(&self.universe, config, name.clone())?
            .with_aliases(Arc::clone(&self.aliases));
        let result = generator
            .generate(ty)
            .wrap_err_with(|| format!("failed to generate informer for {}", name))?
            .ok_or_eyre("generator did not accept its own target")?;

        let source = GoFile::for_package_path(&package)
            .with_imports(result.imports.iter().cloned())
            .with_body(result.text.as_str())
            .render();

        Ok(InformerFile {
            type_name: name.clone(),
            package,
            body: result.text,
            imports: result.imports,
            source,
        })
    }

    /// Generate every eligible type.
    ///
    /// Fails before generating anything when two types would share an
    /// output package.
    pub fn generate_all(&self) -> Result<Vec<InformerFile>> {
        let eligible = self.eligible_types()?;
        let mut claimed: BTreeMap<String, &Name> = BTreeMap::new();
        for ty in &eligible {
            let package = self.output_package(&ty.name);
            if let Some(other) = claimed.get(&package) {
                eyre::bail!(
                    "{} and {} would both be generated into {}",
                    other,
                    ty.name,
                    package
                );
            }
            claimed.insert(package, &ty.name);
        }

        eligible
            .into_iter()
            .map(|ty| self.generate(&ty.name))
            .collect()
    }
}
