//! Per-type informer generation.

use std::{fmt, io::Write, sync::Arc};

use injgen_ir::{Name, TypeDescriptor};
use injgen_manifest::{GroupVersion, NamingConfig, PackagePaths};
use serde::Serialize;

use crate::{
    AliasTable, ImportTracker, NameSystems, Result, SymbolResolver, TagSet, Template,
    TypeUniverse,
    informer::{self, INFORMER_TEMPLATE},
};

/// Settings shared by every type generated into one output package.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Package the generated file belongs to.
    pub output_package: String,
    pub group: GroupVersion,
    pub packages: PackagePaths,
    pub naming: Arc<NamingConfig>,
}

/// Stage a generation call is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorPhase {
    /// Deciding whether the type is this generator's target.
    Filtering,
    /// Parsing tags, naming and resolving symbols.
    Binding,
    /// Producing text.
    Rendering,
}

impl fmt::Display for GeneratorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            GeneratorPhase::Filtering => "filtering",
            GeneratorPhase::Binding => "binding",
            GeneratorPhase::Rendering => "rendering",
        };
        f.write_str(phase)
    }
}

/// Output of one successful generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Rendered file body.
    pub text: String,
    /// Import lines this body needs, sorted by path.
    pub imports: Vec<String>,
}

/// Generates the informer injection file for one type.
///
/// Imports from every successful call accumulate in the generator and are
/// reported by [`InformerGenerator::import_lines`].
pub struct InformerGenerator<'u, U: TypeUniverse + ?Sized> {
    universe: &'u U,
    config: GeneratorConfig,
    target: Name,
    aliases: Arc<AliasTable>,
    systems: NameSystems,
    template: Template,
    imports: ImportTracker,
}

impl<'u, U: TypeUniverse + ?Sized> InformerGenerator<'u, U> {
    /// Create a generator for `target`.
    ///
    /// The alias table covers the universe, the configured packages and
    /// this generator's output package.
    pub fn new(universe: &'u U, config: GeneratorConfig, target: Name) -> Result<Self> {
        let aliases = informer::informer_alias_table(
            universe,
            &config.packages,
            [config.output_package.as_str()],
        );
        Ok(Self {
            universe,
            systems: NameSystems::for_config(&config.naming),
            template: Template::parse(INFORMER_TEMPLATE)?,
            aliases: Arc::new(aliases),
            config,
            target,
            imports: ImportTracker::new(),
        })
    }

    /// Use an alias table shared with other generators.
    pub fn with_aliases(mut self, aliases: Arc<AliasTable>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Check if `ty` is the type this generator was created for.
    pub fn applies(&self, ty: &TypeDescriptor) -> bool {
        ty.name == self.target
    }

    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Naming systems available to the template.
    pub fn name_systems(&self) -> &NameSystems {
        &self.systems
    }

    /// Generate `ty` into `out`.
    ///
    /// Returns `false` without writing when `ty` is not the target. The
    /// accumulated imports change only once the text has been written.
    pub fn generate_type(&mut self, ty: &TypeDescriptor, out: &mut dyn Write) -> Result<bool> {
        let Some((result, merged)) = self.prepare(ty)? else {
            return Ok(false);
        };
        out.write_all(result.text.as_bytes())?;
        self.imports = merged;
        Ok(true)
    }

    /// Generate `ty` into memory.
    ///
    /// Returns `None` when `ty` is not the target.
    pub fn generate(&mut self, ty: &TypeDescriptor) -> Result<Option<GenerationResult>> {
        let Some((result, merged)) = self.prepare(ty)? else {
            return Ok(None);
        };
        self.imports = merged;
        Ok(Some(result))
    }

    /// Render `ty` and compute the accumulated imports that would follow,
    /// without touching the generator's state.
    fn prepare(&self, ty: &TypeDescriptor) -> Result<Option<(GenerationResult, ImportTracker)>> {
        tracing::debug!(ty = %ty.name, phase = %GeneratorPhase::Filtering, "processing type");
        if !self.applies(ty) {
            return Ok(None);
        }

        let result = self.bind_and_render(ty);
        if let Err(err) = &result {
            tracing::debug!(ty = %ty.name, error = %err, "generation failed");
        }
        let (text, imports) = result?;

        let mut merged = self.imports.clone();
        merged.merge(&imports)?;

        let result = GenerationResult {
            text,
            imports: imports.import_lines(),
        };
        Ok(Some((result, merged)))
    }

    fn bind_and_render(&self, ty: &TypeDescriptor) -> Result<(String, ImportTracker)> {
        tracing::debug!(ty = %ty.name, phase = %GeneratorPhase::Binding, "binding template");
        let tags = TagSet::parse(ty.all_comment_lines())?;
        let mut resolver = SymbolResolver::new(
            self.universe,
            self.config.output_package.clone(),
            Arc::clone(&self.aliases),
        );
        let context = informer::bind(ty, &tags, &self.config, &mut resolver)?;
        if tracing::enabled!(tracing::Level::TRACE) {
            match context.to_json() {
                Ok(json) => tracing::trace!(ty = %ty.name, context = %json, "template context"),
                Err(err) => tracing::trace!(ty = %ty.name, error = %err, "template context not serializable"),
            }
        }

        tracing::debug!(ty = %ty.name, phase = %GeneratorPhase::Rendering, "rendering template");
        let text = self.template.render(&context, &self.systems, &mut resolver)?;
        Ok((text, resolver.into_imports()))
    }

    /// Imports accumulated across successful calls.
    pub fn imports(&self) -> &ImportTracker {
        &self.imports
    }

    /// Accumulated import lines, sorted by path.
    pub fn import_lines(&self) -> Vec<String> {
        self.imports.import_lines()
    }
}
