use crate::{
    Error, Result, SymbolResolver, TypeUniverse,
    naming::{NameSystems, RAW},
};

use super::{Placeholder, Segment, Template, TemplateContext, TemplateValue};

impl Template {
    /// Render against `context`.
    ///
    /// Every placeholder is checked for a binding before any text is
    /// produced. Types rendered with `raw` record their import on
    /// `resolver`.
    pub fn render<U: TypeUniverse + ?Sized>(
        &self,
        context: &TemplateContext,
        systems: &NameSystems,
        resolver: &mut SymbolResolver<'_, U>,
    ) -> Result<String> {
        if let Some(missing) = self.placeholders().find(|p| !context.contains(&p.name)) {
            return Err(Error::MissingPlaceholder {
                name: missing.name.clone(),
            });
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let value = context.get(&placeholder.name).ok_or_else(|| {
                        Error::MissingPlaceholder {
                            name: placeholder.name.clone(),
                        }
                    })?;
                    out.push_str(&render_value(placeholder, value, systems, resolver)?);
                }
            }
        }
        Ok(out)
    }
}

fn render_value<U: TypeUniverse + ?Sized>(
    placeholder: &Placeholder,
    value: &TemplateValue,
    systems: &NameSystems,
    resolver: &mut SymbolResolver<'_, U>,
) -> Result<String> {
    let system = placeholder.system.as_deref();
    match value {
        TemplateValue::Literal(text) => {
            no_system(placeholder, "literal")?;
            Ok(text.clone())
        }
        TemplateValue::Bool(flag) => {
            no_system(placeholder, "boolean")?;
            Ok(flag.to_string())
        }
        TemplateValue::Symbol(symbol) => match system {
            None | Some(RAW) => Ok(symbol.qualified()),
            Some(other) => Err(Error::InvalidPlaceholder {
                placeholder: placeholder.source(),
                reason: format!("symbols render with '{}' only, not '{}'", RAW, other),
            }),
        },
        TemplateValue::Type(ty) => match system {
            None | Some(RAW) => resolver.resolve_type(ty),
            Some(name) => systems.name(name, ty).ok_or_else(|| Error::UnknownNameSystem {
                placeholder: placeholder.source(),
                system: name.to_string(),
            }),
        },
    }
}

fn no_system(placeholder: &Placeholder, what: &str) -> Result<()> {
    match &placeholder.system {
        None => Ok(()),
        Some(system) => Err(Error::InvalidPlaceholder {
            placeholder: placeholder.source(),
            reason: format!("a {} value cannot use name system '{}'", what, system),
        }),
    }
}
