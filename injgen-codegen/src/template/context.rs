use indexmap::IndexMap;
use injgen_ir::TypeDescriptor;
use serde::Serialize;

use crate::Symbol;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TemplateValue {
    /// A resolved symbol, rendered qualified.
    Symbol(Symbol),
    /// An identifier rendered verbatim.
    Literal(String),
    Bool(bool),
    /// A type, rendered through a naming system.
    Type(TypeDescriptor),
}

impl From<Symbol> for TemplateValue {
    fn from(symbol: Symbol) -> Self {
        TemplateValue::Symbol(symbol)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

impl From<TypeDescriptor> for TemplateValue {
    fn from(ty: TypeDescriptor) -> Self {
        TemplateValue::Type(ty)
    }
}

/// Placeholder bindings for one render, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    values: IndexMap<String, TemplateValue>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TemplateValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Bind a verbatim identifier.
    pub fn insert_literal(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, TemplateValue::Literal(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize the bindings for diagnostics.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use injgen_ir::SymbolRef;

    use super::*;

    #[test]
    fn test_insertion_order_and_replace() {
        let mut context = TemplateContext::new();
        context.insert_literal("group", "Apps");
        context.insert("namespaced", true);
        context.insert_literal("group", "Core");

        let names: Vec<&str> = context.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["group", "namespaced"]);
        assert_eq!(context.get("group"), Some(&TemplateValue::Literal("Core".into())));
        assert!(!context.contains("version"));
    }

    #[test]
    fn test_to_json() {
        let mut context = TemplateContext::new();
        context.insert(
            "factoryGet",
            Symbol {
                reference: SymbolRef::function("example.com/factory", "Get"),
                alias: Some("factory".into()),
            },
        );
        context.insert("namespaced", false);

        let json: serde_json::Value = serde_json::from_str(&context.to_json().unwrap()).unwrap();
        assert_eq!(json["namespaced"]["kind"], "bool");
        assert_eq!(json["namespaced"]["value"], false);
        assert_eq!(json["factoryGet"]["value"]["alias"], "factory");
        assert_eq!(json["factoryGet"]["value"]["reference"]["kind"], "function");
    }
}
