//! English pluralization of type names.

use std::collections::BTreeMap;

use injgen_core::upper_first;
use injgen_ir::TypeDescriptor;

use super::Namer;

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// How the plural is cased once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finalize {
    Public,
    AllLowercase,
}

/// Pluralizes type names, consulting an irregular-noun table first.
#[derive(Debug, Clone)]
pub struct PluralNamer {
    exceptions: BTreeMap<String, String>,
    finalize: Finalize,
}

impl PluralNamer {
    /// Capitalized plural, e.g. `Widget` -> `Widgets`.
    pub fn public(exceptions: BTreeMap<String, String>) -> Self {
        Self {
            exceptions,
            finalize: Finalize::Public,
        }
    }

    /// Lowercase plural, e.g. `ReplicaSet` -> `replicasets`.
    pub fn all_lowercase(exceptions: BTreeMap<String, String>) -> Self {
        Self {
            exceptions,
            finalize: Finalize::AllLowercase,
        }
    }
}

impl Namer for PluralNamer {
    fn name(&self, ty: &TypeDescriptor) -> String {
        let singular = &ty.name.name;
        let plural = match self.exceptions.get(singular) {
            Some(plural) => plural.clone(),
            None => pluralize(singular),
        };
        match self.finalize {
            Finalize::Public => upper_first(&plural),
            Finalize::AllLowercase => plural.to_lowercase(),
        }
    }
}

/// Pluralize a singular noun by English suffix rules.
pub fn pluralize(singular: &str) -> String {
    let chars: Vec<char> = singular.chars().collect();
    let [.., before_last, last] = chars[..] else {
        return singular.to_string();
    };

    match last {
        's' | 'x' | 'z' => format!("{}es", singular),
        'y' if is_consonant(before_last) => format!("{}ies", drop_last(singular)),
        'h' if matches!(before_last, 'c' | 's') => format!("{}es", singular),
        'e' if before_last == 'f' => format!("{}ves", drop_last(drop_last(singular))),
        'f' => format!("{}ves", drop_last(singular)),
        _ => format!("{}s", singular),
    }
}

fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

fn drop_last(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str) -> TypeDescriptor {
        TypeDescriptor::new("example.com/api/v1", name)
    }

    fn irregular() -> BTreeMap<String, String> {
        BTreeMap::from([("Endpoints".to_string(), "Endpoints".to_string())])
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("Widget"), "Widgets");
        assert_eq!(pluralize("Ingress"), "Ingresses");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Policy"), "Policies");
        assert_eq!(pluralize("Gateway"), "Gateways");
        assert_eq!(pluralize("Batch"), "Batches");
        assert_eq!(pluralize("Mesh"), "Meshes");
        assert_eq!(pluralize("Graph"), "Graphs");
        assert_eq!(pluralize("Knife"), "Knives");
        assert_eq!(pluralize("Leaf"), "Leaves");
        assert_eq!(pluralize("Route"), "Routes");
    }

    #[test]
    fn test_pluralize_short_names() {
        assert_eq!(pluralize("X"), "X");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_public_plural() {
        let namer = PluralNamer::public(irregular());
        assert_eq!(namer.name(&ty("Widget")), "Widgets");
        assert_eq!(namer.name(&ty("Endpoints")), "Endpoints");
        assert_eq!(namer.name(&ty("Ingress")), "Ingresses");
    }

    #[test]
    fn test_all_lowercase_plural() {
        let namer = PluralNamer::all_lowercase(irregular());
        assert_eq!(namer.name(&ty("Widget")), "widgets");
        assert_eq!(namer.name(&ty("ReplicaSet")), "replicasets");
        assert_eq!(namer.name(&ty("Endpoints")), "endpoints");
        assert_eq!(namer.name(&ty("NetworkPolicy")), "networkpolicies");
    }

    #[test]
    fn test_without_exception_endpoints_doubles() {
        let namer = PluralNamer::all_lowercase(BTreeMap::new());
        assert_eq!(namer.name(&ty("Endpoints")), "endpointses");
    }
}
