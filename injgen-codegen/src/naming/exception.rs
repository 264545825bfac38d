//! Exact-match overrides keyed by type identity.

use std::collections::BTreeMap;

use injgen_ir::TypeDescriptor;

use super::Namer;

/// Naming key for the public plural exception table.
///
/// The type name is doubled (`example.com/api/v1.EventEvent`) so that keys
/// live in their own space: they never equal a plain `package.Name`
/// identity, nor a name produced by the delegate namer.
pub fn naming_key(ty: &TypeDescriptor) -> String {
    format!("{}.{}{}", ty.name.package, ty.name.name, ty.name.name)
}

/// Returns the table entry for a type when one exists, otherwise defers to
/// the delegate.
///
/// Used to deconflict generated names, e.g. when a resource's plural would
/// clash with its group accessor.
pub struct ExceptionNamer {
    exceptions: BTreeMap<String, String>,
    key_fn: fn(&TypeDescriptor) -> String,
    delegate: Box<dyn Namer>,
}

impl ExceptionNamer {
    pub fn new(
        exceptions: BTreeMap<String, String>,
        key_fn: fn(&TypeDescriptor) -> String,
        delegate: impl Namer + 'static,
    ) -> Self {
        Self {
            exceptions,
            key_fn,
            delegate: Box::new(delegate),
        }
    }
}

impl Namer for ExceptionNamer {
    fn name(&self, ty: &TypeDescriptor) -> String {
        let key = (self.key_fn)(ty);
        match self.exceptions.get(&key) {
            Some(exception) => exception.clone(),
            None => self.delegate.name(ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::PluralNamer;

    fn make_namer(exceptions: &[(&str, &str)]) -> ExceptionNamer {
        let exceptions = exceptions
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExceptionNamer::new(exceptions, naming_key, PluralNamer::public(BTreeMap::new()))
    }

    #[test]
    fn test_naming_key_doubles_name() {
        let ty = TypeDescriptor::new("k8s.io/api/events/v1beta1", "Event");
        assert_eq!(naming_key(&ty), "k8s.io/api/events/v1beta1.EventEvent");
    }

    #[test]
    fn test_miss_delegates() {
        let namer = make_namer(&[("k8s.io/api/events/v1beta1.EventEvent", "EventResource")]);
        let ty = TypeDescriptor::new("example.com/api/v1", "Widget");
        assert_eq!(namer.name(&ty), "Widgets");
    }

    #[test]
    fn test_hit_wins_verbatim() {
        let namer = make_namer(&[("k8s.io/api/events/v1beta1.EventEvent", "EventResource")]);
        let ty = TypeDescriptor::new("k8s.io/api/events/v1beta1", "Event");
        assert_eq!(namer.name(&ty), "EventResource");
    }

    #[test]
    fn test_plain_identity_key_does_not_match() {
        // Only the doubled key is honoured
        let namer = make_namer(&[("k8s.io/api/events/v1beta1.Event", "EventResource")]);
        let ty = TypeDescriptor::new("k8s.io/api/events/v1beta1", "Event");
        assert_eq!(namer.name(&ty), "Events");
    }

    #[test]
    fn test_same_name_other_package_unaffected() {
        let namer = make_namer(&[("k8s.io/api/events/v1beta1.EventEvent", "EventResource")]);
        let ty = TypeDescriptor::new("k8s.io/api/core/v1", "Event");
        assert_eq!(namer.name(&ty), "Events");
    }
}
