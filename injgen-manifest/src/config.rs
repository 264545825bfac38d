//! Generation settings: output package, API group, collaborator packages
//! and naming tables.

use std::collections::BTreeMap;

use injgen_core::{go_package_name, to_pascal_case, upper_first};
use serde::Deserialize;

/// Import path of Knative's injection registry.
pub const DEFAULT_INJECTION_PACKAGE: &str = "github.com/knative/pkg/injection";

/// Import path of Knative's controller package.
pub const DEFAULT_CONTROLLER_PACKAGE: &str = "github.com/knative/pkg/controller";

/// Where generated packages live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Base import path; each type gets its own package below it.
    pub package: String,
}

impl OutputConfig {
    /// Import path of the package generated for `type_name`.
    ///
    /// The last segment is always a legal Go package name.
    pub fn package_for(&self, type_name: &str) -> String {
        format!(
            "{}/{}",
            self.package.trim_end_matches('/'),
            go_package_name(type_name)
        )
    }
}

/// The API group and version the generated informers belong to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GroupVersion {
    /// API group, e.g. "apps" or "serving.knative.dev".
    pub name: String,
    /// API version, e.g. "v1" or "v1beta1".
    pub version: String,
    /// Overrides the Go name derived from the group.
    #[serde(default)]
    pub go_name: Option<String>,
}

impl GroupVersion {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            go_name: None,
        }
    }

    pub fn with_go_name(mut self, go_name: impl Into<String>) -> Self {
        self.go_name = Some(go_name.into());
        self
    }

    /// Go accessor name of the group (e.g., "serving.knative.dev" -> "Serving").
    pub fn group_go_name(&self) -> String {
        if let Some(go_name) = &self.go_name {
            return go_name.clone();
        }
        let first = self.name.split('.').next().unwrap_or_default();
        to_pascal_case(first)
    }

    /// Go accessor name of the version (e.g., "v1beta1" -> "V1beta1").
    pub fn version_go_name(&self) -> String {
        upper_first(&self.version)
    }
}

/// Import paths of the packages generated code calls into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackagePaths {
    /// Versioned clientset package declaring `Interface`.
    pub clientset: String,
    /// Typed informer package declaring `<Type>Informer`.
    pub typed_informers: String,
    /// Injection factory package declaring `Get`.
    pub factory: String,
    /// Internal interfaces package declaring `SharedInformerFactory`.
    pub internal_interfaces: String,
    #[serde(default = "default_injection_package")]
    pub injection: String,
    #[serde(default = "default_controller_package")]
    pub controller: String,
}

impl PackagePaths {
    pub fn new(
        clientset: impl Into<String>,
        typed_informers: impl Into<String>,
        factory: impl Into<String>,
        internal_interfaces: impl Into<String>,
    ) -> Self {
        Self {
            clientset: clientset.into(),
            typed_informers: typed_informers.into(),
            factory: factory.into(),
            internal_interfaces: internal_interfaces.into(),
            injection: default_injection_package(),
            controller: default_controller_package(),
        }
    }

    /// Iterate over every configured path with its key.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("clientset", self.clientset.as_str()),
            ("typed-informers", self.typed_informers.as_str()),
            ("factory", self.factory.as_str()),
            ("internal-interfaces", self.internal_interfaces.as_str()),
            ("injection", self.injection.as_str()),
            ("controller", self.controller.as_str()),
        ]
        .into_iter()
    }
}

fn default_injection_package() -> String {
    DEFAULT_INJECTION_PACKAGE.to_string()
}

fn default_controller_package() -> String {
    DEFAULT_CONTROLLER_PACKAGE.to_string()
}

/// Static naming tables.
///
/// Both tables are configuration: they are read during generation and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NamingConfig {
    /// Irregular nouns, singular -> plural. Replaces the defaults when set.
    #[serde(default = "default_plural_exceptions")]
    pub plural_exceptions: BTreeMap<String, String>,
    /// Naming key -> public plural override.
    ///
    /// Keys are `<package path>.<Name><Name>`: the type name is doubled so
    /// table keys never coincide with a plain `<package>.<Name>` identity or
    /// with a pluralized name.
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
}

impl NamingConfig {
    /// Add a plural exception.
    pub fn plural_exception(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.plural_exceptions.insert(singular.into(), plural.into());
        self
    }

    /// Add a public plural override for a naming key.
    pub fn exception(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.exceptions.insert(key.into(), value.into());
        self
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            plural_exceptions: default_plural_exceptions(),
            exceptions: BTreeMap::new(),
        }
    }
}

fn default_plural_exceptions() -> BTreeMap<String, String> {
    BTreeMap::from([("Endpoints".to_string(), "Endpoints".to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_go_name() {
        assert_eq!(GroupVersion::new("apps", "v1").group_go_name(), "Apps");
        assert_eq!(
            GroupVersion::new("serving.knative.dev", "v1").group_go_name(),
            "Serving"
        );
        assert_eq!(
            GroupVersion::new("networking.internal.knative.dev", "v1alpha1")
                .with_go_name("Networking")
                .group_go_name(),
            "Networking"
        );
        assert_eq!(GroupVersion::new("", "v1").group_go_name(), "");
    }

    #[test]
    fn test_version_go_name() {
        assert_eq!(GroupVersion::new("apps", "v1beta1").version_go_name(), "V1beta1");
    }

    #[test]
    fn test_package_for() {
        let output = OutputConfig {
            package: "example.com/injection/informers/apps/v1/".to_string(),
        };
        assert_eq!(
            output.package_for("DeploymentRollout"),
            "example.com/injection/informers/apps/v1/deploymentrollout"
        );
        assert_eq!(
            output.package_for("Interface"),
            "example.com/injection/informers/apps/v1/interfacepkg"
        );
    }

    #[test]
    fn test_default_naming() {
        let naming = NamingConfig::default();
        assert_eq!(
            naming.plural_exceptions.get("Endpoints").map(String::as_str),
            Some("Endpoints")
        );
        assert!(naming.exceptions.is_empty());
    }

    #[test]
    fn test_package_paths_defaults() {
        let paths = PackagePaths::new("a/clientset", "a/informers", "a/factory", "a/internal");
        assert_eq!(paths.injection, DEFAULT_INJECTION_PACKAGE);
        assert_eq!(paths.controller, DEFAULT_CONTROLLER_PACKAGE);
        assert_eq!(paths.iter().count(), 6);
    }
}
