use serde::{Deserialize, Serialize};

/// PackageIdentity value object: the canonical `(name, version)` pair
///
/// Two identities are equal iff both fields match exactly (case-sensitive).
/// Identity is the only key used for deduplication and graph lookups;
/// a package's own dependency list never takes part in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PackageIdentity {
    name: String,
    version: String,
}

impl PackageIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// RawPackage - a package record as reported by the caller
///
/// Only one level of `dependencies` is consumed by the normalizer;
/// dependencies of dependencies contribute nothing but their own identity.
/// `name` and `version` are required at deserialization time; beyond that,
/// well-formedness is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPackage {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<RawPackage>>,
}

impl RawPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: None,
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<RawPackage>) -> Self {
        self.dependencies = Some(dependencies);
        self
    }

    /// Direct dependencies in reported order (empty when none were reported)
    pub fn dependencies(&self) -> &[RawPackage] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    /// Identity of this record exactly as reported, dependency list discarded
    pub fn identity(&self) -> PackageIdentity {
        PackageIdentity::new(self.name.clone(), self.version.clone())
    }
}
