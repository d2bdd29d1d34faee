//! Package and dependency view structs for the read model

use crate::normalization::domain::PackageIdentity;

/// View representation of a package identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageView {
    pub name: String,
    pub version: String,
}

impl From<&PackageIdentity> for PackageView {
    fn from(identity: &PackageIdentity) -> Self {
        Self {
            name: identity.name().to_string(),
            version: identity.version().to_string(),
        }
    }
}

/// One adjacency entry: a root package and its direct dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyView {
    pub package: PackageView,
    /// Sorted by name, then version
    pub depends_on: Vec<PackageView>,
}
