use super::{Ecosystem, PackageIdentity, RawPackage};
use crate::normalization::policies::{IdentifierParser, ParsedPackage};
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency map from a root identity to its direct dependency identities
pub type DependencyMap = BTreeMap<PackageIdentity, BTreeSet<PackageIdentity>>;

/// NormalizedPackages aggregate: a duplicate-free dependency graph
///
/// Built eagerly from a flat package list and never modified afterwards.
/// Every view is a snapshot computed once during [`NormalizedPackages::build`].
///
/// Invariants:
/// - every top-level identity is a key of the graph, possibly with no dependencies
/// - a repeated top-level identity accumulates dependencies, it never overwrites
/// - `directs ∪ transitives == all`
/// - `all_except_pseudo == all − pseudo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPackages {
    ecosystem: Ecosystem,
    dependency_graph: DependencyMap,
    directs: BTreeSet<PackageIdentity>,
    transitives: BTreeSet<PackageIdentity>,
    all: BTreeSet<PackageIdentity>,
    modules: Vec<String>,
    version_map: BTreeMap<String, String>,
    pseudo: BTreeSet<PackageIdentity>,
    all_except_pseudo: BTreeSet<PackageIdentity>,
}

impl NormalizedPackages {
    /// Normalizes `packages` using the identifier rules of `parser`
    ///
    /// # Arguments
    /// * `packages` - Flat package list in reported order; left untouched
    /// * `ecosystem` - Ecosystem tag carried along with the result
    /// * `parser` - Identifier strategy for roots and their dependencies
    ///
    /// # Errors
    /// Propagates the first parser failure. No partial result is produced.
    pub fn build<P>(packages: &[RawPackage], ecosystem: Ecosystem, parser: &P) -> Result<Self>
    where
        P: IdentifierParser + ?Sized,
    {
        let mut builder = GraphBuilder::default();

        for package in packages {
            let root = parser.parse_package(package)?;
            builder.record_root(&root);

            for dependency in package.dependencies() {
                let parsed = parser.parse_dependency(dependency)?;
                builder.record_dependency(&root.identity, parsed);
            }
        }

        Ok(builder.finish(ecosystem))
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Every top-level package supplied (the graph's keys)
    pub fn direct_dependencies(&self) -> &BTreeSet<PackageIdentity> {
        &self.directs
    }

    /// Every package appearing as someone's dependency
    pub fn transitive_dependencies(&self) -> &BTreeSet<PackageIdentity> {
        &self.transitives
    }

    /// Union of direct and transitive dependencies
    pub fn all_dependencies(&self) -> &BTreeSet<PackageIdentity> {
        &self.all
    }

    pub fn dependency_graph(&self) -> &DependencyMap {
        &self.dependency_graph
    }

    /// Direct dependencies recorded for a root identity
    pub fn dependencies_of(&self, package: &PackageIdentity) -> Option<&BTreeSet<PackageIdentity>> {
        self.dependency_graph.get(package)
    }

    /// Modules of pseudo-versioned packages, deduplicated in first-seen order
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Package name to cleaned version for every pseudo-versioned package
    pub fn version_map(&self) -> &BTreeMap<String, String> {
        &self.version_map
    }

    pub fn pseudo_packages(&self) -> &BTreeSet<PackageIdentity> {
        &self.pseudo
    }

    pub fn all_dependencies_except_pseudo(&self) -> &BTreeSet<PackageIdentity> {
        &self.all_except_pseudo
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.directs.len()
    }

    pub fn transitive_dependency_count(&self) -> usize {
        self.transitives.len()
    }

    pub fn total_package_count(&self) -> usize {
        self.all.len()
    }
}

/// Mutable state used only while [`NormalizedPackages::build`] runs
#[derive(Default)]
struct GraphBuilder {
    dependency_graph: DependencyMap,
    modules: Vec<String>,
    version_map: BTreeMap<String, String>,
    pseudo: BTreeSet<PackageIdentity>,
}

impl GraphBuilder {
    fn record_root(&mut self, root: &ParsedPackage) {
        if root.pseudo {
            self.record_pseudo_version(root);
            self.pseudo.insert(root.identity.clone());
        }
        self.dependency_graph
            .entry(root.identity.clone())
            .or_default();
    }

    fn record_dependency(&mut self, owner: &PackageIdentity, dependency: ParsedPackage) {
        if dependency.pseudo {
            self.record_pseudo_version(&dependency);
            self.attribute_pseudo_dependency_to_owner(owner);
        }
        self.dependency_graph
            .entry(owner.clone())
            .or_default()
            .insert(dependency.identity);
    }

    fn record_pseudo_version(&mut self, package: &ParsedPackage) {
        if let Some(module) = &package.module {
            self.modules.push(module.clone());
        }
        // Last write wins when two pseudo packages share a name.
        self.version_map.insert(
            package.identity.name().to_string(),
            package.identity.version().to_string(),
        );
    }

    /// A pseudo-versioned dependency puts its *owning* package in the pseudo
    /// set, not itself. The dependency stays in `all_except_pseudo`.
    fn attribute_pseudo_dependency_to_owner(&mut self, owner: &PackageIdentity) {
        self.pseudo.insert(owner.clone());
    }

    fn finish(self, ecosystem: Ecosystem) -> NormalizedPackages {
        let transitives: BTreeSet<PackageIdentity> = self
            .dependency_graph
            .values()
            .flat_map(|dependencies| dependencies.iter().cloned())
            .collect();
        let directs: BTreeSet<PackageIdentity> = self.dependency_graph.keys().cloned().collect();
        let all: BTreeSet<PackageIdentity> = directs.union(&transitives).cloned().collect();
        let all_except_pseudo = all.difference(&self.pseudo).cloned().collect();

        let mut seen = BTreeSet::new();
        let modules = self
            .modules
            .into_iter()
            .filter(|module| seen.insert(module.clone()))
            .collect();

        NormalizedPackages {
            ecosystem,
            dependency_graph: self.dependency_graph,
            directs,
            transitives,
            all,
            modules,
            version_map: self.version_map,
            pseudo: self.pseudo,
            all_except_pseudo,
        }
    }
}
