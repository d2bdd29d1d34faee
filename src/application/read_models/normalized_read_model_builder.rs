//! Builder for constructing NormalizedReadModel from domain objects

use super::normalized_read_model::{
    NormalizedReadModel, PseudoVersionView, ReportMetadataView, SummaryView,
};
use super::package_view::{DependencyView, PackageView};
use crate::normalization::domain::{NormalizedPackages, PackageIdentity, ReportMetadata};
use std::collections::BTreeSet;

/// Builder for constructing NormalizedReadModel from domain objects
pub struct NormalizedReadModelBuilder;

impl NormalizedReadModelBuilder {
    /// Builds the read model for one normalization run
    ///
    /// # Arguments
    /// * `normalized` - The normalized dependency graph
    /// * `metadata` - Report metadata (timestamp, tool info, serial number)
    /// * `exclude_pseudo` - Whether the final dependency list drops pseudo-flagged packages
    pub fn build(
        normalized: &NormalizedPackages,
        metadata: &ReportMetadata,
        exclude_pseudo: bool,
    ) -> NormalizedReadModel {
        let dependencies = if exclude_pseudo {
            Self::package_views(normalized.all_dependencies_except_pseudo())
        } else {
            Self::package_views(normalized.all_dependencies())
        };

        let summary = SummaryView {
            direct_count: normalized.direct_dependency_count(),
            transitive_count: normalized.transitive_dependency_count(),
            total_count: normalized.total_package_count(),
            pseudo_count: normalized.pseudo_packages().len(),
            dependency_count: dependencies.len(),
            pseudo_excluded: exclude_pseudo,
        };

        NormalizedReadModel {
            metadata: Self::build_metadata(metadata),
            ecosystem: normalized.ecosystem().to_string(),
            summary,
            direct_dependencies: Self::package_views(normalized.direct_dependencies()),
            transitive_dependencies: Self::package_views(normalized.transitive_dependencies()),
            dependencies,
            dependency_graph: Self::build_graph(normalized),
            pseudo_versions: Self::build_pseudo_versions(normalized),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp(),
            tool_name: metadata.tool_name.clone(),
            tool_version: metadata.tool_version.clone(),
            serial_number: metadata.serial_number(),
        }
    }

    /// BTreeSet iteration is already sorted by name, then version
    fn package_views(packages: &BTreeSet<PackageIdentity>) -> Vec<PackageView> {
        packages.iter().map(PackageView::from).collect()
    }

    fn build_graph(normalized: &NormalizedPackages) -> Vec<DependencyView> {
        normalized
            .dependency_graph()
            .iter()
            .map(|(package, depends_on)| DependencyView {
                package: PackageView::from(package),
                depends_on: Self::package_views(depends_on),
            })
            .collect()
    }

    fn build_pseudo_versions(normalized: &NormalizedPackages) -> Option<PseudoVersionView> {
        if !normalized.ecosystem().is_module_based() {
            return None;
        }

        Some(PseudoVersionView {
            modules: normalized.modules().to_vec(),
            versions: normalized.version_map().clone(),
            packages: Self::package_views(normalized.pseudo_packages()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::domain::{Ecosystem, RawPackage};
    use crate::normalization::policies::{GolangModuleParser, PassThroughParser};
    use crate::ports::outbound::{CleanedVersion, PseudoVersionClassifier, VersionCleaner};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    struct Unchanged;

    impl VersionCleaner for Unchanged {
        fn clean(&self, raw_version: &str) -> CleanedVersion {
            CleanedVersion::new(None, raw_version)
        }
    }

    struct ZeroIsPseudo;

    impl PseudoVersionClassifier for ZeroIsPseudo {
        fn is_pseudo(&self, version: &str) -> bool {
            version.starts_with("v0.0.0-")
        }
    }

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            run_id: Uuid::from_u128(0x12345678_1234_1234_1234_123456789012),
            tool_name: "dep-normalizer".to_string(),
            tool_version: "0.1.0".to_string(),
        }
    }

    fn golang_packages() -> NormalizedPackages {
        let parser = GolangModuleParser::new(Unchanged, ZeroIsPseudo);
        NormalizedPackages::build(
            &[
                RawPackage::new("a@m1", "v0.0.0-20200101-abcdef")
                    .with_dependencies(vec![RawPackage::new("b@m2", "v1.0.0")]),
                RawPackage::new("c@m3", "v1.1.0"),
            ],
            Ecosystem::Golang,
            &parser,
        )
        .unwrap()
    }

    #[test]
    fn test_build_metadata_view() {
        let normalized =
            NormalizedPackages::build(&[], Ecosystem::Pypi, &PassThroughParser).unwrap();
        let model = NormalizedReadModelBuilder::build(&normalized, &metadata(), false);

        assert_eq!(model.metadata.timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(model.metadata.tool_name, "dep-normalizer");
        assert_eq!(
            model.metadata.serial_number,
            "urn:uuid:12345678-1234-1234-1234-123456789012"
        );
        assert_eq!(model.ecosystem, "pypi");
    }

    #[test]
    fn test_build_sorted_views_and_graph() {
        let normalized = NormalizedPackages::build(
            &[
                RawPackage::new("zeta", "1.0").with_dependencies(vec![
                    RawPackage::new("beta", "2.0"),
                    RawPackage::new("alpha", "1.0"),
                ]),
                RawPackage::new("eta", "1.0"),
            ],
            Ecosystem::Npm,
            &PassThroughParser,
        )
        .unwrap();
        let model = NormalizedReadModelBuilder::build(&normalized, &metadata(), false);

        let direct: Vec<&str> = model
            .direct_dependencies
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(direct, vec!["eta", "zeta"]);

        assert_eq!(model.dependency_graph.len(), 2);
        let zeta = &model.dependency_graph[1];
        assert_eq!(zeta.package.name, "zeta");
        let deps: Vec<&str> = zeta.depends_on.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(deps, vec!["alpha", "beta"]);
        assert!(model.dependency_graph[0].depends_on.is_empty());

        assert!(model.pseudo_versions.is_none());
        assert_eq!(model.summary.total_count, 4);
        assert_eq!(model.summary.dependency_count, 4);
    }

    #[test]
    fn test_build_golang_keeps_pseudo_by_default() {
        let model = NormalizedReadModelBuilder::build(&golang_packages(), &metadata(), false);

        assert_eq!(model.summary.pseudo_count, 1);
        assert!(!model.summary.pseudo_excluded);
        assert_eq!(model.dependencies.len(), 3);

        let pseudo = model.pseudo_versions.unwrap();
        assert_eq!(pseudo.modules, vec!["m1".to_string()]);
        assert_eq!(
            pseudo.versions.get("a").map(String::as_str),
            Some("v0.0.0-20200101-abcdef")
        );
        assert_eq!(pseudo.packages[0].name, "a");
    }

    #[test]
    fn test_build_golang_excludes_pseudo_when_requested() {
        let model = NormalizedReadModelBuilder::build(&golang_packages(), &metadata(), true);

        assert!(model.summary.pseudo_excluded);
        assert_eq!(model.summary.dependency_count, 2);
        let names: Vec<&str> = model.dependencies.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
        // Exclusion only affects the final list
        assert_eq!(model.direct_dependencies.len(), 2);
    }
}
