use crate::application::read_models::{
    DependencyView, NormalizedReadModel, PackageView, PseudoVersionView,
};
use crate::ports::outbound::NormalizedFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    metadata: Metadata<'a>,
    ecosystem: &'a str,
    summary: Summary,
    direct_dependencies: Vec<Package<'a>>,
    transitive_dependencies: Vec<Package<'a>>,
    dependencies: Vec<Package<'a>>,
    dependency_graph: Vec<Dependency<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_versions: Option<PseudoVersions<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    serial_number: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    direct: usize,
    transitive: usize,
    total: usize,
    pseudo: usize,
    dependencies: usize,
    pseudo_excluded: bool,
}

#[derive(Debug, Serialize)]
struct Package<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dependency<'a> {
    package: Package<'a>,
    depends_on: Vec<Package<'a>>,
}

#[derive(Debug, Serialize)]
struct PseudoVersions<'a> {
    modules: &'a [String],
    versions: &'a BTreeMap<String, String>,
    packages: Vec<Package<'a>>,
}

/// JsonFormatter adapter for rendering the normalization result as JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn packages(views: &[PackageView]) -> Vec<Package<'_>> {
        views.iter().map(Package::from).collect()
    }

    fn graph(views: &[DependencyView]) -> Vec<Dependency<'_>> {
        views
            .iter()
            .map(|entry| Dependency {
                package: Package::from(&entry.package),
                depends_on: Self::packages(&entry.depends_on),
            })
            .collect()
    }

    fn pseudo_versions(view: &PseudoVersionView) -> PseudoVersions<'_> {
        PseudoVersions {
            modules: &view.modules,
            versions: &view.versions,
            packages: Self::packages(&view.packages),
        }
    }
}

impl<'a> From<&'a PackageView> for Package<'a> {
    fn from(view: &'a PackageView) -> Self {
        Self {
            name: &view.name,
            version: &view.version,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizedFormatter for JsonFormatter {
    fn format(&self, model: &NormalizedReadModel) -> Result<String> {
        let summary = &model.summary;
        let report = Report {
            metadata: Metadata {
                timestamp: &model.metadata.timestamp,
                tool: Tool {
                    name: &model.metadata.tool_name,
                    version: &model.metadata.tool_version,
                },
                serial_number: &model.metadata.serial_number,
            },
            ecosystem: &model.ecosystem,
            summary: Summary {
                direct: summary.direct_count,
                transitive: summary.transitive_count,
                total: summary.total_count,
                pseudo: summary.pseudo_count,
                dependencies: summary.dependency_count,
                pseudo_excluded: summary.pseudo_excluded,
            },
            direct_dependencies: Self::packages(&model.direct_dependencies),
            transitive_dependencies: Self::packages(&model.transitive_dependencies),
            dependencies: Self::packages(&model.dependencies),
            dependency_graph: Self::graph(&model.dependency_graph),
            pseudo_versions: model.pseudo_versions.as_ref().map(Self::pseudo_versions),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ReportMetadataView, SummaryView};

    fn package(name: &str, version: &str) -> PackageView {
        PackageView {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    fn create_test_read_model() -> NormalizedReadModel {
        NormalizedReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "dep-normalizer".to_string(),
                tool_version: "0.1.0".to_string(),
                serial_number: "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
            },
            ecosystem: "pypi".to_string(),
            summary: SummaryView {
                direct_count: 1,
                transitive_count: 1,
                total_count: 2,
                pseudo_count: 0,
                dependency_count: 2,
                pseudo_excluded: false,
            },
            direct_dependencies: vec![package("flask", "0.12")],
            transitive_dependencies: vec![package("six", "1.2")],
            dependencies: vec![package("flask", "0.12"), package("six", "1.2")],
            dependency_graph: vec![DependencyView {
                package: package("flask", "0.12"),
                depends_on: vec![package("six", "1.2")],
            }],
            pseudo_versions: None,
        }
    }

    #[test]
    fn test_format_is_valid_json() {
        let json = JsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ecosystem"], "pypi");
        assert_eq!(value["metadata"]["tool"]["name"], "dep-normalizer");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["pseudoExcluded"], false);
        assert_eq!(value["directDependencies"][0]["name"], "flask");
        assert_eq!(value["transitiveDependencies"][0]["version"], "1.2");
        assert_eq!(value["dependencyGraph"][0]["dependsOn"][0]["name"], "six");
    }

    #[test]
    fn test_format_omits_pseudo_versions_when_absent() {
        let json = JsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        assert!(!json.contains("pseudoVersions"));
    }

    #[test]
    fn test_format_with_pseudo_versions() {
        let mut model = create_test_read_model();
        model.ecosystem = "golang".to_string();
        model.pseudo_versions = Some(PseudoVersionView {
            modules: vec!["m1".to_string()],
            versions: BTreeMap::from([("a".to_string(), "v0.0.0-20200101-abcdef".to_string())]),
            packages: vec![package("a", "v0.0.0-20200101-abcdef")],
        });

        let json = JsonFormatter::new().format(&model).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pseudoVersions"]["modules"][0], "m1");
        assert_eq!(
            value["pseudoVersions"]["versions"]["a"],
            "v0.0.0-20200101-abcdef"
        );
        assert_eq!(value["pseudoVersions"]["packages"][0]["name"], "a");
    }
}
