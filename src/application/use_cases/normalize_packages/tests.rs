use super::*;
use crate::adapters::outbound::golang::{GoPseudoVersionClassifier, GoVersionCleaner};
use crate::application::dto::ParsingMode;
use crate::normalization::domain::PackageIdentity;
use crate::ports::outbound::PackageList;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

// Mock implementations for testing
struct MockPackageListReader {
    lists: HashMap<PathBuf, PackageList>,
}

impl MockPackageListReader {
    fn new(lists: Vec<(&str, PackageList)>) -> Self {
        Self {
            lists: lists
                .into_iter()
                .map(|(path, list)| (PathBuf::from(path), list))
                .collect(),
        }
    }
}

impl PackageListReader for MockPackageListReader {
    fn read_package_list(&self, path: &Path) -> Result<PackageList> {
        self.lists.get(path).cloned().ok_or_else(|| {
            NormalizerError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "mock has no such file".to_string(),
            }
            .into()
        })
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_progress(&self, _current: usize, _total: usize, message: Option<&str>) {
        if let Some(message) = message {
            self.report(message);
        }
    }
    fn report_error(&self, message: &str) {
        self.report(message);
    }
    fn report_completion(&self, message: &str) {
        self.report(message);
    }
}

type TestUseCase = NormalizePackagesUseCase<
    MockPackageListReader,
    MockProgressReporter,
    GoVersionCleaner,
    GoPseudoVersionClassifier,
>;

fn use_case(lists: Vec<(&str, PackageList)>) -> TestUseCase {
    NormalizePackagesUseCase::new(
        MockPackageListReader::new(lists),
        MockProgressReporter::default(),
        GoVersionCleaner::new(),
        GoPseudoVersionClassifier::new(),
    )
}

fn request(paths: &[&str], ecosystem: Option<Ecosystem>) -> NormalizeRequest {
    NormalizeRequest::new(
        paths.iter().map(PathBuf::from).collect(),
        ecosystem,
        ParsingMode::default(),
        false,
    )
}

fn golang_list() -> PackageList {
    PackageList::new(
        Some(Ecosystem::Golang),
        vec![
            RawPackage::new("a@m1", "v0.0.0-20191109021931-daa7c04131f5")
                .with_dependencies(vec![RawPackage::new("b@m2", "v1.0.0")]),
            RawPackage::new("c@m3", "v1.1.0"),
        ],
    )
}

fn validation_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<NormalizerError>() {
        Some(NormalizerError::Validation { message }) => message.clone(),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_execute_golang_from_declared_ecosystem() {
    let use_case = use_case(vec![("go.json", golang_list())]);

    let response = use_case.execute(request(&["go.json"], None)).unwrap();
    let normalized = &response.normalized;

    assert_eq!(normalized.ecosystem(), Ecosystem::Golang);
    assert_eq!(normalized.direct_dependency_count(), 2);
    assert_eq!(normalized.transitive_dependency_count(), 1);
    assert_eq!(normalized.modules(), &["m1".to_string()]);
    assert!(normalized
        .pseudo_packages()
        .contains(&PackageIdentity::new("a", "v0.0.0-20191109021931-daa7c04131f5")));
    assert_eq!(response.metadata.tool_name, "dep-normalizer");
}

#[test]
fn test_execute_requested_ecosystem_overrides_declared() {
    let list = PackageList::new(
        Some(Ecosystem::Golang),
        vec![RawPackage::new("left-pad@1", "1.3.0")],
    );
    let use_case = use_case(vec![("list.json", list)]);

    let response = use_case
        .execute(request(&["list.json"], Some(Ecosystem::Npm)))
        .unwrap();

    assert_eq!(response.normalized.ecosystem(), Ecosystem::Npm);
    assert!(response
        .normalized
        .all_dependencies()
        .contains(&PackageIdentity::new("left-pad@1", "1.3.0")));
}

#[test]
fn test_execute_concatenates_inputs_in_order() {
    let first = PackageList::new(
        None,
        vec![RawPackage::new("flask", "0.12")
            .with_dependencies(vec![RawPackage::new("six", "1.2")])],
    );
    let second = PackageList::new(
        Some(Ecosystem::Pypi),
        vec![RawPackage::new("six", "1.2"), RawPackage::new("flask", "0.12")
            .with_dependencies(vec![RawPackage::new("click", "7.0")])],
    );
    let use_case = use_case(vec![("a.json", first), ("b.json", second)]);

    let response = use_case
        .execute(request(&["a.json", "b.json"], None))
        .unwrap();
    let normalized = &response.normalized;

    assert_eq!(normalized.direct_dependency_count(), 2);
    assert_eq!(normalized.total_package_count(), 3);
    let flask_deps = normalized
        .dependencies_of(&PackageIdentity::new("flask", "0.12"))
        .unwrap();
    assert_eq!(flask_deps.len(), 2);
}

#[test]
fn test_execute_requires_input() {
    let error = use_case(vec![]).execute(request(&[], None)).unwrap_err();
    assert!(validation_message(&error).contains("at least one input"));
}

#[test]
fn test_execute_requires_ecosystem() {
    let list = PackageList::new(None, vec![RawPackage::new("flask", "0.12")]);
    let error = use_case(vec![("list.json", list)])
        .execute(request(&["list.json"], None))
        .unwrap_err();

    assert!(validation_message(&error).contains("no ecosystem given"));
}

#[test]
fn test_execute_rejects_conflicting_ecosystems() {
    let npm = PackageList::new(Some(Ecosystem::Npm), vec![]);
    let maven = PackageList::new(Some(Ecosystem::Maven), vec![]);
    let error = use_case(vec![("npm.json", npm), ("maven.json", maven)])
        .execute(request(&["npm.json", "maven.json"], None))
        .unwrap_err();

    let message = validation_message(&error);
    assert!(message.contains("conflicting ecosystems"));
    assert!(message.contains("npm.json"));
    assert!(message.contains("maven.json"));
}

#[test]
fn test_execute_propagates_reader_error() {
    let error = use_case(vec![])
        .execute(request(&["missing.json"], Some(Ecosystem::Npm)))
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<NormalizerError>(),
        Some(NormalizerError::InputNotFound { .. })
    ));
}

#[test]
fn test_execute_rejects_malformed_golang_identifier() {
    let list = PackageList::new(
        Some(Ecosystem::Golang),
        vec![RawPackage::new("github.com/pkg/errors", "v0.9.1")],
    );
    let error = use_case(vec![("go.json", list)])
        .execute(request(&["go.json"], None))
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<NormalizerError>(),
        Some(NormalizerError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_execute_legacy_mode_accepts_plain_golang_names() {
    let list = PackageList::new(
        Some(Ecosystem::Golang),
        vec![RawPackage::new("github.com/pkg/errors", "v0.9.1")],
    );
    let mut request = request(&["go.json"], None);
    request.parsing_mode = ParsingMode::Legacy;

    let response = use_case(vec![("go.json", list)]).execute(request).unwrap();
    assert!(response.normalized.pseudo_packages().is_empty());
    assert_eq!(response.normalized.direct_dependency_count(), 1);
}

#[test]
fn test_execute_reports_progress() {
    let use_case = use_case(vec![("go.json", golang_list())]);
    use_case.execute(request(&["go.json"], None)).unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("Loading package list from: go.json")));
    assert!(messages.iter().any(|m| m.contains("Ecosystem: golang")));
    assert!(messages.iter().any(|m| m.contains("2 direct, 1 transitive, 3 unique")));
    assert!(messages.iter().any(|m| m.contains("pseudo version across 1 module(s)")));
}

#[test]
fn test_execute_carries_exclude_pseudo_to_read_model() {
    let mut request = request(&["go.json"], None);
    request.exclude_pseudo = true;

    let response = use_case(vec![("go.json", golang_list())])
        .execute(request)
        .unwrap();
    let model = response.read_model();

    assert!(model.summary.pseudo_excluded);
    let names: Vec<&str> = model.dependencies.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn test_execute_warns_about_empty_input() {
    let empty = PackageList::new(Some(Ecosystem::Npm), vec![]);
    let use_case = use_case(vec![("empty.json", empty)]);

    let response = use_case.execute(request(&["empty.json"], None)).unwrap();
    assert_eq!(response.normalized.total_package_count(), 0);

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages
        .iter()
        .any(|m| m.contains("Warning: empty.json contains no packages.")));
}
