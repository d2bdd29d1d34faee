/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the normalization core uses
/// to interact with external collaborators and systems.
pub mod formatter;
pub mod output_presenter;
pub mod package_list_reader;
pub mod progress_reporter;
pub mod pseudo_version_classifier;
pub mod version_cleaner;

pub use formatter::NormalizedFormatter;
pub use output_presenter::OutputPresenter;
pub use package_list_reader::{PackageList, PackageListReader};
pub use progress_reporter::ProgressReporter;
pub use pseudo_version_classifier::PseudoVersionClassifier;
pub use version_cleaner::{CleanedVersion, VersionCleaner};
