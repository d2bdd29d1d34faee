/// Go module collaborators: version cleaning and pseudo-version detection
mod pseudo_version_classifier;
mod version_cleaner;

pub use pseudo_version_classifier::GoPseudoVersionClassifier;
pub use version_cleaner::GoVersionCleaner;
