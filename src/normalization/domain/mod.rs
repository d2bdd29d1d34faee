pub mod ecosystem;
pub mod normalized_packages;
pub mod package;
pub mod report_metadata;

pub use ecosystem::Ecosystem;
pub use normalized_packages::{DependencyMap, NormalizedPackages};
pub use package::{PackageIdentity, RawPackage};
pub use report_metadata::ReportMetadata;
