use crate::normalization::domain::{Ecosystem, RawPackage};
use crate::shared::Result;
use std::path::Path;

/// Contents of one package list file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    /// Ecosystem declared by the file itself, if any
    pub ecosystem: Option<Ecosystem>,
    /// Packages in reported order
    pub packages: Vec<RawPackage>,
}

impl PackageList {
    pub fn new(ecosystem: Option<Ecosystem>, packages: Vec<RawPackage>) -> Self {
        Self {
            ecosystem,
            packages,
        }
    }
}

/// PackageListReader port for loading reported package lists
pub trait PackageListReader {
    /// Reads and parses a package list file
    ///
    /// # Arguments
    /// * `path` - Path of the package list (JSON, YAML or TOML)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file format is not supported
    /// - The content is not a list of package records
    fn read_package_list(&self, path: &Path) -> Result<PackageList>;
}
