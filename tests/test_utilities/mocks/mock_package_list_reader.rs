use dep_normalizer::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock PackageListReader serving in-memory package lists by path
#[derive(Default)]
pub struct MockPackageListReader {
    pub lists: HashMap<PathBuf, PackageList>,
    pub should_fail: bool,
}

impl MockPackageListReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(
        mut self,
        path: &str,
        ecosystem: Option<Ecosystem>,
        packages: Vec<RawPackage>,
    ) -> Self {
        self.lists
            .insert(PathBuf::from(path), PackageList::new(ecosystem, packages));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            lists: HashMap::new(),
            should_fail: true,
        }
    }
}

impl PackageListReader for MockPackageListReader {
    fn read_package_list(&self, path: &Path) -> Result<PackageList> {
        if self.should_fail {
            anyhow::bail!("Mock package list read failure");
        }
        match self.lists.get(path) {
            Some(list) => Ok(list.clone()),
            None => anyhow::bail!("Mock has no package list at {}", path.display()),
        }
    }
}
