/// Result of canonicalizing a reported version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedVersion {
    /// Auxiliary information removed while cleaning (e.g. a build marker)
    pub metadata: Option<String>,
    /// The canonical version used for package identity
    pub version: String,
}

impl CleanedVersion {
    pub fn new(metadata: Option<String>, version: impl Into<String>) -> Self {
        Self {
            metadata,
            version: version.into(),
        }
    }
}

/// VersionCleaner port for canonicalizing versions before they become identity
///
/// Implementations must be deterministic and free of side effects:
/// the normalizer may call them any number of times for the same input.
pub trait VersionCleaner {
    /// Canonicalizes a raw version string
    ///
    /// # Arguments
    /// * `raw_version` - The version exactly as reported
    ///
    /// # Returns
    /// The cleaned version together with whatever auxiliary metadata was stripped
    fn clean(&self, raw_version: &str) -> CleanedVersion;
}

impl<T: VersionCleaner + ?Sized> VersionCleaner for &T {
    fn clean(&self, raw_version: &str) -> CleanedVersion {
        (**self).clean(raw_version)
    }
}
