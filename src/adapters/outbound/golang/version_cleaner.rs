use crate::ports::outbound::{CleanedVersion, VersionCleaner};

/// Build marker Go appends to v2+ versions of modules without a go.mod
const INCOMPATIBLE_SUFFIX: &str = "+incompatible";

/// GoVersionCleaner adapter implementing the VersionCleaner port
///
/// Trims surrounding whitespace and drops a trailing `+incompatible`
/// marker, reporting the marker as metadata. Everything else, including
/// the leading `v`, is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoVersionCleaner;

impl GoVersionCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl VersionCleaner for GoVersionCleaner {
    fn clean(&self, raw_version: &str) -> CleanedVersion {
        let trimmed = raw_version.trim();
        match trimmed.strip_suffix(INCOMPATIBLE_SUFFIX) {
            Some(version) => CleanedVersion::new(Some(INCOMPATIBLE_SUFFIX.to_string()), version),
            None => CleanedVersion::new(None, trimmed),
        }
    }
}
