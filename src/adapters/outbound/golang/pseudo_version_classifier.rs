use crate::ports::outbound::PseudoVersionClassifier;
use regex::Regex;
use std::sync::LazyLock;

/// Go pseudo-version grammar:
/// - `vX.0.0-yyyymmddhhmmss-abcdefabcdef` (no earlier tag)
/// - `vX.Y.Z-pre.0.yyyymmddhhmmss-abcdefabcdef` (after a pre-release tag)
/// - `vX.Y.(Z+1)-0.yyyymmddhhmmss-abcdefabcdef` (after a release tag)
///
/// each optionally followed by `+build` metadata.
static PSEUDO_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v[0-9]+\.(0\.0-|[0-9]+\.[0-9]+-([^+]*\.)?0\.)[0-9]{14}-[A-Za-z0-9]+(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$",
    )
    .expect("static regex")
});

/// GoPseudoVersionClassifier adapter implementing the PseudoVersionClassifier port
#[derive(Debug, Clone, Copy, Default)]
pub struct GoPseudoVersionClassifier;

impl GoPseudoVersionClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl PseudoVersionClassifier for GoPseudoVersionClassifier {
    fn is_pseudo(&self, version: &str) -> bool {
        PSEUDO_VERSION.is_match(version)
    }
}
