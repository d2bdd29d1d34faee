/// PseudoVersionClassifier port for detecting synthetic versions
///
/// A pseudo version is derived from a commit rather than a tagged release
/// (Go modules use them when no suitable tag exists).
/// Implementations must be deterministic for a given version string.
pub trait PseudoVersionClassifier {
    /// Returns true when `version` (already cleaned) is a pseudo version
    fn is_pseudo(&self, version: &str) -> bool;
}

impl<T: PseudoVersionClassifier + ?Sized> PseudoVersionClassifier for &T {
    fn is_pseudo(&self, version: &str) -> bool {
        (**self).is_pseudo(version)
    }
}
