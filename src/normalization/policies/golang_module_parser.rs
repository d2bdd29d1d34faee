use super::identifier_parser::{IdentifierParser, ParsedPackage};
use crate::normalization::domain::{PackageIdentity, RawPackage};
use crate::ports::outbound::{PseudoVersionClassifier, VersionCleaner};
use crate::shared::error::NormalizerError;
use crate::shared::Result;

/// Separator between package path and module path in Go identifiers
const MODULE_SEPARATOR: char = '@';

/// Components of a Go `name@module` identifier with its cleaned version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GolangMetadata {
    pub name: String,
    pub version: String,
    pub module: String,
}

/// Identifier strategy for Go modules
///
/// Every package and dependency must be reported as `name@module`.
/// Versions are cleaned through the injected [`VersionCleaner`] and then
/// classified by the [`PseudoVersionClassifier`].
#[derive(Debug, Clone)]
pub struct GolangModuleParser<C, P> {
    cleaner: C,
    classifier: P,
}

impl<C, P> GolangModuleParser<C, P>
where
    C: VersionCleaner,
    P: PseudoVersionClassifier,
{
    pub fn new(cleaner: C, classifier: P) -> Self {
        Self {
            cleaner,
            classifier,
        }
    }

    /// Splits a Go identifier and cleans its version
    ///
    /// # Errors
    /// Returns [`NormalizerError::InvalidIdentifier`] unless the name contains
    /// exactly one `@`.
    pub fn get_golang_metadata(&self, raw: &RawPackage) -> Result<GolangMetadata> {
        let separators = raw.name.matches(MODULE_SEPARATOR).count();
        let Some((name, module)) = raw
            .name
            .split_once(MODULE_SEPARATOR)
            .filter(|_| separators == 1)
        else {
            return Err(NormalizerError::InvalidIdentifier {
                name: raw.name.clone(),
                reason: format!(
                    "expected exactly one '{}' separator, found {}",
                    MODULE_SEPARATOR, separators
                ),
            }
            .into());
        };

        // Only the cleaned version is kept; auxiliary metadata is dropped.
        let cleaned = self.cleaner.clean(&raw.version);

        Ok(GolangMetadata {
            name: name.to_string(),
            version: cleaned.version,
            module: module.to_string(),
        })
    }
}

impl<C, P> IdentifierParser for GolangModuleParser<C, P>
where
    C: VersionCleaner,
    P: PseudoVersionClassifier,
{
    fn parse_package(&self, raw: &RawPackage) -> Result<ParsedPackage> {
        let metadata = self.get_golang_metadata(raw)?;
        let pseudo = self.classifier.is_pseudo(&metadata.version);

        Ok(ParsedPackage {
            identity: PackageIdentity::new(metadata.name, metadata.version),
            module: Some(metadata.module),
            pseudo,
        })
    }
}
