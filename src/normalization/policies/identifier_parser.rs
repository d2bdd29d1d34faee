use crate::normalization::domain::{PackageIdentity, RawPackage};
use crate::ports::outbound::VersionCleaner;
use crate::shared::Result;

/// A raw package record after the ecosystem's identifier rules were applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPackage {
    pub identity: PackageIdentity,
    /// Module component of a composite `name@module` identifier
    pub module: Option<String>,
    /// Whether the cleaned version is a pseudo version
    pub pseudo: bool,
}

impl ParsedPackage {
    /// A parsed package with no module and a regular version
    pub fn plain(identity: PackageIdentity) -> Self {
        Self {
            identity,
            module: None,
            pseudo: false,
        }
    }
}

/// IdentifierParser strategy applied by the normalizer to every record
///
/// Roots (top-level packages) and their dependencies go through separate
/// hooks because some ecosystems only rewrite one of the two.
/// Parsing never mutates the caller's record; it produces a fresh identity.
pub trait IdentifierParser {
    /// Parses a top-level package
    ///
    /// # Errors
    /// Returns an error if the identifier does not follow the ecosystem's shape.
    /// The error aborts the whole normalization.
    fn parse_package(&self, raw: &RawPackage) -> Result<ParsedPackage>;

    /// Parses one direct dependency of a top-level package
    fn parse_dependency(&self, raw: &RawPackage) -> Result<ParsedPackage> {
        self.parse_package(raw)
    }
}

/// Default strategy: identity exactly as reported
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughParser;

impl IdentifierParser for PassThroughParser {
    fn parse_package(&self, raw: &RawPackage) -> Result<ParsedPackage> {
        Ok(ParsedPackage::plain(raw.identity()))
    }
}

/// Module-ecosystem handling for callers that do not delegate to
/// [`super::GolangModuleParser`]
///
/// Top-level names are cut at the first `@` and their versions cleaned.
/// Dependencies are kept as reported, no pseudo classification happens
/// and a name without `@` is accepted unchanged.
#[derive(Debug, Clone)]
pub struct LegacyModuleParser<C> {
    cleaner: C,
}

impl<C: VersionCleaner> LegacyModuleParser<C> {
    pub fn new(cleaner: C) -> Self {
        Self { cleaner }
    }
}

impl<C: VersionCleaner> IdentifierParser for LegacyModuleParser<C> {
    fn parse_package(&self, raw: &RawPackage) -> Result<ParsedPackage> {
        let name = raw
            .name
            .split_once('@')
            .map_or(raw.name.as_str(), |(name, _module)| name);
        let cleaned = self.cleaner.clean(&raw.version);

        Ok(ParsedPackage::plain(PackageIdentity::new(
            name,
            cleaned.version,
        )))
    }

    fn parse_dependency(&self, raw: &RawPackage) -> Result<ParsedPackage> {
        Ok(ParsedPackage::plain(raw.identity()))
    }
}
