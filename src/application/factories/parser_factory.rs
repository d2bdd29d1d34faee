use crate::application::dto::ParsingMode;
use crate::normalization::domain::Ecosystem;
use crate::normalization::policies::{
    GolangModuleParser, IdentifierParser, LegacyModuleParser, PassThroughParser,
};
use crate::ports::outbound::{PseudoVersionClassifier, VersionCleaner};

/// Factory for selecting the identifier strategy of an ecosystem
pub struct ParserFactory;

impl ParserFactory {
    /// Creates the identifier parser for `ecosystem`
    ///
    /// Ecosystems without module identifiers always pass identities through.
    /// Module-based ecosystems use strict `name@module` parsing unless
    /// `mode` asks for the legacy behavior.
    pub fn create<'a, C, P>(
        ecosystem: Ecosystem,
        mode: ParsingMode,
        cleaner: &'a C,
        classifier: &'a P,
    ) -> Box<dyn IdentifierParser + 'a>
    where
        C: VersionCleaner,
        P: PseudoVersionClassifier,
    {
        if !ecosystem.is_module_based() {
            return Box::new(PassThroughParser);
        }

        match mode {
            ParsingMode::ModuleAware => Box::new(GolangModuleParser::new(cleaner, classifier)),
            ParsingMode::Legacy => Box::new(LegacyModuleParser::new(cleaner)),
        }
    }
}
