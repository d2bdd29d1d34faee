mod golang_module_parser;
mod identifier_parser;

pub use golang_module_parser::{GolangMetadata, GolangModuleParser};
pub use identifier_parser::{IdentifierParser, LegacyModuleParser, ParsedPackage, PassThroughParser};
