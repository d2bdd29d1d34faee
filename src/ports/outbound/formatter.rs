use crate::application::read_models::NormalizedReadModel;
use crate::shared::Result;

/// NormalizedFormatter port for rendering a normalization result
///
/// This port abstracts the output format (JSON, Markdown, ...).
pub trait NormalizedFormatter {
    /// Formats the read model into its textual representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &NormalizedReadModel) -> Result<String>;
}
