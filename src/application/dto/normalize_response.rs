use crate::application::read_models::{NormalizedReadModel, NormalizedReadModelBuilder};
use crate::normalization::domain::{NormalizedPackages, ReportMetadata};

/// NormalizeResponse - Internal response DTO from the normalization use case
#[derive(Debug, Clone)]
pub struct NormalizeResponse {
    pub normalized: NormalizedPackages,
    pub metadata: ReportMetadata,
    pub exclude_pseudo: bool,
}

impl NormalizeResponse {
    pub fn new(normalized: NormalizedPackages, metadata: ReportMetadata, exclude_pseudo: bool) -> Self {
        Self {
            normalized,
            metadata,
            exclude_pseudo,
        }
    }

    /// Read model ready to be handed to a formatter
    pub fn read_model(&self) -> NormalizedReadModel {
        NormalizedReadModelBuilder::build(&self.normalized, &self.metadata, self.exclude_pseudo)
    }
}
