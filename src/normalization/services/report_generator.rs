use crate::normalization::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for stamping normalization reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with current timestamp and unique serial number
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata {
            generated_at: Utc::now(),
            run_id: Uuid::new_v4(),
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
        }
    }

    /// Metadata for this crate, using the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
