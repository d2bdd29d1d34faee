use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Provenance of one normalization run
///
/// Kept as typed values; rendering to strings happens in [`Self::timestamp`]
/// and [`Self::serial_number`] so every output format agrees on the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub run_id: Uuid,
    pub tool_name: String,
    pub tool_version: String,
}

impl ReportMetadata {
    /// RFC 3339 timestamp in UTC with a `Z` suffix, second precision
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// `urn:uuid:` serial number identifying this run
    pub fn serial_number(&self) -> String {
        self.run_id.urn().to_string()
    }
}
