/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod normalize_request;
mod normalize_response;
mod output_format;

pub use normalize_request::{NormalizeRequest, ParsingMode};
pub use normalize_response::NormalizeResponse;
pub use output_format::OutputFormat;
