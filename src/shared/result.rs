/// Crate-wide result type; typed causes are `NormalizerError` values
/// carried inside the `anyhow::Error` chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
