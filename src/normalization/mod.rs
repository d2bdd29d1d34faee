/// Normalization core - pure domain logic with no I/O
///
/// Turns flat package lists into duplicate-free dependency graphs.
/// Ecosystem-specific identifier handling is injected through
/// the [`policies::IdentifierParser`] strategy.
pub mod domain;
pub mod policies;
pub mod services;
