/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the normalization core
/// needs from the outside: version cleaning, pseudo-version classification,
/// package list input, formatting, presentation and progress reporting.
pub mod outbound;
