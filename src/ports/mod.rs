/// Ports module defining interfaces for hexagonal architecture
///
/// The CLI drives the use case directly, so only outbound (driven) ports exist.
pub mod outbound;
