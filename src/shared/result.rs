/// Result alias used across every layer of the port finder.
///
/// Fatal conditions are `PortFinderError` values wrapped in `anyhow::Error`,
/// so callers can downcast when they need to pick an output style.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
