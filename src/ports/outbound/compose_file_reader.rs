use crate::shared::Result;
use std::path::Path;

/// ComposeFileReader port for reading a discovered compose file
pub trait ComposeFileReader {
    /// Reads the full text of the compose file at `path`
    ///
    /// # Errors
    /// Returns an error if the file is not a regular file, is too large,
    /// or cannot be read. Callers treat this as a per-file warning.
    fn read_compose_file(&self, path: &Path) -> Result<String>;
}
