use crate::ports::outbound::ComposeFileReader;
use crate::shared::error::PortFinderError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading compose files from the file system
///
/// The file handle lives only for the duration of one read, whatever the
/// outcome.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeFileReader for FileSystemReader {
    fn read_compose_file(&self, path: &Path) -> Result<String> {
        let to_read_error = |details: String| PortFinderError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        // Security checks: regular file, no symlink, size limit
        validate_regular_file(path, "compose file").map_err(|e| to_read_error(e.to_string()))?;

        fs::read_to_string(path).map_err(|e| to_read_error(e.to_string()).into())
    }
}
