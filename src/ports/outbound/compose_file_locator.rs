use crate::port_scan::domain::DepthExpression;
use crate::port_scan::services::DirectoryFilter;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ComposeFileLocator port for discovering compose files
///
/// This port abstracts the directory walk that finds `docker-compose.yml`
/// and `docker-compose.override.yml` files below the scan root.
pub trait ComposeFileLocator {
    /// Lists the compose files under `root`
    ///
    /// # Arguments
    /// * `root` - Canonical directory to search
    /// * `depth` - Depth bound; 0 is a file directly inside `root`
    /// * `filter` - Directory exclusions and accepted file names
    ///
    /// # Returns
    /// The matching files in discovery order (possibly empty)
    ///
    /// # Errors
    /// Returns an error if `root` itself cannot be read
    fn locate(
        &self,
        root: &Path,
        depth: &DepthExpression,
        filter: &DirectoryFilter,
    ) -> Result<Vec<PathBuf>>;
}
