use crate::port_scan::domain::DepthExpression;
use crate::port_scan::services::DirectoryFilter;
use crate::ports::outbound::ComposeFileLocator;
use crate::shared::error::PortFinderError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// WalkDirLocator adapter for discovering compose files on disk
///
/// Excluded directories are pruned during the walk, so nothing below them
/// is ever read. Symbolic links are not followed and entries are visited in
/// file-name order, which keeps repeated scans byte-identical.
pub struct WalkDirLocator;

impl WalkDirLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WalkDirLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeFileLocator for WalkDirLocator {
    fn locate(
        &self,
        root: &Path,
        depth: &DepthExpression,
        filter: &DirectoryFilter,
    ) -> Result<Vec<PathBuf>> {
        if depth.is_empty() {
            return Ok(Vec::new());
        }

        // walkdir counts the root as depth 0, a file inside it as depth 1
        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .min_depth(1);
        if let Some(max_depth) = depth.max_depth() {
            walker = walker.max_depth(max_depth + 1);
        }

        let mut files = Vec::new();
        let entries = walker.into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir() && filter.is_excluded_dir(entry.file_name()))
        });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(PortFinderError::InvalidDirectory {
                        path: root.to_path_buf(),
                        reason: format!("Failed to read directory: {}", err),
                    }
                    .into());
                }
                // Unreadable subdirectories are skipped
                Err(_) => continue,
            };

            if !entry.file_type().is_file() || !filter.is_compose_file(entry.file_name()) {
                continue;
            }

            if depth.matches(entry.depth() - 1) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
