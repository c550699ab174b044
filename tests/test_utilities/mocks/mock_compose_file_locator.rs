use compose_port_finder::prelude::*;
use std::path::{Path, PathBuf};

/// Mock ComposeFileLocator returning a fixed list of files
pub struct MockComposeFileLocator {
    pub files: Vec<PathBuf>,
    pub should_fail: bool,
}

impl MockComposeFileLocator {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            files: Vec::new(),
            should_fail: true,
        }
    }
}

impl ComposeFileLocator for MockComposeFileLocator {
    fn locate(
        &self,
        _root: &Path,
        _depth: &DepthExpression,
        _filter: &DirectoryFilter,
    ) -> Result<Vec<PathBuf>> {
        if self.should_fail {
            anyhow::bail!("Mock directory walk failure");
        }
        Ok(self.files.clone())
    }
}
