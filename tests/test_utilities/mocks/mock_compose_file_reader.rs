use compose_port_finder::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ComposeFileReader serving file contents from memory
#[derive(Default)]
pub struct MockComposeFileReader {
    contents: HashMap<PathBuf, String>,
}

impl MockComposeFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.contents.insert(path.into(), content.to_string());
        self
    }
}

impl ComposeFileReader for MockComposeFileReader {
    fn read_compose_file(&self, path: &Path) -> Result<String> {
        match self.contents.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock read failure: {}", path.display()),
        }
    }
}
