use std::ffi::OsStr;

/// File names treated as compose files
pub const COMPOSE_FILE_NAMES: [&str; 2] = ["docker-compose.yml", "docker-compose.override.yml"];

/// Directory names never descended into, at any level below the scan root
pub const EXCLUDED_DIRECTORIES: [&str; 38] = [
    "vendor",
    "vagrant-php",
    ".vagrant",
    "app",
    "intranet",
    "intranet-old",
    "frv",
    "offertrechner",
    "translations",
    "deployment",
    "assets",
    "var",
    "src",
    "config",
    "files",
    ".idea",
    "node_modules",
    "templates",
    "web",
    "public",
    "frontend",
    "system",
    "plugins",
    "check",
    "composer",
    "cache",
    "ansible",
    "provisioning",
    "engine",
    "themes",
    "media",
    "snippets",
    "test",
    "tests",
    "intercms",
    "resources",
    "isotope",
    "jira-attachments",
];

/// Version control metadata directories, always skipped
pub const VCS_DIRECTORIES: [&str; 8] = [
    ".git", ".svn", ".hg", "CVS", "_darcs", ".arch-params", ".monotone", ".bzr",
];

/// DirectoryFilter - decides which entries of the scanned tree are visited
///
/// Matching is by whole path component, so `vendor` excludes `vendor/` and
/// `a/vendor/` but not `vendor-tools/`.
#[derive(Debug, Clone)]
pub struct DirectoryFilter {
    excluded: Vec<String>,
}

impl DirectoryFilter {
    /// Creates a filter from the built-in list plus `extra` directory names
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut excluded: Vec<String> = EXCLUDED_DIRECTORIES
            .iter()
            .chain(VCS_DIRECTORIES.iter())
            .map(|name| name.to_string())
            .collect();

        for name in extra {
            let name: String = name.into();
            let name = name.trim().trim_matches('/').to_string();
            if !name.is_empty() && !excluded.contains(&name) {
                excluded.push(name);
            }
        }

        Self { excluded }
    }

    /// Whether a directory with this name is pruned from the walk
    pub fn is_excluded_dir(&self, name: &OsStr) -> bool {
        match name.to_str() {
            Some(name) => is_hidden(name) || self.excluded.iter().any(|e| e == name),
            None => false,
        }
    }

    /// Whether a file with this name is a compose file
    pub fn is_compose_file(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| COMPOSE_FILE_NAMES.contains(&name))
    }
}

impl Default for DirectoryFilter {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

/// Dot-prefixed entries are never visited
fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}
