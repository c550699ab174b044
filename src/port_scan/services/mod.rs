mod directory_filter;
mod duplicate_analyzer;
mod free_port_finder;
mod port_extractor;

pub use directory_filter::{
    DirectoryFilter, COMPOSE_FILE_NAMES, EXCLUDED_DIRECTORIES, VCS_DIRECTORIES,
};
pub use duplicate_analyzer::{DuplicateAnalyzer, DuplicatePort};
pub use free_port_finder::{FreePort, FreePortFinder};
pub use port_extractor::{Extraction, PortExtractor, SkippedPort};
