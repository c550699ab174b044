use crate::port_scan::domain::PortRecord;
use crate::port_scan::services::{DuplicatePort, FreePort};
use std::path::PathBuf;

/// ScanResponse - Internal response DTO from the port scan use case
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Compose files discovered, in discovery order
    pub files: Vec<PathBuf>,
    /// Files that could not be read or parsed and contributed no ports
    pub failed_files: Vec<PathBuf>,
    /// Every port found, in discovery x service x entry order
    pub records: Vec<PortRecord>,
    /// Ports declared more than once
    pub duplicates: Vec<DuplicatePort>,
    /// The recommendation
    pub free_port: FreePort,
}
