//! Serializable report of one scan, written by `--format json`

use crate::application::dto::{ScanRequest, ScanResponse};
use crate::port_scan::domain::StartPort;
use crate::port_scan::services::FreePort;
use serde::Serialize;

/// Main read model for a finished scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub directory: String,
    pub start: StartPort,
    pub depth: String,
    pub services: Vec<String>,
    pub files: Vec<String>,
    pub failed_files: Vec<String>,
    /// Every port found, in discovery order (duplicates kept)
    pub ports: Vec<PortView>,
    pub duplicates: Vec<DuplicateView>,
    pub recommendation: FreePort,
}

/// A port and the file that declared it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortView {
    pub port: u16,
    pub file: String,
}

/// A port used more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateView {
    pub port: u16,
    pub count: usize,
    pub files: Vec<String>,
}

impl ScanReport {
    /// Builds the report from the request that started the scan and its result
    pub fn build(request: &ScanRequest, response: &ScanResponse) -> Self {
        let display = |path: &std::path::Path| path.display().to_string();

        Self {
            directory: display(&request.directory),
            start: request.start,
            depth: request.depth.to_string(),
            services: request
                .services
                .iter()
                .map(|service| service.to_string())
                .collect(),
            files: response.files.iter().map(|f| display(f)).collect(),
            failed_files: response.failed_files.iter().map(|f| display(f)).collect(),
            ports: response
                .records
                .iter()
                .map(|record| PortView {
                    port: record.port().value(),
                    file: display(record.file()),
                })
                .collect(),
            duplicates: response
                .duplicates
                .iter()
                .map(|duplicate| DuplicateView {
                    port: duplicate.port.value(),
                    count: duplicate.count(),
                    files: duplicate.files.iter().map(|f| display(f)).collect(),
                })
                .collect(),
            recommendation: response.free_port,
        }
    }

    /// Renders the report as pretty-printed JSON
    pub fn to_json(&self) -> crate::shared::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize scan report: {}", e))
    }
}
