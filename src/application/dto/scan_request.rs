use crate::port_scan::domain::{DepthExpression, ServiceSet, StartPort};
use crate::port_scan::services::DirectoryFilter;
use crate::shared::error::PortFinderError;
use crate::shared::Result;
use std::path::PathBuf;

/// ScanRequest - Internal request DTO for the port scan use case
///
/// Every field is already validated; building one is the last step before
/// the scan starts.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Canonical directory to scan
    pub directory: PathBuf,
    /// Validated `--start` value
    pub start: StartPort,
    /// Depth bound for discovery
    pub depth: DepthExpression,
    /// Services whose ports are collected
    pub services: ServiceSet,
    /// Directory exclusions
    pub directory_filter: DirectoryFilter,
}

impl ScanRequest {
    pub fn builder() -> ScanRequestBuilder {
        ScanRequestBuilder::default()
    }
}

/// Builder for [`ScanRequest`]; everything but the directory has a default
#[derive(Debug, Default)]
pub struct ScanRequestBuilder {
    directory: Option<PathBuf>,
    start: Option<StartPort>,
    depth: Option<DepthExpression>,
    services: Option<ServiceSet>,
    directory_filter: Option<DirectoryFilter>,
}

impl ScanRequestBuilder {
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn start(mut self, start: StartPort) -> Self {
        self.start = Some(start);
        self
    }

    pub fn depth(mut self, depth: DepthExpression) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn services(mut self, services: ServiceSet) -> Self {
        self.services = Some(services);
        self
    }

    pub fn directory_filter(mut self, filter: DirectoryFilter) -> Self {
        self.directory_filter = Some(filter);
        self
    }

    /// # Errors
    /// Returns a validation error if no directory was set
    pub fn build(self) -> Result<ScanRequest> {
        let directory = self.directory.ok_or_else(|| PortFinderError::Validation {
            message: "scan directory is required".to_string(),
        })?;

        Ok(ScanRequest {
            directory,
            start: self.start.unwrap_or_default(),
            depth: self.depth.unwrap_or_default(),
            services: self.services.unwrap_or_default(),
            directory_filter: self.directory_filter.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = ScanRequest::builder().directory("/srv").build().unwrap();
        assert_eq!(request.directory, PathBuf::from("/srv"));
        assert_eq!(request.start, StartPort::default());
        assert_eq!(request.depth, DepthExpression::default());
        assert_eq!(request.services, ServiceSet::default());
    }

    #[test]
    fn test_builder_requires_directory() {
        let err = ScanRequest::builder().build().unwrap_err();
        assert!(err.to_string().contains("scan directory is required"));
    }

    #[test]
    fn test_builder_overrides() {
        let request = ScanRequest::builder()
            .directory("/srv")
            .start("5432".parse().unwrap())
            .depth("<1".parse().unwrap())
            .services(ServiceSet::new(["postgres"]).unwrap())
            .build()
            .unwrap();
        assert_eq!(request.start.value(), 5432.0);
        assert!(!request.depth.matches(1));
        assert_eq!(request.services.iter().next().unwrap().as_str(), "postgres");
    }
}
