use crate::shared::error::PortFinderError;
use crate::shared::Result;
use std::fmt;

/// Service inspected when none is configured
pub const DEFAULT_SERVICE: &str = "db";

/// Maximum length for a service name (compose keys are short identifiers)
const MAX_SERVICE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a top-level compose service key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(PortFinderError::InvalidServiceName {
                name,
                reason: "service name cannot be empty".to_string(),
            }
            .into());
        }

        if trimmed.len() > MAX_SERVICE_NAME_LENGTH {
            return Err(PortFinderError::InvalidServiceName {
                reason: format!(
                    "service name is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_SERVICE_NAME_LENGTH
                ),
                name,
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The services whose ports are collected.
///
/// Repeated names collapse to one entry so a service is never counted twice;
/// first-seen order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSet(Vec<ServiceName>);

impl ServiceSet {
    /// Builds the set from raw names. An empty input yields the default `db` service.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut services: Vec<ServiceName> = Vec::new();
        for name in names {
            let service = ServiceName::new(name)?;
            if !services.contains(&service) {
                services.push(service);
            }
        }

        if services.is_empty() {
            services.push(ServiceName(DEFAULT_SERVICE.to_string()));
        }

        Ok(Self(services))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceName> {
        self.0.iter()
    }
}

impl Default for ServiceSet {
    fn default() -> Self {
        Self(vec![ServiceName(DEFAULT_SERVICE.to_string())])
    }
}
