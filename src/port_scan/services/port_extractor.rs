use crate::port_scan::domain::{
    ComposeDocument, ComposeValue, MalformedPort, Port, PortRecord, ServiceName, ServiceSet,
};
use std::path::Path;

/// A port value that was skipped, with the service it was declared under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPort {
    pub service: ServiceName,
    pub error: MalformedPort,
}

/// Ports found in one compose file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<PortRecord>,
    pub skipped: Vec<SkippedPort>,
}

/// PortExtractor - collects `services.<name>.ports` for every configured service
pub struct PortExtractor;

impl PortExtractor {
    /// Extracts the host ports of `services` from `document`.
    ///
    /// Records are ordered by service order, then entry order; a port range
    /// contributes one record per port. A bare scalar `ports:` value counts
    /// as a one-element list.
    pub fn extract(document: &ComposeDocument, services: &ServiceSet, file: &Path) -> Extraction {
        let mut extraction = Extraction::default();

        for service in services.iter() {
            let Some(ports) = document.service_ports(service.as_str()) else {
                continue;
            };

            for entry in Self::entries(ports) {
                match Port::from_entry(entry) {
                    Ok(ports) => extraction.records.extend(
                        ports
                            .into_iter()
                            .map(|port| PortRecord::new(port, file.to_path_buf())),
                    ),
                    Err(error) => extraction.skipped.push(SkippedPort {
                        service: service.clone(),
                        error,
                    }),
                }
            }
        }

        extraction
    }

    fn entries(ports: &ComposeValue) -> Vec<&ComposeValue> {
        match ports {
            ComposeValue::Sequence(items) => items.iter().collect(),
            single => vec![single],
        }
    }
}
