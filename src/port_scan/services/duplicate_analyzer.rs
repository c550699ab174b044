use crate::port_scan::domain::{Port, PortRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A port declared more than once across all scanned files and services
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePort {
    pub port: Port,
    /// One entry per occurrence; a file declaring the port twice appears twice
    pub files: Vec<PathBuf>,
}

impl DuplicatePort {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// DuplicateAnalyzer - finds ports used more than once
pub struct DuplicateAnalyzer;

impl DuplicateAnalyzer {
    /// Groups `records` by port and keeps the groups with more than one entry.
    ///
    /// Groups come out in the order their port was first seen; files inside
    /// a group keep record order.
    pub fn analyze(records: &[PortRecord]) -> Vec<DuplicatePort> {
        let mut order: Vec<Port> = Vec::new();
        let mut files_per_port: HashMap<Port, Vec<PathBuf>> = HashMap::new();

        for record in records {
            files_per_port
                .entry(record.port())
                .or_insert_with(|| {
                    order.push(record.port());
                    Vec::new()
                })
                .push(record.file().to_path_buf());
        }

        order
            .into_iter()
            .filter_map(|port| {
                let files = files_per_port.remove(&port)?;
                (files.len() > 1).then_some(DuplicatePort { port, files })
            })
            .collect()
    }
}
