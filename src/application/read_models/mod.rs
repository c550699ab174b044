//! Read models
//!
//! View-optimized structs that flatten the scan result for output.

pub mod scan_report;

pub use scan_report::{DuplicateView, PortView, ScanReport};
