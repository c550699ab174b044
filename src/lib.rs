//! compose-port-finder - pick a free host port for database containers
//!
//! Scans a directory tree for `docker-compose.yml` and
//! `docker-compose.override.yml` files, collects the host ports of selected
//! services, warns about ports used more than once and recommends either
//! the lowest unused port inside the observed range or the next port above it.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`port_scan`): Compose documents, ports and the analyses over them
//! - **Application Layer** (`application`): The scan use case, request/response DTOs, report
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system and console implementations of the ports
//! - **Shared** (`shared`): Error types and file guards
//!
//! # Example
//!
//! ```no_run
//! use compose_port_finder::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = FindFreePortUseCase::new(
//!     WalkDirLocator::new(),
//!     FileSystemReader::new(),
//!     StyledConsoleReporter::new(ConsoleTarget::Stdout, false),
//! );
//!
//! let request = ScanRequest::builder()
//!     .directory("/home/me/projects")
//!     .services(ServiceSet::new(["db", "mysql"])?)
//!     .build()?;
//! let response = use_case.execute(request)?;
//! println!("{}", response.free_port);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod port_scan;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleTarget, StyledConsoleReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, StdoutPresenter, WalkDirLocator,
    };
    pub use crate::application::dto::{OutputFormat, ScanRequest, ScanResponse};
    pub use crate::application::factories::ReporterFactory;
    pub use crate::application::read_models::ScanReport;
    pub use crate::application::use_cases::FindFreePortUseCase;
    pub use crate::port_scan::domain::{
        ComposeDocument, ComposeValue, DepthExpression, Port, PortRecord, ServiceName,
        ServiceSet, StartPort, DEFAULT_DEPTH, MINIMUM_START_PORT,
    };
    pub use crate::port_scan::services::{
        DirectoryFilter, DuplicateAnalyzer, DuplicatePort, FreePort, FreePortFinder,
        PortExtractor,
    };
    pub use crate::ports::outbound::{
        ComposeFileLocator, ComposeFileReader, ConsoleReporter, OutputPresenter,
    };
    pub use crate::shared::Result;
}
