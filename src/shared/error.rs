use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Both successful outcomes (a hole was found, or the next port above the
/// observed maximum) exit with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// A free port was recommended
    Success = 0,
    /// A fatal condition stopped the scan (bad directory, no files, bad start port, ...)
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the port scan.
///
/// Every variant is fatal. Per-file problems (parse errors, malformed port
/// values) are reported as warnings and never surface here.
#[derive(Debug, Error)]
pub enum PortFinderError {
    #[error("Given directory [{path}] not found.\nReason: {reason}\n\n💡 Hint: Please specify an existing directory")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("No files found to process in [{dir}]")]
    NoFilesFound { dir: PathBuf },

    #[error("Given PORT [{value}] needs to be a number >= {minimum}.")]
    InvalidStartOption { value: String, minimum: u16 },

    #[error("Invalid depth expression [{expression}]: {reason}\n\n💡 Hint: Use a comparator followed by a number, e.g. \"<=2\", \"<3\" or \"2\"")]
    InvalidDepthExpression { expression: String, reason: String },

    #[error("Invalid service name [{name}]: {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("No ports found in {files} scanned file(s).\n\n💡 Hint: Check the --services option matches the service names in your compose files")]
    EmptyPortSet { files: usize },

    #[error("No free port left above {highest}.")]
    PortRangeExhausted { highest: u16 },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for builder patterns and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl PortFinderError {
    /// Whether the failure is reported as a warning block rather than an error block.
    pub fn is_warning(&self) -> bool {
        matches!(self, PortFinderError::NoFilesFound { .. })
    }
}
