use crate::adapters::outbound::console::{ConsoleTarget, StyledConsoleReporter};
use crate::application::dto::OutputFormat;

/// Factory for creating the console reporter
///
/// Picks the stream for human-readable messages: stdout for text output,
/// stderr when stdout carries the JSON report.
pub struct ReporterFactory;

impl ReporterFactory {
    /// Returns the stream console blocks are written to for `format`
    pub fn target(format: OutputFormat) -> ConsoleTarget {
        match format {
            OutputFormat::Text => ConsoleTarget::Stdout,
            OutputFormat::Json => ConsoleTarget::Stderr,
        }
    }

    /// Creates a reporter for `format`
    ///
    /// # Examples
    /// ```
    /// use compose_port_finder::application::dto::OutputFormat;
    /// use compose_port_finder::application::factories::ReporterFactory;
    ///
    /// let reporter = ReporterFactory::create(OutputFormat::Text, false);
    /// ```
    pub fn create(format: OutputFormat, use_color: bool) -> StyledConsoleReporter {
        StyledConsoleReporter::new(Self::target(format), use_color)
    }
}
