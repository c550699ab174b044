/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system and the console.
pub mod compose_file_locator;
pub mod compose_file_reader;
pub mod console_reporter;
pub mod output_presenter;

pub use compose_file_locator::ComposeFileLocator;
pub use compose_file_reader::ComposeFileReader;
pub use console_reporter::ConsoleReporter;
pub use output_presenter::OutputPresenter;
