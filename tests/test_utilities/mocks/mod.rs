/// Mock implementations for testing
mod mock_compose_file_locator;
mod mock_compose_file_reader;
mod mock_console_reporter;

pub use mock_compose_file_locator::MockComposeFileLocator;
pub use mock_compose_file_reader::MockComposeFileReader;
pub use mock_console_reporter::MockConsoleReporter;
