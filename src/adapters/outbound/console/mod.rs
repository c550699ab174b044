/// Console adapters for user-facing output
mod styled_reporter;

pub use styled_reporter::{ConsoleTarget, StyledConsoleReporter};
