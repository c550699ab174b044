/// Filesystem adapters for discovering and reading compose files
mod compose_file_finder;
mod file_reader;
mod stdout_presenter;

pub use compose_file_finder::WalkDirLocator;
pub use file_reader::FileSystemReader;
pub use stdout_presenter::StdoutPresenter;
