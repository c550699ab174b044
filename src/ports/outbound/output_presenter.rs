use crate::shared::Result;

/// OutputPresenter port for presenting the machine-readable report
///
/// This port abstracts where the `--format json` output is written.
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
