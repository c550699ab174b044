/// ConsoleReporter port for everything the user sees while a scan runs
///
/// Implementations decide styling and the target stream; the use case only
/// decides what is said and in which order.
pub trait ConsoleReporter {
    /// Reports the heading printed once at start
    fn title(&self, message: &str);

    /// Reports a recoverable problem (parse error, duplicate port, ...)
    fn warning(&self, message: &str);

    /// Reports a fatal problem
    fn error(&self, message: &str);

    /// Reports the final recommendation
    fn success(&self, message: &str);

    /// Reports a bulleted list, e.g. the files sharing a duplicate port
    fn listing(&self, items: &[String]);

    /// Reports progress through the discovered files
    ///
    /// # Arguments
    /// * `current` - Files processed so far
    /// * `total` - Files discovered
    /// * `message` - Optional message (usually the file being parsed)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);
}

impl<T: ConsoleReporter + ?Sized> ConsoleReporter for &T {
    fn title(&self, message: &str) {
        (**self).title(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn listing(&self, items: &[String]) {
        (**self).listing(items)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }
}
