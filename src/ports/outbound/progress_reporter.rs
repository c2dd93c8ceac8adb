/// ProgressReporter port for operator diagnostics
///
/// Diagnostics are kept apart from the report stream, so an adapter
/// writing to stderr never interleaves with reports on stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the identifier list
    ///
    /// # Arguments
    /// * `current` - Identifiers processed so far
    /// * `total` - Total identifiers in the run
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, such as a failed resolution for one identifier
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);

    /// Runs `output` with any live progress display hidden
    ///
    /// Report text written to a terminal is passed through here so it does
    /// not land on the same line as a progress bar.
    fn suspend(&self, output: &mut dyn FnMut()) {
        output();
    }
}
