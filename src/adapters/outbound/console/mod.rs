/// Console adapters for operator diagnostics on stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
