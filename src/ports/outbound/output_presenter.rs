use crate::shared::Result;

/// OutputPresenter port for presenting reports
///
/// This port abstracts the output destination (stdout, file, etc.)
/// that receives one report block per identifier.
pub trait OutputPresenter {
    /// Presents one report block, followed by a blank line
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
