use crate::shared::Result;
use std::path::Path;

/// PackageListReader port for reading the list of identifiers to look up
pub trait PackageListReader {
    /// Reads identifier tokens from the input at `path`
    ///
    /// # Returns
    /// Tokens in input order, trimmed, with blank lines skipped
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input does not exist
    /// - The input cannot be read due to permissions or I/O errors
    fn read_package_list(&self, path: &Path) -> Result<Vec<String>>;
}
