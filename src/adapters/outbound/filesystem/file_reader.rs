use crate::ports::outbound::PackageListReader;
use crate::shared::error::PackageFinderError;
use crate::shared::security::{validate_regular_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the package list from disk
///
/// Each line holds one `name@version` token. Lines are trimmed and blank
/// lines are skipped; no other validation is applied.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting symlinks, non-regular files and oversized input
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "package list", MAX_INPUT_FILE_SIZE)?;
        Ok(fs::read_to_string(path)?)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageListReader for FileSystemReader {
    fn read_package_list(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(PackageFinderError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(path).map_err(|e| PackageFinderError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
