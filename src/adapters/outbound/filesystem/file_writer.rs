use crate::ports::outbound::OutputPresenter;
use crate::shared::error::PackageFinderError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing reports to a file
///
/// The file is created (or truncated) once, when the writer is built;
/// every presented block is then appended, so reports reach the file as
/// soon as each identifier is resolved.
pub struct FileSystemWriter {
    output_path: PathBuf,
    file: File,
}

impl FileSystemWriter {
    /// Creates or truncates the output file
    ///
    /// # Errors
    /// Returns `FileWriteError` if the parent directory does not exist, the
    /// path is a symbolic link, or the file cannot be created.
    pub fn create(output_path: PathBuf) -> Result<Self> {
        Self::validate_output_path(&output_path)?;

        let file = File::create(&output_path).map_err(|e| PackageFinderError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(Self { output_path, file })
    }

    fn validate_output_path(output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(PackageFinderError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }

        if output_path.exists() {
            validate_not_symlink(output_path, "write").map_err(|e| {
                PackageFinderError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: e.to_string(),
                }
            })?;
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let mut file = &self.file;
        file.write_all(content.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| PackageFinderError::FileWriteError {
                path: self.output_path.clone(),
                details: e.to_string(),
            })?;
        Ok(())
    }
}

/// StdoutPresenter adapter for writing reports to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .and_then(|()| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
