//! Append-only file sink

use crate::core::error::{LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The file the worker drains into.
///
/// Opened in create+append mode; missing parent directories are created.
/// Owned exclusively by the worker thread after startup, so it carries no
/// locking of its own.
pub struct LogFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl LogFile {
    /// Open (or create) the log file at `path`, creating missing parent
    /// directories first.
    ///
    /// # Errors
    ///
    /// [`LoggerError::SinkOpen`] when the directories cannot be created or
    /// the file cannot be opened for append.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Append raw bytes to the file.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let path = &self.path;
        let writer = self.writer.as_mut().ok_or_else(|| LoggerError::SinkClosed {
            path: path.display().to_string(),
        })?;
        writer
            .write_all(bytes)
            .map_err(|e| LoggerError::sink_write(path.display().to_string(), e))
    }

    /// Push buffered bytes to the OS.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer
                .flush()
                .map_err(|e| LoggerError::sink_flush(self.path.display().to_string(), e))?;
        }
        Ok(())
    }

    /// Flush and release the file handle. Later appends error with
    /// [`LoggerError::SinkClosed`].
    pub fn close(&mut self) -> Result<()> {
        self.flush()?;
        self.writer = None;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        // Ensure buffered data reaches the file
        let _ = self.flush();
    }
}
