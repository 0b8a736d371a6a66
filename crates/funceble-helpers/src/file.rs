//! Single-file read, write and delete

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A file addressed by path.
///
/// Existence is checked on demand and never cached. No operation creates
/// missing parent directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the path currently points at a regular file.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `content` to the file.
    ///
    /// With `overwrite` unset and an existing file, `content` is appended
    /// as-is. Otherwise the file is created or truncated to exactly
    /// `content`. Newlines are written untranslated on every platform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathInvalid`] if the parent directory does not exist.
    pub fn write(&self, content: &str, overwrite: bool) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(Error::PathInvalid {
                path: self.path.clone(),
                message: format!("parent directory {} does not exist", parent.display()),
            });
        }

        let append = !overwrite && self.exists();
        tracing::debug!(path = %self.path.display(), append, bytes = content.len(), "Writing file");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    /// Delete the file. Deleting a missing file is a no-op.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Deleted file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }
}

impl From<&str> for File {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for File {
    fn from(p: PathBuf) -> Self {
        Self { path: p }
    }
}
