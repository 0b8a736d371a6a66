//! Directory path normalization across separator conventions

use std::sync::OnceLock;

static SEPARATOR: OnceLock<char> = OnceLock::new();

/// The directory separator used by [`Directory::fix_path`].
///
/// Resolved once per process. Defaults to the platform's native separator
/// unless [`set_directory_separator`] ran first.
pub fn directory_separator() -> char {
    *SEPARATOR.get_or_init(|| std::path::MAIN_SEPARATOR)
}

/// Inject the process-wide directory separator.
///
/// Only effective before the first call to [`directory_separator`]. Returns
/// `true` if `separator` is now the process-wide one.
pub fn set_directory_separator(separator: char) -> bool {
    SEPARATOR.set(separator).is_ok() || directory_separator() == separator
}

/// A directory path string awaiting normalization.
///
/// Never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    inner: String,
    separator: char,
}

impl Directory {
    /// Wrap a directory path using the process-wide separator.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_separator(path, directory_separator())
    }

    /// Wrap a directory path with an explicit target separator.
    pub fn with_separator(path: impl Into<String>, separator: char) -> Self {
        Self {
            inner: path.into(),
            separator,
        }
    }

    /// Get the path as given.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Normalize the path.
    ///
    /// Both `/` and `\` count as separators. Empty components are dropped,
    /// which strips any leading separator and collapses runs of them. The
    /// remaining components are joined with the target separator and exactly
    /// one trailing separator is appended. A path without components (`""`,
    /// `"/"`, `"\\"`) normalizes to the empty string.
    pub fn fix_path(&self) -> String {
        let sep = self.separator;
        let mut fixed = String::with_capacity(self.inner.len() + 1);

        for component in self
            .inner
            .split(['/', '\\', sep])
            .filter(|component| !component.is_empty())
        {
            fixed.push_str(component);
            fixed.push(sep);
        }

        fixed
    }
}

impl std::fmt::Display for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for Directory {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Directory {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
