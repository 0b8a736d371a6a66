//! Helper settings, loadable from TOML, JSON or YAML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hash::Selection;
use crate::{Command, Directory, Error, Hash, Result, directory_separator};

/// Settings shared by the helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Separator for normalized directories. Unset means the process-wide one.
    pub directory_separator: Option<char>,
    /// Default digest selection: an algorithm name or `"all"`.
    pub hash_algorithm: String,
    /// Interpreter invoked as `shell -c`. Unset means the platform shell.
    pub shell: Option<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            directory_separator: None,
            hash_algorithm: "md5".to_string(),
            shell: None,
        }
    }
}

impl HelperConfig {
    /// Load settings from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = extension_of(path);

        let config: Self = match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error(path, "TOML", e))?,
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, "JSON", e))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(path, "YAML", e))?
            }
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.clone(),
                });
            }
        };

        // Unknown algorithms fail here, not on first hash.
        config.selection()?;
        tracing::debug!(path = %path.display(), "Loaded helper config");
        Ok(config)
    }

    /// Save settings to a file, in the format given by its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let extension = extension_of(path);

        let content = match extension.as_str() {
            "toml" => toml::to_string_pretty(self).map_err(|e| serialize_error(path, "TOML", e))?,
            "json" => {
                serde_json::to_string_pretty(self).map_err(|e| serialize_error(path, "JSON", e))?
            }
            "yaml" | "yml" => serde_yaml::to_string(self).map_err(|e| serialize_error(path, "YAML", e))?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.clone(),
                });
            }
        };

        std::fs::write(path, content).map_err(|e| Error::io(path, e))
    }

    pub fn separator(&self) -> char {
        self.directory_separator.unwrap_or_else(directory_separator)
    }

    pub fn selection(&self) -> Result<Selection> {
        self.hash_algorithm.parse()
    }

    pub fn directory(&self, path: impl Into<String>) -> Directory {
        Directory::with_separator(path, self.separator())
    }

    pub fn hash(&self, path: impl AsRef<Path>) -> Result<Hash> {
        Hash::with_algorithm(path, &self.hash_algorithm)
    }

    pub fn command(&self, command: impl Into<String>) -> Command {
        let cmd = Command::new(command);
        match &self.shell {
            Some(shell) => cmd.with_shell(shell.clone()),
            None => cmd,
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn parse_error(path: &Path, format: &str, err: impl std::fmt::Display) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        format: format.into(),
        message: err.to_string(),
    }
}

fn serialize_error(path: &Path, format: &str, err: impl std::fmt::Display) -> Error {
    Error::ConfigSerialize {
        path: path.to_path_buf(),
        format: format.into(),
        message: err.to_string(),
    }
}
