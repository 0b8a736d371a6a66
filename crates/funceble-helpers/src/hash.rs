//! File content digests
//!
//! Computes `md5`, `sha1`, `sha224`, `sha384` and `sha512` digests over the raw
//! bytes of a file, as lowercase hexadecimal strings.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha384, Sha512};

use crate::{Error, Result};

/// Name that selects every supported algorithm at once.
const ALL_NAME: &str = "all";

/// A supported digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// The fixed set computed when every algorithm is requested.
    pub const ALL: [Algorithm; 5] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha384,
        Self::Sha512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of the hexadecimal digest.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha224 => 56,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    /// Digest `data`, returning lowercase hex.
    pub fn digest(&self, data: &[u8]) -> String {
        match self {
            Self::Md5 => format!("{:x}", Md5::digest(data)),
            Self::Sha1 => format!("{:x}", Sha1::digest(data)),
            Self::Sha224 => format!("{:x}", Sha224::digest(data)),
            Self::Sha384 => format!("{:x}", Sha384::digest(data)),
            Self::Sha512 => format!("{:x}", Sha512::digest(data)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which digests [`Hash::get`] computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    Single(Algorithm),
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL_NAME {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Single)
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(Algorithm::Md5)
    }
}

/// Result of [`Hash::get`].
///
/// The shape depends on how the [`Hash`] was built: a bare hex string for a
/// single algorithm with `only_hash`, otherwise a table keyed by algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutput {
    Hex(String),
    Table(BTreeMap<String, String>),
}

impl HashOutput {
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Self::Hex(hex) => Some(hex),
            Self::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Hex(_) => None,
            Self::Table(table) => Some(table),
        }
    }
}

/// Digest computer bound to one file path.
#[derive(Debug, Clone)]
pub struct Hash {
    path: PathBuf,
    selection: Selection,
    only_hash: bool,
}

impl Hash {
    /// Hash `path` with `md5`, returning a table.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            selection: Selection::default(),
            only_hash: false,
        }
    }

    /// Hash `path` with the named algorithm, or every algorithm for `"all"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] for any other name.
    pub fn with_algorithm(path: impl AsRef<Path>, algorithm: &str) -> Result<Self> {
        Ok(Self {
            selection: algorithm.parse()?,
            ..Self::new(path)
        })
    }

    /// Return the bare hex string instead of a one-entry table. Ignored when
    /// every algorithm is selected.
    pub fn only_hash(mut self, only_hash: bool) -> Self {
        self.only_hash = only_hash;
        self
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Compute the selected digests.
    ///
    /// Returns `Ok(None)` if the path is not an existing file. The file is read
    /// once and fed to every selected algorithm.
    pub fn get(&self) -> Result<Option<HashOutput>> {
        if !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "Nothing to hash");
            return Ok(None);
        }

        let data = self.read()?;

        let output = match self.selection {
            Selection::Single(algo) if self.only_hash => HashOutput::Hex(algo.digest(&data)),
            Selection::Single(algo) => {
                HashOutput::Table(BTreeMap::from([(algo.to_string(), algo.digest(&data))]))
            }
            Selection::All => HashOutput::Table(
                Algorithm::ALL
                    .iter()
                    .map(|algo| (algo.to_string(), algo.digest(&data)))
                    .collect(),
            ),
        };

        Ok(Some(output))
    }

    /// Digest the file with the named algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] for an unknown name (including
    /// `"all"`) and [`Error::NotFound`] if the file does not exist.
    pub fn hash_data(&self, algorithm: &str) -> Result<String> {
        let algo: Algorithm = algorithm.parse()?;
        let data = self.read()?;
        Ok(algo.digest(&data))
    }

    fn read(&self) -> Result<Vec<u8>> {
        tracing::debug!(path = %self.path.display(), selection = ?self.selection, "Hashing file");
        std::fs::read(&self.path).map_err(|e| Error::io(&self.path, e))
    }
}
