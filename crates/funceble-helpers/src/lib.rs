//! Helper utilities for the availability checker
//!
//! Small, stateless building blocks: file digests, file I/O, directory path
//! normalization, recursive mapping edits and shell command execution.

pub mod command;
pub mod config;
pub mod dict;
pub mod directory;
pub mod error;
pub mod file;
pub mod hash;
pub mod logging;

pub use command::{Command, CommandOutput};
pub use config::HelperConfig;
pub use dict::{Dict, Mapping, Scalar, Value};
pub use directory::{Directory, directory_separator, set_directory_separator};
pub use error::{Error, Result};
pub use file::File;
pub use hash::{Algorithm, Hash, HashOutput, Selection};
