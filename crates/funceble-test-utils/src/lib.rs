//! Shared test utilities for the funceble-helpers workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`dir`]: [`dir::TestDir`] scratch directory with file assertions

pub mod dir;
