#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::indexing_slicing)] // Bounds checked by logic

//! # ccpack - Manifest baker for Lua packages
//!
//! `ccpack` scans a package tree for Lua sources and writes
//! `baked_manifest.json`, which lists every file together with the raw GitHub
//! URL it can be downloaded from. The in-game fetcher reads that manifest and
//! pulls the files one by one.
//!
//! The package is described by a `ccpack.json` at the root of the tree.
//! Dependencies vendored as git submodules keep their own `ccpack.json`; files
//! beneath such a directory are served from the dependency's repository and
//! their paths are relative to it.
//!
//! ## Architecture
//!
//! - [`descriptor`]: `ccpack.json` loading
//! - [`scanner`]: directory walk and descriptor scoping
//! - [`manifest`]: manifest types, URL construction and output
//! - [`bake`]: the load, walk, write pipeline
//! - [`config`]: optional `ccpack.toml` settings
//! - [`output`]: progress messages
//!
//! ## Example Usage
//!
//! ```no_run
//! use ccpack::BakeContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = BakeContext::new(std::env::current_dir()?)?;
//! let report = ccpack::bake::run(&ctx)?;
//! println!("{} files", report.files);
//! # Ok(())
//! # }
//! ```

/// The load, walk, write pipeline.
pub mod bake;

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration parsing and validation.
pub mod config;

/// Package descriptor loading.
pub mod descriptor;

/// Error types.
pub mod error;

/// Diagnostic logging setup.
pub mod logging;

/// Manifest types, URL construction and output.
pub mod manifest;

/// Output formatting and verbosity.
pub mod output;

/// Filesystem scanning and descriptor scoping.
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

pub use config::{Config, Scoping};
pub use descriptor::Descriptor;
pub use error::BakeError;
pub use manifest::{FileRecord, MANIFEST_FILE, Manifest};

use std::path::PathBuf;

/// Current version of the ccpack binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the package descriptor file.
pub const DESCRIPTOR_FILE: &str = "ccpack.json";

/// Name of the directory holding the fetcher itself; never scanned.
pub const TOOL_DIR: &str = "ccpack";

/// Central context for a bake.
///
/// Holds the scan root and the settings every stage of the pipeline reads.
///
/// # Examples
///
/// ```no_run
/// use ccpack::{BakeContext, Config};
///
/// # fn main() -> anyhow::Result<()> {
/// // Load ccpack.toml from the scan root, if any
/// let ctx = BakeContext::new("/tmp/pkg".into())?;
///
/// // Use explicit settings (for testing)
/// let ctx = BakeContext::with_config("/tmp/pkg".into(), Config::default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BakeContext {
    /// Directory being scanned; the descriptor and manifest live here.
    pub root: PathBuf,

    /// Loaded configuration settings.
    pub config: Config,
}

impl BakeContext {
    /// Creates a context for `root`, loading `ccpack.toml` from it if present.
    ///
    /// # Errors
    /// Returns an error if the configuration file exists but cannot be read,
    /// parsed or validated.
    pub fn new(root: PathBuf) -> error::Result<Self> {
        let config = Config::load_from_root(&root)?;
        Ok(Self { root, config })
    }

    /// Creates a context with explicit settings.
    #[must_use]
    pub const fn with_config(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Path of the root descriptor.
    #[must_use]
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_FILE)
    }

    /// Path the manifest is written to.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}
