//! Command-line interface definitions for ccpack.
//!
//! The definitions are shared between the main binary and the xtask man page
//! generator. Every flag is optional: a bare `ccpack` bakes the current
//! directory.
//!
//! Note: Field-level documentation is provided via clap attributes,
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::config::{Config, Scoping};
use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for ccpack.
#[derive(Parser, Debug)]
#[command(
    name = "ccpack",
    version = crate::VERSION,
    about = "Bake baked_manifest.json for a Lua package",
    long_about = "Scans the package tree for Lua sources and writes baked_manifest.json, \
                  listing each file with its raw GitHub download URL. Requires ccpack.json \
                  in the package root; nested ccpack.json files mark vendored dependencies."
)]
pub struct Cli {
    /// Package root to scan
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Keep a nested descriptor in effect after leaving its directory
    #[arg(long)]
    pub legacy_scoping: bool,

    /// Print the manifest to stdout instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.legacy_scoping {
            config.scan.scoping = Scoping::Legacy;
        }
    }
}
