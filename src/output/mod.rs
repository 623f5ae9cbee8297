//! Progress output for the ccpack CLI.
//!
//! Everything here goes to stderr; stdout is reserved for the manifest that
//! `--dry-run` prints. Progress lines are dimmed, the final confirmation is
//! green and warnings are bold yellow.

use colored::{ColoredString, Colorize};
use std::sync::atomic::{AtomicU8, Ordering};

/// How much progress a bake reports.
///
/// Levels are ordered: a message tagged with a level is printed when the
/// current setting is at least that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings only.
    Quiet = 0,
    /// Directory and file progress plus the final confirmation.
    Normal = 1,
    /// Also the URL computed for every file.
    Verbose = 2,
}

/// Current level, stored as its discriminant
static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

/// Sets the level used by every function in this module.
pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

/// The level set by [`set_verbosity`], `Normal` if it was never called.
pub fn get_verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        0 => Verbosity::Quiet,
        2 => Verbosity::Verbose,
        _ => Verbosity::Normal,
    }
}

/// Whether a message tagged `level` is printed at the current setting
fn shows(level: Verbosity) -> bool {
    get_verbosity() >= level
}

/// Print `line` if `level` is shown
fn emit(level: Verbosity, line: ColoredString) {
    if shows(level) {
        eprintln!("{line}");
    }
}

/// Final confirmation after the manifest is written.
pub fn success(message: &str) {
    emit(Verbosity::Normal, message.green());
}

/// Problems that do not stop the bake; printed even with `--quiet`.
pub fn warning(message: &str) {
    emit(Verbosity::Quiet, message.yellow().bold());
}

/// Directory progress ("Entering directory", "Found ccpack.json").
pub fn info(message: &str) {
    emit(Verbosity::Normal, message.dimmed());
}

/// Detail shown only with `--verbose`.
pub fn verbose(message: &str) {
    emit(Verbosity::Verbose, message.dimmed());
}

/// A file being added to the manifest, e.g. `Adding lib/util.lua`.
pub fn action(verb: &str, subject: &str) {
    if shows(Verbosity::Normal) {
        eprintln!("{} {subject}", verb.dimmed().bold());
    }
}
