//! Utility functions and helpers.
//!
//! - [`paths`]: relative path computation and URL path rendering

/// Path manipulation and resolution utilities
pub mod paths;

pub use paths::{normalize_to_relative, relative_to, to_url_path};
