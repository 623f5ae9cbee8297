//! Filesystem scanning for source files.
//!
//! The walk keeps the governing descriptor of every visited entry on a stack
//! that mirrors the directory stack.

/// Descriptor scoping that mirrors the directory stack of a walk.
pub mod scope;

/// Source file discovery with excluded-directory pruning.
pub mod walk;

pub use scope::{DescriptorStack, Frame};
pub use walk::collect_files;
