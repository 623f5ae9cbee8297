//! Package descriptors (`ccpack.json`).
//!
//! A descriptor sits at the root of a package and names the GitHub repository
//! its files are served from. Vendored packages (usually git submodules) carry
//! their own descriptor, which governs every file beneath it.

use crate::error::{BakeError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Metadata read from a `ccpack.json` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Descriptor {
    /// Package name, also the GitHub repository name.
    pub name: String,
    /// Version string, reported verbatim in the manifest.
    pub version: String,
    /// GitHub account owning the repository.
    pub author: String,
}

impl Descriptor {
    /// Loads a descriptor from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BakeError::DescriptorNotFound`] if the file does not exist,
    /// [`BakeError::MalformedDescriptor`] if it is not a JSON object with
    /// string `name`, `version` and `author` fields, and [`BakeError::Io`]
    /// for any other read failure.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BakeError::DescriptorNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(BakeError::io(path, e)),
        };

        Self::parse(&content).map_err(|e| BakeError::MalformedDescriptor {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parses descriptor JSON. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the input is not a valid descriptor.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Loads the descriptor in `dir` if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if a descriptor exists but cannot be read or parsed.
    pub fn load_from_dir(dir: &Path, file_name: &str) -> Result<Option<Self>> {
        let path = dir.join(file_name);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }
}
