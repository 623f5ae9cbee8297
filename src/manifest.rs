//! The baked manifest (`baked_manifest.json`).
//!
//! The manifest is what the in-game fetcher downloads first: it names the
//! package and lists every source file together with the raw GitHub URL the
//! file can be fetched from. It is rebuilt from scratch on every bake.

use crate::config::UrlConfig;
use crate::descriptor::Descriptor;
use crate::error::{BakeError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// File name of the baked manifest
pub const MANIFEST_FILE: &str = "baked_manifest.json";

/// Indentation used when writing the manifest
const INDENT: &[u8] = b"    ";

/// One downloadable source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Location relative to the governing package root, `/`-separated
    pub path: String,
    /// Raw download URL
    pub url: String,
}

impl FileRecord {
    /// Build the record for `path` inside the package described by `descriptor`
    #[must_use]
    pub fn new(descriptor: &Descriptor, path: String, urls: &UrlConfig) -> Self {
        let url = raw_url(urls, descriptor, &path);
        Self { path, url }
    }
}

/// Top-level manifest document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Root package name
    pub name: String,
    /// Root package version, copied verbatim
    pub version: String,
    /// Profile page of the root package's author
    pub url: String,
    /// Files in traversal order
    pub files: Vec<FileRecord>,
}

impl Manifest {
    /// Create an empty manifest for the root package
    #[must_use]
    pub fn new(root: &Descriptor, urls: &UrlConfig) -> Self {
        Self {
            name: root.name.clone(),
            version: root.version.clone(),
            url: profile_url(urls, &root.author),
            files: Vec::new(),
        }
    }

    /// Append a file record
    pub fn push(&mut self, record: FileRecord) {
        self.files.push(record);
    }

    /// Number of file records
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files were collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Serialize as pretty-printed JSON with four-space indentation
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Write the manifest to `path`, replacing any existing file
    ///
    /// The bytes go to a temporary file next to `path` that is then renamed
    /// over it, so a failed write leaves the previous manifest intact.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written or
    /// renamed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| BakeError::io(dir, e))?;
        file.write_all(&json).map_err(|e| BakeError::io(file.path(), e))?;
        file.persist(path).map_err(|e| BakeError::io(path, e.error))?;
        Ok(())
    }

    /// Load a previously written manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|e| BakeError::io(path, e))?;
        Ok(serde_json::from_slice(&content)?)
    }
}

/// Raw download URL of `path` in the repository named by `descriptor`
#[must_use]
pub fn raw_url(urls: &UrlConfig, descriptor: &Descriptor, path: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        urls.raw_host.trim_end_matches('/'),
        descriptor.author,
        descriptor.name,
        urls.branch_ref.trim_matches('/'),
        path
    )
}

/// Profile URL of a hosting account
#[must_use]
pub fn profile_url(urls: &UrlConfig, author: &str) -> String {
    format!("{}/{}", urls.profile_host.trim_end_matches('/'), author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn alice() -> Descriptor {
        Descriptor {
            name: "mylib".to_string(),
            version: "1.0.0".to_string(),
            author: "alice".to_string(),
        }
    }

    #[test]
    fn test_raw_url_default_hosts() {
        let url = raw_url(&UrlConfig::default(), &alice(), "lib/util.lua");
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/alice/mylib/refs/heads/main/lib/util.lua"
        );
    }

    #[test]
    fn test_url_prefixes_without_trailing_slash() {
        let urls = UrlConfig {
            raw_host: "https://git.example.org/raw".to_string(),
            profile_host: "https://git.example.org".to_string(),
            branch_ref: "/refs/heads/dev/".to_string(),
        };
        assert_eq!(
            raw_url(&urls, &alice(), "init.lua"),
            "https://git.example.org/raw/alice/mylib/refs/heads/dev/init.lua"
        );
        assert_eq!(profile_url(&urls, "alice"), "https://git.example.org/alice");
    }

    #[test]
    fn test_new_manifest_uses_profile_url() {
        let manifest = Manifest::new(&alice(), &UrlConfig::default());
        assert_eq!(manifest.name, "mylib");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.url, "https://github.com/alice");
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_json_layout() {
        let urls = UrlConfig::default();
        let mut manifest = Manifest::new(&alice(), &urls);
        manifest.push(FileRecord::new(&alice(), "init.lua".to_string(), &urls));

        let json = String::from_utf8(manifest.to_json().unwrap()).unwrap();
        let expected = r#"{
    "name": "mylib",
    "version": "1.0.0",
    "url": "https://github.com/alice",
    "files": [
        {
            "path": "init.lua",
            "url": "https://raw.githubusercontent.com/alice/mylib/refs/heads/main/init.lua"
        }
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_paths_written_as_utf8() {
        let urls = UrlConfig::default();
        let mut manifest = Manifest::new(&alice(), &urls);
        manifest.push(FileRecord::new(&alice(), "é.lua".to_string(), &urls));

        let json = String::from_utf8(manifest.to_json().unwrap()).unwrap();
        assert!(json.contains(r#""path": "é.lua""#));
        assert!(!json.contains("\\u00e9"));
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(&path, "stale").unwrap();

        let manifest = Manifest::new(&alice(), &UrlConfig::default());
        manifest.save(&path).unwrap();

        assert_eq!(Manifest::load(&path).unwrap(), manifest);
        let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
