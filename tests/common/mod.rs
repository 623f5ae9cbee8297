#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use ccpack::{DESCRIPTOR_FILE, MANIFEST_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Package tree fixture for consistent test setup
pub struct TestPackage {
    pub temp_dir: TempDir,
}

impl TestPackage {
    /// Create a package root with a `ccpack.json`
    pub fn new(name: &str, author: &str) -> Result<Self> {
        let package = Self::empty()?;
        package.descriptor(".", name, "1.0.0", author)?;
        Ok(package)
    }

    /// Create a package root without any descriptor
    pub fn empty() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the package root path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file, creating parent directories
    pub fn write(&self, rel: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a `ccpack.json` into `dir`
    pub fn descriptor(&self, dir: &str, name: &str, version: &str, author: &str) -> Result<()> {
        let json = serde_json::json!({
            "name": name,
            "version": version,
            "author": author,
        });
        self.write(
            &format!("{dir}/{DESCRIPTOR_FILE}"),
            &serde_json::to_string_pretty(&json)?,
        )?;
        Ok(())
    }

    /// Path of the baked manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.path().join(MANIFEST_FILE)
    }

    /// Parse the baked manifest
    pub fn manifest(&self) -> Result<serde_json::Value> {
        let content = fs::read_to_string(self.manifest_path())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `path` fields of the baked manifest, in order
    pub fn manifest_paths(&self) -> Result<Vec<String>> {
        let manifest = self.manifest()?;
        Ok(manifest["files"]
            .as_array()
            .map(|files| {
                files
                    .iter()
                    .filter_map(|f| f["path"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// The ccpack binary, running in the package root
    pub fn cmd(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("ccpack")?;
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        Ok(cmd)
    }
}
