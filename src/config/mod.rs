//! Optional `ccpack.toml` settings.
//!
//! Every key has a default, so a package without the file bakes exactly as
//! the fixed names and URLs describe.

pub mod validator;

use crate::error::{BakeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file in the scan root.
pub const CONFIG_FILE: &str = "ccpack.toml";

/// Contents of `ccpack.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// What the walk selects and prunes
    #[serde(default)]
    pub scan: ScanConfig,

    /// Hosting prefixes used when building URLs
    #[serde(default)]
    pub urls: UrlConfig,
}

/// `[scan]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// File name suffix selecting source files
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Directory names pruned from the walk
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    /// How long a nested descriptor stays in effect
    #[serde(default)]
    pub scoping: Scoping,
}

/// How long a nested descriptor stays in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scoping {
    /// Only inside the directory that holds it.
    #[default]
    Lexical,
    /// For everything visited after it, including later siblings.
    Legacy,
}

/// `[urls]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlConfig {
    /// Prefix of raw file downloads
    #[serde(default = "default_raw_host")]
    pub raw_host: String,
    /// Prefix of the author's profile page
    #[serde(default = "default_profile_host")]
    pub profile_host: String,
    /// Git ref segment between the repository name and the file path
    #[serde(default = "default_branch_ref")]
    pub branch_ref: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude_dirs: default_exclude_dirs(),
            scoping: Scoping::default(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            raw_host: default_raw_host(),
            profile_host: default_profile_host(),
            branch_ref: default_branch_ref(),
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults when it is absent
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| BakeError::io(path, e))?;
        let config = Self::parse(&content).map_err(|reason| BakeError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })?;

        validator::ConfigValidator::new().warn_unknown_fields(&content);
        Ok(config)
    }

    /// Load `ccpack.toml` from the scan root
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from_root(root: &Path) -> Result<Self> {
        Self::load(&root.join(CONFIG_FILE))
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would produce a useless manifest
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.scan.extension.is_empty() {
            return Err("scan.extension must not be empty".to_string());
        }
        if self.urls.raw_host.is_empty() {
            return Err("urls.raw_host must not be empty".to_string());
        }
        if self.urls.profile_host.is_empty() {
            return Err("urls.profile_host must not be empty".to_string());
        }
        if self.urls.branch_ref.trim_matches('/').is_empty() {
            return Err("urls.branch_ref must not be empty".to_string());
        }
        Ok(())
    }

    /// Whether a directory with this name is pruned from the walk
    #[must_use]
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.scan.exclude_dirs.iter().any(|d| d == name)
    }
}

fn default_extension() -> String {
    ".lua".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    vec![crate::TOOL_DIR.to_string(), ".git".to_string()]
}

fn default_raw_host() -> String {
    "https://raw.githubusercontent.com/".to_string()
}

fn default_profile_host() -> String {
    "https://github.com/".to_string()
}

fn default_branch_ref() -> String {
    "refs/heads/main".to_string()
}
